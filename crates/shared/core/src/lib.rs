//! Hive Core Domain
//!
//! Pure domain types for the Hive trading toolkit.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! - Closed enumerations shared by every payload (exchange, direction, ...)
//! - Typed event payloads, one per `EventKind`
//! - `Event`, whose kind always matches its payload
//! - Order and cancel requests plus the builder that produces them from strings
//! - Trading session window checks

pub mod builder;
pub mod entities;
pub mod error;
pub mod event;
pub mod requests;
pub mod session;
pub mod values;

// Re-export commonly used types at crate root
pub use builder::{OrderRequestBuilder, generate_order_req_by_str, generate_order_req_by_var};
pub use entities::{
    AccountData, BarData, ContractData, Direction, Exchange, Offset, OrderData, OrderType,
    PositionData, SharedData, Status, TickData, TradeData,
};
pub use error::{CoreError, CoreResult};
pub use event::{Event, EventData, EventKind};
pub use requests::{CancelRequest, OrderRequest};
pub use session::{SessionWindow, is_in_session};
pub use values::{Price, Symbol, Timestamp, Volume};
