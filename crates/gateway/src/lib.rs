//! Hive Gateway
//!
//! Gateway layer for the Hive toolkit. Provides:
//! - Transport abstraction for events (tokio channels, with traits for future transports)
//! - `PaperGateway`, an in-process trading and market interface
//!
//! ## Architecture
//!
//! ```text
//!  facade calls                      events
//!  (send/cancel/subscribe/query)     (order, trade, account, ...)
//!         │                                 ▲
//!    ┌────▼─────────────────────────────────┴──┐
//!    │   Trader / Market ports (PaperGateway)  │
//!    └────────────────────┬────────────────────┘
//!                         │ ChannelPublisher<Event>
//!                    ┌────▼─────┐
//!                    │Dispatcher│ ──► extensions
//!                    └──────────┘
//! ```
//!
//! ## Transport
//!
//! Currently uses tokio broadcast channels for single-process operation.
//! The `Publisher`/`Subscriber` traits allow plugging in other transports.

pub mod adapters;
pub mod error;
pub mod transport;

// Re-export commonly used types
pub use adapters::{PaperConfig, PaperGateway};
pub use error::TransportError;
pub use hive_ports::{GatewayError, GatewayResult, Market, Trader};
pub use transport::{
    Publisher, Subscriber,
    channel::{ChannelPublisher, ChannelSubscriber},
};
