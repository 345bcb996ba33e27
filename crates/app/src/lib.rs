//! Hive Application Layer
//!
//! Routes typed trading events to pluggable extensions and fronts the
//! trading/market interfaces of several concurrently running applications.
//!
//! - **Extensions**: implement [`Extension`], override the `on_*` handlers
//!   you care about, then declare the type once with [`register_extension!`]
//! - **Registry**: [`AppRegistry`] resolves a named or the current [`Application`]
//! - **Capability gate**: `TD_FUNC` / `MD_FUNC` checked before every call
//! - **Facade**: [`func`] - send/cancel orders, subscribe, query
//! - **Dispatcher**: [`EventDispatcher`] fans bus events out to extensions
//!
//! ## Architecture
//!
//! ```text
//! caller ──► func::send_order ──► AppRegistry::resolve ──► CapabilityGate
//!                                                               │
//!                     Monitors (fire-and-forget) ◄──────────────┤
//!                                                               ▼
//!                                                        Trader / Market
//!                                                               │ events
//!                                                               ▼
//!                       EventDispatcher ──► DispatchTable ──► Extension::on_*
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hive_app::{Extension, ExtensionBase, register_extension};
//!
//! struct Recorder { base: ExtensionBase }
//!
//! impl Extension for Recorder {
//!     fn base(&self) -> &ExtensionBase { &self.base }
//!     fn on_tick(&self, tick: &TickData) -> hive_app::Result<()> { Ok(()) }
//! }
//!
//! register_extension!(Recorder);
//! ```

pub mod application;
pub mod capability;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod extension;
pub mod func;
pub mod registry;
pub mod signals;

// Re-export main types
pub use application::{Application, ApplicationBuilder, DeliveryFailure};
pub use capability::{Capability, CapabilityGate};
pub use config::{AppConfig, ConfigError, load_config, load_config_from_str};
pub use dispatcher::{DispatchStats, EventDispatcher};
pub use error::{Error, Result};
pub use extension::{
    Deliver, DispatchTable, Extension, ExtensionBase, ExtensionType, attach, init_app,
};
pub use func::{QueryKind, cancel_order, query, send_order, subscribe};
pub use registry::{AppRegistry, AppTarget, CURRENT_APP};
pub use signals::{Monitor, Monitors};
