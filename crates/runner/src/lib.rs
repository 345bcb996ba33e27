//! Hive Runner - paper trading session
//!
//! Wires the pieces of the toolkit into one running application:
//!
//! - **Bootstrap**: paper interface, application and registry from an `AppConfig`
//! - **Session monitor**: an extension that logs every event and checks ticks
//!   and bars against the trading session window
//!
//! ## Architecture
//!
//! ```text
//!   facade (send/cancel/subscribe/query)
//!                 │
//!                 ▼
//!   ┌──────────────────────────┐   events   ┌────────────────┐
//!   │  PaperGateway            │ ─────────► │ EventDispatcher│
//!   │  (Trader + Market ports) │            └───────┬────────┘
//!   └──────────────────────────┘                    ▼
//!                                           SessionMonitor, ...
//! ```

pub mod bootstrap;
pub mod session_monitor;

pub use bootstrap::{Bootstrap, RunnerError, bootstrap};
pub use session_monitor::SessionMonitor;
