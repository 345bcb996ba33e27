//! Hive Ports
//!
//! Port definitions (traits) for the external collaborators of the Hive
//! toolkit. Real connectivity lives behind these traits; the application
//! layer only ever talks to them.

mod error;
mod market;
mod trader;

pub use error::{GatewayError, GatewayResult};
pub use market::Market;
pub use trader::Trader;
