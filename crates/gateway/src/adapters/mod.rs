//! Trading interface adapters
//!
//! Adapters implement the `Trader` / `Market` ports and publish what the
//! interface reports back as `Event`s.

pub mod paper;

pub use paper::{PaperConfig, PaperGateway};
