//! Paper trading adapter
//!
//! Runs fully in-process: orders are acknowledged immediately and only
//! fill when told to.

mod gateway;

pub use gateway::{PaperConfig, PaperGateway};
