//! Error types for the gateway crate

use thiserror::Error;

/// Transport-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("No subscribers")]
    NoSubscribers,

    #[error("Channel closed")]
    ChannelClosed,

    /// The subscriber fell behind and this many messages were overwritten
    #[error("Subscriber lagged, {0} messages skipped")]
    Lagged(u64),
}
