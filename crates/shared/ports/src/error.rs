use thiserror::Error;

/// Failures reported by a trading or market collaborator
///
/// The application layer propagates these unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Interface not connected")]
    NotConnected,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Unknown order: {0}")]
    UnknownOrder(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
