use crate::event::EventKind;
use thiserror::Error;

/// Domain-level errors for request construction and event handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown {field} value: {value:?}")]
    UnknownEnumValue { field: &'static str, value: String },

    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unhandled event kind: {0:?}")]
    UnhandledEventKind(String),

    #[error("Payload mismatch: event kind {kind} carries {payload} data")]
    PayloadMismatch { kind: EventKind, payload: EventKind },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
