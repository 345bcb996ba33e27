use serde::{Deserialize, Serialize};

/// Order lifecycle status as reported by the trading interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Sent, not yet acknowledged
    Submitting,
    /// Resting on the book, nothing filled
    NotTraded,
    /// Partially filled, remainder still resting
    PartTraded,
    /// Completely filled
    AllTraded,
    /// Cancelled by the user
    Cancelled,
    /// Rejected by the exchange or the interface
    Rejected,
}

impl Status {
    /// Returns true if the order can still trade or be cancelled
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Status::Submitting | Status::NotTraded | Status::PartTraded
        )
    }
}
