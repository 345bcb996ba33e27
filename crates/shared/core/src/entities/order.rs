use serde::{Deserialize, Serialize};

use super::{Direction, Exchange, Offset, OrderType, Status};
use crate::requests::CancelRequest;
use crate::values::{Price, Timestamp, Volume, local_symbol};

/// Order state as reported by the trading interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderData {
    pub symbol: String,
    pub exchange: Exchange,
    /// Interface-assigned order ID
    pub order_id: String,
    pub direction: Direction,
    pub offset: Offset,
    pub order_type: OrderType,
    pub price: Price,
    pub volume: Volume,
    /// Filled volume so far
    pub traded: Volume,
    pub status: Status,
    pub time: Timestamp,
}

impl OrderData {
    pub fn local_symbol(&self) -> String {
        local_symbol(&self.symbol, self.exchange)
    }

    /// Returns true if the order can still trade or be cancelled
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Remaining volume not yet filled
    pub fn remaining(&self) -> Volume {
        self.volume - self.traded
    }

    /// Build the request that cancels this order
    pub fn cancel_request(&self) -> CancelRequest {
        CancelRequest::new(&self.order_id, &self.symbol, self.exchange)
    }
}
