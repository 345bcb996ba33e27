//! Request value objects sent to the trading interface

use serde::{Deserialize, Serialize};

use crate::entities::{Direction, Exchange, Offset, OrderData, OrderType, Status};
use crate::values::{Price, Timestamp, Volume, local_symbol};

/// Order submission request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub exchange: Exchange,
    pub direction: Direction,
    pub offset: Offset,
    pub order_type: OrderType,
    pub volume: Volume,
    pub price: Price,
}

impl OrderRequest {
    pub fn local_symbol(&self) -> String {
        local_symbol(&self.symbol, self.exchange)
    }

    /// Initial order state for this request once the interface assigned an ID
    pub fn to_order_data(&self, order_id: impl Into<String>, time: Timestamp) -> OrderData {
        OrderData {
            symbol: self.symbol.clone(),
            exchange: self.exchange,
            order_id: order_id.into(),
            direction: self.direction,
            offset: self.offset,
            order_type: self.order_type,
            price: self.price,
            volume: self.volume,
            traded: Volume::ZERO,
            status: Status::Submitting,
            time,
        }
    }
}

/// Cancel order request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    /// Interface-assigned ID of the order to cancel
    pub order_id: String,
    /// Instrument (for routing)
    pub symbol: String,
    pub exchange: Exchange,
}

impl CancelRequest {
    pub fn new(order_id: impl Into<String>, symbol: impl Into<String>, exchange: Exchange) -> Self {
        Self {
            order_id: order_id.into(),
            symbol: symbol.into(),
            exchange,
        }
    }

    pub fn local_symbol(&self) -> String {
        local_symbol(&self.symbol, self.exchange)
    }
}
