use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Direction, Exchange};
use crate::values::{Price, Volume, local_symbol};

/// Holding in one instrument and direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionData {
    pub symbol: String,
    pub exchange: Exchange,
    pub direction: Direction,
    pub volume: Volume,
    /// Volume locked by pending close orders
    pub frozen: Volume,
    /// Volume carried over from previous sessions
    pub yd_volume: Volume,
    /// Average holding price
    pub price: Price,
    pub pnl: Decimal,
}

impl PositionData {
    /// Create a flat position record
    pub fn new(symbol: impl Into<String>, exchange: Exchange, direction: Direction) -> Self {
        Self {
            symbol: symbol.into(),
            exchange,
            direction,
            volume: Decimal::ZERO,
            frozen: Decimal::ZERO,
            yd_volume: Decimal::ZERO,
            price: Decimal::ZERO,
            pnl: Decimal::ZERO,
        }
    }

    pub fn local_symbol(&self) -> String {
        local_symbol(&self.symbol, self.exchange)
    }

    /// Volume that can still be closed
    pub fn available(&self) -> Volume {
        self.volume - self.frozen
    }

    pub fn is_flat(&self) -> bool {
        self.volume.is_zero()
    }
}
