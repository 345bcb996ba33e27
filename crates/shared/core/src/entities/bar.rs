use serde::{Deserialize, Serialize};

use super::Exchange;
use crate::values::{Price, Timestamp, Volume, local_symbol};

/// OHLCV candle aggregated over `interval` minutes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    pub symbol: String,
    pub exchange: Exchange,
    /// Bar open time
    pub datetime: Timestamp,
    /// Bar length in minutes
    pub interval: u32,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}

impl BarData {
    pub fn local_symbol(&self) -> String {
        local_symbol(&self.symbol, self.exchange)
    }
}
