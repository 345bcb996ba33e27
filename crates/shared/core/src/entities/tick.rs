use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Exchange;
use crate::values::{Price, Timestamp, Volume, local_symbol};

/// Level-1 market snapshot for one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickData {
    pub symbol: String,
    pub exchange: Exchange,
    pub datetime: Timestamp,
    pub last_price: Price,
    /// Cumulative traded volume for the session
    pub volume: Volume,
    pub open_interest: Decimal,
    pub bid_price_1: Price,
    pub bid_volume_1: Volume,
    pub ask_price_1: Price,
    pub ask_volume_1: Volume,
}

impl TickData {
    /// Create a tick carrying only a last price; book fields start at zero
    pub fn new(
        symbol: impl Into<String>,
        exchange: Exchange,
        datetime: Timestamp,
        last_price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange,
            datetime,
            last_price,
            volume: Decimal::ZERO,
            open_interest: Decimal::ZERO,
            bid_price_1: Decimal::ZERO,
            bid_volume_1: Decimal::ZERO,
            ask_price_1: Decimal::ZERO,
            ask_volume_1: Decimal::ZERO,
        }
    }

    pub fn local_symbol(&self) -> String {
        local_symbol(&self.symbol, self.exchange)
    }

    /// Mid price, if both sides of the book are quoted
    pub fn mid_price(&self) -> Option<Price> {
        if self.bid_price_1.is_zero() || self.ask_price_1.is_zero() {
            return None;
        }
        self.bid_price_1
            .checked_add(self.ask_price_1)
            .map(|sum| sum / Decimal::TWO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(h: u32, m: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(2020, 7, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_local_symbol() {
        let tick = TickData::new("rb2010", Exchange::Shfe, at(9, 1), dec!(3500));
        assert_eq!(tick.local_symbol(), "rb2010.SHFE");
    }

    #[test]
    fn test_mid_price_needs_both_sides() {
        let mut tick = TickData::new("rb2010", Exchange::Shfe, at(9, 1), dec!(3500));
        assert_eq!(tick.mid_price(), None);

        tick.bid_price_1 = dec!(3499);
        tick.ask_price_1 = dec!(3501);
        assert_eq!(tick.mid_price(), Some(dec!(3500)));

        tick.bid_price_1 = Decimal::MAX;
        tick.ask_price_1 = Decimal::MAX;
        assert_eq!(tick.mid_price(), None);
    }
}
