use serde::{Deserialize, Serialize};

use super::{Direction, Exchange, Offset};
use crate::values::{Price, Timestamp, Volume, local_symbol};

/// A fill against one of our orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeData {
    pub symbol: String,
    pub exchange: Exchange,
    pub order_id: String,
    pub trade_id: String,
    pub direction: Direction,
    pub offset: Offset,
    pub price: Price,
    pub volume: Volume,
    pub time: Timestamp,
}

impl TradeData {
    pub fn local_symbol(&self) -> String {
        local_symbol(&self.symbol, self.exchange)
    }

    /// Notional value of the fill (price * volume, contract size not applied)
    ///
    /// `None` if the product does not fit a `Decimal`.
    pub fn notional(&self) -> Option<Price> {
        self.price.checked_mul(self.volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn trade(price: Price, volume: Volume) -> TradeData {
        TradeData {
            symbol: "rb2010".to_string(),
            exchange: Exchange::Shfe,
            order_id: "1".to_string(),
            trade_id: "1".to_string(),
            direction: Direction::Long,
            offset: Offset::Open,
            price,
            volume,
            time: NaiveDate::from_ymd_opt(2020, 7, 1)
                .unwrap()
                .and_hms_opt(9, 1, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_notional() {
        assert_eq!(trade(dec!(3500), dec!(2)).notional(), Some(dec!(7000)));
        assert_eq!(trade(Decimal::MAX, dec!(2)).notional(), None);
    }
}
