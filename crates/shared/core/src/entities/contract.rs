use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Exchange;
use crate::values::{Price, Volume, local_symbol};

/// Static instrument definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractData {
    pub symbol: String,
    pub exchange: Exchange,
    pub name: String,
    /// Contract multiplier
    pub size: Decimal,
    pub price_tick: Price,
    pub min_volume: Volume,
}

impl ContractData {
    pub fn local_symbol(&self) -> String {
        local_symbol(&self.symbol, self.exchange)
    }

    /// Round a price down to the nearest tick
    pub fn round_to_tick(&self, price: Price) -> Price {
        if self.price_tick.is_zero() {
            return price;
        }
        (price / self.price_tick).floor() * self.price_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to_tick() {
        let contract = ContractData {
            symbol: "IF2009".to_string(),
            exchange: Exchange::Cffex,
            name: "CSI 300 index future".to_string(),
            size: dec!(300),
            price_tick: dec!(0.2),
            min_volume: dec!(1),
        };
        assert_eq!(contract.round_to_tick(dec!(4700.37)), dec!(4700.2));
        assert_eq!(contract.local_symbol(), "IF2009.CFFEX");
    }
}
