//! Order request construction from symbolic or typed fields

use crate::entities::{Direction, Exchange, Offset, OrderType};
use crate::error::CoreResult;
use crate::requests::OrderRequest;
use crate::values::{Price, Volume};

/// Stateless helper for building `OrderRequest`s
///
/// Symbolic fields are matched case-insensitively against the closed
/// enumerations. A value outside them is an error, never a silent `None`.
pub struct OrderRequestBuilder;

impl OrderRequestBuilder {
    /// Build a request from string fields, e.g. `("rb2010", "SHFE", "long", "open", "limit", ..)`
    pub fn by_str(
        symbol: &str,
        exchange: &str,
        direction: &str,
        offset: &str,
        order_type: &str,
        volume: Volume,
        price: Price,
    ) -> CoreResult<OrderRequest> {
        Ok(Self::by_var(
            symbol,
            exchange.parse()?,
            direction.parse()?,
            offset.parse()?,
            order_type.parse()?,
            volume,
            price,
        ))
    }

    /// Build a request from already typed fields
    pub fn by_var(
        symbol: impl Into<String>,
        exchange: Exchange,
        direction: Direction,
        offset: Offset,
        order_type: OrderType,
        volume: Volume,
        price: Price,
    ) -> OrderRequest {
        OrderRequest {
            symbol: symbol.into(),
            exchange,
            direction,
            offset,
            order_type,
            volume,
            price,
        }
    }
}

/// Shorthand for [`OrderRequestBuilder::by_str`]
pub fn generate_order_req_by_str(
    symbol: &str,
    exchange: &str,
    direction: &str,
    offset: &str,
    order_type: &str,
    volume: Volume,
    price: Price,
) -> CoreResult<OrderRequest> {
    OrderRequestBuilder::by_str(symbol, exchange, direction, offset, order_type, volume, price)
}

/// Shorthand for [`OrderRequestBuilder::by_var`]
pub fn generate_order_req_by_var(
    symbol: impl Into<String>,
    exchange: Exchange,
    direction: Direction,
    offset: Offset,
    order_type: OrderType,
    volume: Volume,
    price: Price,
) -> OrderRequest {
    OrderRequestBuilder::by_var(symbol, exchange, direction, offset, order_type, volume, price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_by_str_limit_order() {
        let req = generate_order_req_by_str(
            "rb2010",
            "SHFE",
            "long",
            "open",
            "limit",
            dec!(1),
            dec!(3500),
        )
        .unwrap();

        assert_eq!(req.symbol, "rb2010");
        assert_eq!(req.exchange, Exchange::Shfe);
        assert_eq!(req.direction, Direction::Long);
        assert_eq!(req.offset, Offset::Open);
        assert_eq!(req.order_type, OrderType::Limit);
        assert_eq!(req.volume, dec!(1));
        assert_eq!(req.price, dec!(3500));
    }

    #[test]
    fn test_by_str_ignores_case() {
        let req = OrderRequestBuilder::by_str(
            "IF2009",
            "cffex",
            "SHORT",
            "CloseToday",
            "FAK",
            dec!(3),
            dec!(4700.2),
        )
        .unwrap();

        assert_eq!(req.exchange, Exchange::Cffex);
        assert_eq!(req.direction, Direction::Short);
        assert_eq!(req.offset, Offset::CloseToday);
        assert_eq!(req.order_type, OrderType::Fak);
    }

    #[test]
    fn test_by_str_rejects_unknown_symbol() {
        let err = OrderRequestBuilder::by_str(
            "rb2010",
            "SHFE",
            "sideways",
            "open",
            "limit",
            dec!(1),
            dec!(3500),
        )
        .unwrap_err();

        assert_eq!(
            err,
            CoreError::UnknownEnumValue {
                field: "direction",
                value: "sideways".to_string()
            }
        );
    }

    #[test]
    fn test_by_var_matches_by_str() {
        let typed = generate_order_req_by_var(
            "m2009",
            Exchange::Dce,
            Direction::Short,
            Offset::Close,
            OrderType::Market,
            dec!(5),
            dec!(2900),
        );
        let symbolic = generate_order_req_by_str(
            "m2009",
            "DCE",
            "short",
            "close",
            "market",
            dec!(5),
            dec!(2900),
        )
        .unwrap();

        assert_eq!(typed, symbolic);
    }
}
