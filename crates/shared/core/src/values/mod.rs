use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Volume in lots
pub type Volume = Decimal;

/// Exchange-local wall clock time, no timezone attached
pub type Timestamp = NaiveDateTime;

/// Exchange instrument code, e.g. `rb2010`
pub type Symbol = String;

/// Join a symbol and an exchange code into the `symbol.EXCHANGE` form
pub fn local_symbol(symbol: &str, exchange: impl std::fmt::Display) -> String {
    format!("{}.{}", symbol, exchange)
}
