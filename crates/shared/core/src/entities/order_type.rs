use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Order types supported by the trading interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Execute at specified price or better
    Limit,
    /// Execute at current market price
    Market,
    /// Market order triggered when price reaches the stop price
    Stop,
    /// Fill and kill: fill what is possible, cancel the rest
    Fak,
    /// Fill or kill: fill completely or cancel
    Fok,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Market => "market",
            Self::Stop => "stop",
            Self::Fak => "fak",
            Self::Fok => "fok",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "limit" => Ok(Self::Limit),
            "market" => Ok(Self::Market),
            "stop" => Ok(Self::Stop),
            "fak" => Ok(Self::Fak),
            "fok" => Ok(Self::Fok),
            _ => Err(CoreError::UnknownEnumValue {
                field: "order type",
                value: s.to_string(),
            }),
        }
    }
}
