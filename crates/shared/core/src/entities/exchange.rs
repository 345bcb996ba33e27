use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Futures exchanges routed through the trading interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// Shanghai Futures Exchange
    Shfe,
    /// Shanghai International Energy Exchange
    Ine,
    /// Zhengzhou Commodity Exchange
    Czce,
    /// China Financial Futures Exchange
    Cffex,
    /// Dalian Commodity Exchange
    Dce,
}

impl Exchange {
    pub const ALL: [Exchange; 5] = [
        Exchange::Shfe,
        Exchange::Ine,
        Exchange::Czce,
        Exchange::Cffex,
        Exchange::Dce,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shfe => "SHFE",
            Self::Ine => "INE",
            Self::Czce => "CZCE",
            Self::Cffex => "CFFEX",
            Self::Dce => "DCE",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownEnumValue {
                field: "exchange",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_any_case() {
        assert_eq!("SHFE".parse::<Exchange>().unwrap(), Exchange::Shfe);
        assert_eq!("cffex".parse::<Exchange>().unwrap(), Exchange::Cffex);
        assert_eq!(" Dce ".parse::<Exchange>().unwrap(), Exchange::Dce);
    }

    #[test]
    fn test_unknown_exchange() {
        let err = "NYMEX".parse::<Exchange>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownEnumValue {
                field: "exchange",
                value: "NYMEX".to_string()
            }
        );
    }
}
