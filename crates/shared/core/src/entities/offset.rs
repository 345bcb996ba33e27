use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Open/close flag of a futures order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Offset {
    Open,
    Close,
    /// Close a position opened today (SHFE/INE distinguish it)
    CloseToday,
    /// Close a position carried over from a previous session
    CloseYesterday,
}

impl Offset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::CloseToday => "closetoday",
            Self::CloseYesterday => "closeyesterday",
        }
    }

    pub fn is_close(&self) -> bool {
        !matches!(self, Self::Open)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Offset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "close" => Ok(Self::Close),
            "closetoday" => Ok(Self::CloseToday),
            "closeyesterday" => Ok(Self::CloseYesterday),
            _ => Err(CoreError::UnknownEnumValue {
                field: "offset",
                value: s.to_string(),
            }),
        }
    }
}
