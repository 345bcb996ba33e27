use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::values::Timestamp;

/// Named values one extension publishes for the others (indicators, signals)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedData {
    /// Local symbol the values refer to
    pub local_symbol: String,
    pub datetime: Timestamp,
    pub values: BTreeMap<String, Decimal>,
}

impl SharedData {
    pub fn new(local_symbol: impl Into<String>, datetime: Timestamp) -> Self {
        Self {
            local_symbol: local_symbol.into(),
            datetime,
            values: BTreeMap::new(),
        }
    }

    /// Add a named value (builder style)
    pub fn with(mut self, key: impl Into<String>, value: Decimal) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.values.get(key).copied()
    }
}
