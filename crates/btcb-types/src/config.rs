//! Balance display configuration
//!
//! Wallet and RPC front ends load this from JSON; every field has a default
//! so partial documents are accepted.

use crate::{Amount, NumberLocale, NumericResult, Unit};
use serde::{Deserialize, Serialize};

/// How balances are rendered for humans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Display unit
    pub unit: Unit,
    /// Maximum fractional digits shown, at most [`crate::MAX_PRECISION`]
    pub precision: usize,
    /// Insert thousands separators
    pub group_digits: bool,
    /// Number punctuation
    pub locale: NumberLocale,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Mbcb,
            precision: 6,
            group_digits: true,
            locale: NumberLocale::default(),
        }
    }
}

impl DisplayConfig {
    /// Parse from a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to a pretty JSON document
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render an amount with these settings
    pub fn format(&self, amount: &Amount) -> NumericResult<String> {
        amount.format_balance(
            self.unit.ratio(),
            self.precision,
            self.group_digits,
            &self.locale,
        )
    }

    /// Render an amount followed by the unit symbol
    pub fn format_with_unit(&self, amount: &Amount) -> NumericResult<String> {
        Ok(format!("{} {}", self.format(amount)?, self.unit))
    }
}
