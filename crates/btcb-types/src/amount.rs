//! Amounts, display units and balance formatting
//!
//! Raw amounts are 128-bit unit counts. Rendering divides by a unit ratio in
//! arbitrary precision, truncates (never rounds) to the requested number of
//! fractional digits and optionally groups the integer digits per a locale.

use crate::{NumericError, NumericResult, Uint128};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw amount of the smallest indivisible unit
pub type Amount = Uint128;

/// Most fractional digits [`Uint128::format_balance`] will render
pub const MAX_PRECISION: usize = 64;

/// 10^33 raw
pub const GBCB_RATIO: Amount = Amount::from_u128(10u128.pow(33));

/// 10^30 raw, the "mega" display unit
pub const MBCB_RATIO: Amount = Amount::from_u128(10u128.pow(30));

/// 10^27 raw
pub const KBCB_RATIO: Amount = Amount::from_u128(10u128.pow(27));

/// 10^24 raw
pub const BCB_RATIO: Amount = Amount::from_u128(10u128.pow(24));

/// The raw unit itself
pub const RAW_RATIO: Amount = Amount::from_u128(1);

/// Named display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "Gbcb")]
    Gbcb,
    #[serde(rename = "Mbcb")]
    Mbcb,
    #[serde(rename = "kbcb")]
    Kbcb,
    #[serde(rename = "bcb")]
    Bcb,
    #[serde(rename = "raw")]
    Raw,
}

impl Unit {
    /// Raw units per one of this unit
    pub fn ratio(&self) -> Amount {
        match self {
            Self::Gbcb => GBCB_RATIO,
            Self::Mbcb => MBCB_RATIO,
            Self::Kbcb => KBCB_RATIO,
            Self::Bcb => BCB_RATIO,
            Self::Raw => RAW_RATIO,
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Gbcb => "Gbcb",
            Self::Mbcb => "Mbcb",
            Self::Kbcb => "kbcb",
            Self::Bcb => "bcb",
            Self::Raw => "raw",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::Mbcb
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Number punctuation used when rendering balances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    /// Separates integer and fractional digits
    pub decimal_point: char,
    /// Inserted between digit groups
    pub thousands_sep: char,
    /// Group sizes starting at the decimal point; the last one repeats and a
    /// zero stops grouping
    pub grouping: Vec<u8>,
}

impl NumberLocale {
    /// Create a locale with explicit punctuation
    pub fn new(decimal_point: char, thousands_sep: char, grouping: Vec<u8>) -> Self {
        Self {
            decimal_point,
            thousands_sep,
            grouping,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            thousands_sep: ',',
            grouping: vec![3],
        }
    }
}

/// Indices into a run of `digit_count` digits before which a separator goes.
///
/// Groups are measured from the least significant digit outward.
pub fn separator_positions(digit_count: usize, grouping: &[u8]) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut remaining = digit_count;
    let mut sizes = grouping.iter().copied();
    let mut size = match sizes.next() {
        Some(size) => size as usize,
        None => return positions,
    };

    while size > 0 && remaining > size {
        remaining -= size;
        positions.push(remaining);
        if let Some(next) = sizes.next() {
            size = next as usize;
        }
    }

    positions.reverse();
    positions
}

fn group_digits(digits: &str, locale: &NumberLocale) -> String {
    let positions = separator_positions(digits.len(), &locale.grouping);
    let mut grouped = String::with_capacity(digits.len() + positions.len());
    let mut separators = positions.into_iter().peekable();

    for (index, digit) in digits.chars().enumerate() {
        if separators.peek() == Some(&index) {
            grouped.push(locale.thousands_sep);
            separators.next();
        }
        grouped.push(digit);
    }
    grouped
}

/// `"< 1"`, `"< 0.1"`, `"< 0.01"`, ...
fn below_precision(precision: usize, locale: &NumberLocale) -> String {
    let mut text = String::from("< ");
    if precision > 0 {
        text.push('0');
        text.push(locale.decimal_point);
        text.extend(std::iter::repeat('0').take(precision - 1));
    }
    text.push('1');
    text
}

fn fraction_digits(remainder: &BigUint, ratio: &BigUint, precision: usize, scale: &BigUint) -> String {
    if precision == 0 || remainder.is_zero() {
        return String::new();
    }

    let truncated = (remainder * scale) / ratio;
    let digits = truncated.to_str_radix(10);
    let padded = format!("{:0>width$}", digits, width = precision);
    padded.trim_end_matches('0').to_string()
}

impl Uint128 {
    /// Render this amount in units of `ratio` with up to `precision`
    /// fractional digits.
    ///
    /// Nonzero amounts too small to show at `precision` render as
    /// `"< 0.01"` style text. Fractional digits are truncated and trailing
    /// zeros dropped, along with the decimal point when nothing remains.
    /// `precision` is at most [`MAX_PRECISION`].
    pub fn format_balance(
        &self,
        ratio: Amount,
        precision: usize,
        group: bool,
        locale: &NumberLocale,
    ) -> NumericResult<String> {
        if precision > MAX_PRECISION {
            return Err(NumericError::PrecisionTooLarge {
                max: MAX_PRECISION,
                actual: precision,
            });
        }

        let ratio = ratio.number();
        if ratio.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let balance = self.number();
        let scale: BigUint = num_traits::pow(BigUint::from(10u8), precision);

        // Widened: balance * 10^precision can exceed 128 bits
        if !balance.is_zero() && &balance * &scale < ratio {
            tracing::debug!(precision, "balance below display precision");
            return Ok(below_precision(precision, locale));
        }

        let integer = (&balance / &ratio).to_str_radix(10);
        let remainder = &balance % &ratio;

        let mut text = if group {
            group_digits(&integer, locale)
        } else {
            integer
        };

        let fraction = fraction_digits(&remainder, &ratio, precision, &scale);
        if !fraction.is_empty() {
            text.push(locale.decimal_point);
            text.push_str(&fraction);
        }
        Ok(text)
    }

    /// [`Uint128::format_balance`] with the default `.`/`,`/3 locale
    pub fn format_balance_default(
        &self,
        ratio: Amount,
        precision: usize,
        group: bool,
    ) -> NumericResult<String> {
        self.format_balance(ratio, precision, group, &NumberLocale::default())
    }
}
