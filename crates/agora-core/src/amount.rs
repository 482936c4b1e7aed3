//! Fixed-point token amounts
//!
//! Amounts cross the remote boundary as integers at scale 10^8 ("e8s") and
//! appear in the view layer as decimal strings. Parsing and formatting live
//! here so the conversion is exact in both directions; the display form is
//! the only place precision is intentionally reduced (two decimals).

use crate::errors::AgoraError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of e8s units in one whole token.
pub const E8S_PER_TOKEN: u64 = 100_000_000;

/// A token amount as a fixed-point integer, scale 10^8
///
/// `123_456_789` e8s is the human amount `1.23456789`, displayed as `"1.23"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount {
    e8s: u64,
}

impl TokenAmount {
    /// Zero tokens.
    pub const ZERO: Self = Self { e8s: 0 };

    /// Create an amount from raw e8s units.
    pub fn from_e8s(e8s: u64) -> Self {
        Self { e8s }
    }

    /// Create an amount from a whole number of tokens.
    pub fn from_tokens(tokens: u64) -> Option<Self> {
        tokens.checked_mul(E8S_PER_TOKEN).map(|e8s| Self { e8s })
    }

    /// The raw e8s value sent over the wire.
    pub fn e8s(&self) -> u64 {
        self.e8s
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.e8s == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.e8s.checked_add(other.e8s).map(Self::from_e8s)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.e8s.checked_sub(other.e8s).map(Self::from_e8s)
    }

    /// Parse a decimal string such as `"1.5"` or `"0.00000001"`.
    ///
    /// At most eight fractional digits are accepted; anything finer cannot be
    /// represented and is an error rather than a silent truncation.
    pub fn from_decimal_str(text: &str) -> Result<Self, AgoraError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AgoraError::invalid("amount must not be empty"));
        }

        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(AgoraError::invalid(format!("invalid amount: {text}")));
        }
        // u64::parse tolerates a leading `+`; amounts are digits only.
        if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(AgoraError::invalid(format!("invalid amount: {text}")));
        }
        if frac.len() > 8 {
            return Err(AgoraError::invalid(format!(
                "amount has more than 8 fractional digits: {text}"
            )));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| AgoraError::invalid(format!("invalid amount: {text}")))?
        };

        let frac_e8s: u64 = if frac.is_empty() {
            0
        } else {
            let digits: u64 = frac
                .parse()
                .map_err(|_| AgoraError::invalid(format!("invalid amount: {text}")))?;
            digits * 10u64.pow(8 - frac.len() as u32)
        };

        whole
            .checked_mul(E8S_PER_TOKEN)
            .and_then(|w| w.checked_add(frac_e8s))
            .map(Self::from_e8s)
            .ok_or_else(|| AgoraError::invalid(format!("amount out of range: {text}")))
    }

    /// Full-precision decimal string, e.g. `123_456_789` → `"1.23456789"`.
    ///
    /// Trailing fractional zeros are trimmed; whole amounts have no point.
    pub fn to_decimal_string(&self) -> String {
        let whole = self.e8s / E8S_PER_TOKEN;
        let frac = self.e8s % E8S_PER_TOKEN;
        if frac == 0 {
            return whole.to_string();
        }
        let frac = format!("{frac:08}");
        format!("{whole}.{}", frac.trim_end_matches('0'))
    }

    /// Two-decimal display string for the view layer, e.g. `"1.23"`.
    ///
    /// Rounds half away from zero, matching a `toFixed(2)` rendering.
    pub fn display_2dp(&self) -> String {
        let mut whole = self.e8s / E8S_PER_TOKEN;
        let frac_e8s = self.e8s % E8S_PER_TOKEN;
        let mut cents = (frac_e8s + 500_000) / 1_000_000;
        if cents == 100 {
            whole += 1;
            cents = 0;
        }
        format!("{whole}.{cents:02}")
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for TokenAmount {
    type Err = AgoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}
