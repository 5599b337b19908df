//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that ledger sums and the
//! two-decimal renderings are exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg};

/// Slack for binary floating point when checking that a value is whole cents
const FRACTIONAL_CENT_TOLERANCE: f64 = 1e-6;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.format_plain(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a decimal value to cents
    ///
    /// The value must be a whole number of cents and fit in the cent range.
    ///
    /// # Examples
    /// ```
    /// use budget_ledger::models::Money;
    /// assert_eq!(Money::try_from_decimal(105.55).unwrap().cents(), 10555);
    /// assert!(Money::try_from_decimal(1.999).is_err());
    /// ```
    pub fn try_from_decimal(value: f64) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(value.to_string());
        if !value.is_finite() {
            return Err(invalid());
        }

        let scaled = value * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > FRACTIONAL_CENT_TOLERANCE {
            return Err(invalid());
        }
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if cents.abs() >= i64::MAX as f64 {
            return Err(invalid());
        }

        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".75". At most two
    /// decimals are allowed and the result must fit in the cent range.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (dollars_str, cents_str) = match rest.split_once('.') {
            Some((dollars, cents)) => (dollars, Some(cents)),
            None => (rest, None),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(dollars_str) || !cents_str.map_or(true, all_digits) {
            return Err(invalid());
        }
        if dollars_str.is_empty() && cents_str.map_or(true, str::is_empty) {
            return Err(invalid());
        }

        let dollars: i64 = if dollars_str.is_empty() {
            0
        } else {
            dollars_str.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match cents_str.unwrap_or("") {
            "" => 0,
            digits if digits.len() == 1 => digits.parse::<i64>().map_err(|_| invalid())? * 10,
            digits if digits.len() == 2 => digits.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with exactly two decimals and no currency symbol ("-105.55")
    pub fn format_plain(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
