//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues. Formatting is locale-independent Brazilian Real:
//! thousands grouped with `.`, decimals separated by `,` (e.g. `R$1.234,50`),
//! regardless of host locale configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Represents a monetary amount stored as centavos (hundredths of a Real)
///
/// Using i64 centavos keeps line totals and grand totals exact: two runs
/// with the same inputs agree to the centavo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use padoca::models::Money;
    /// let amount = Money::from_cents(150); // R$1,50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from reais and centavos
    ///
    /// # Examples
    /// ```
    /// use padoca::models::Money;
    /// let amount = Money::from_reais_centavos(3, 50); // R$3,50
    /// ```
    pub const fn from_reais_centavos(reais: i64, centavos: i64) -> Self {
        Self(reais * 100 + centavos)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole reais portion (truncated toward zero)
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from its Brazilian textual form
    ///
    /// Accepts formats: "1.234,50", "R$1.234,50", "1234,50", "1234", "-3,50".
    /// Dots are thousands separators and are ignored; the comma separates
    /// centavos.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix("R$").unwrap_or(s);
        let s = s.replace('.', "");

        let cents = if let Some((reais_str, centavos_str)) = s.split_once(',') {
            if centavos_str.is_empty() || centavos_str.len() > 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let reais: i64 = reais_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad single-digit centavos: "3,5" means 3,50
            let centavos: i64 = centavos_str
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * if centavos_str.len() == 1 { 10 } else { 1 };

            reais * 100 + centavos
        } else {
            // Integer format - assume whole reais
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Group the whole-reais digits with `.` as thousands separator
    fn grouped_reais(&self) -> String {
        let digits = self.reais().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        let first_group = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - first_group) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        grouped
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-R${},{:02}", self.grouped_reais(), self.centavos_part())
        } else {
            write!(f, "R${},{:02}", self.grouped_reais(), self.centavos_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Scale by an integer factor (quantity, day count); exact in centavos
impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, factor: u32) -> Self {
        Self(self.0 * i64::from(factor))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
