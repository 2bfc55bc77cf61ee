//! Monetary amounts for trapper and fence prices.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use thiserror::Error;

/// Errors raised when converting a decimal dollar amount into [`Money`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum MoneyError {
    #[error("price must not be negative (got {0})")]
    Negative(f64),

    #[error("price must be a finite number (got {0})")]
    NotFinite(f64),
}

/// Non-negative amount stored in whole cents.
///
/// Data files express prices as decimal dollars (`12.5`), which are rounded
/// to the nearest cent on conversion. Addition saturates instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const ZERO: Self = Self { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Converts a decimal dollar amount, rounding to the nearest cent.
    pub fn from_dollars(dollars: f64) -> Result<Self, MoneyError> {
        if !dollars.is_finite() {
            return Err(MoneyError::NotFinite(dollars));
        }
        if dollars < 0.0 {
            return Err(MoneyError::Negative(dollars));
        }

        // `as` saturates for out-of-range floats.
        Ok(Self {
            cents: (dollars * 100.0).round() as u64,
        })
    }

    pub fn as_dollars(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl TryFrom<f64> for Money {
    type Error = MoneyError;

    fn try_from(dollars: f64) -> Result<Self, Self::Error> {
        Self::from_dollars(dollars)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.as_dollars()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars_rounds_to_cents() {
        assert_eq!(Money::from_dollars(12.5).unwrap().cents(), 1250);
        assert_eq!(Money::from_dollars(3.999).unwrap().cents(), 400);
        assert_eq!(Money::from_dollars(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_rejects_invalid_amounts() {
        assert_eq!(Money::from_dollars(-1.0), Err(MoneyError::Negative(-1.0)));
        assert!(matches!(
            Money::from_dollars(f64::NAN),
            Err(MoneyError::NotFinite(_))
        ));
        assert!(matches!(
            Money::from_dollars(f64::INFINITY),
            Err(MoneyError::NotFinite(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1250).to_string(), "$12.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_sum_saturates() {
        let total: Money = [Money::from_cents(u64::MAX), Money::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), u64::MAX);
    }
}
