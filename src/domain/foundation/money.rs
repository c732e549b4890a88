//! Money value object for exact currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use super::ValidationError;

/// An exact currency amount in the tool's single reporting currency.
///
/// Arithmetic never rounds. Rounding happens once, when the presentation
/// layer formats the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from whole currency units.
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the inner decimal.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// True when the amount is below zero.
    ///
    /// A negative debt is a credit in the client's favour.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("amount", e.to_string()))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_exact() {
        let a: Money = "0.1".parse().unwrap();
        let b: Money = "0.2".parse().unwrap();
        assert_eq!(a + b, "0.3".parse().unwrap());
    }

    #[test]
    fn subtraction_can_go_negative() {
        let debt = Money::from_units(500) - Money::from_units(600);
        assert_eq!(debt, Money::from_units(-100));
        assert!(debt.is_negative());
        assert_eq!(debt.abs(), Money::from_units(100));
    }

    #[test]
    fn zero_is_not_negative() {
        assert!(!Money::ZERO.is_negative());
        assert!(!(-Money::ZERO).is_negative());
        assert!(Money::ZERO.is_zero());
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("12abc".parse::<Money>().is_err());
    }

    #[test]
    fn deserializes_from_json_numbers_and_strings() {
        let from_number: Money = serde_json::from_str("1000").unwrap();
        let from_string: Money = serde_json::from_str("\"1000.00\"").unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn display_drops_trailing_zeros() {
        let m: Money = "1500.500".parse().unwrap();
        assert_eq!(m.to_string(), "1500.5");
    }
}
