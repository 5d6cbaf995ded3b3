use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A rupee amount.
///
/// Wraps `rust_decimal::Decimal` so fee arithmetic never goes through floats.
/// `Display` prints the plain normalized number (`55000`), which is what the CSV
/// report carries; [`Money::inr`] gives the `₹55,000` form used on documents.
///
/// `+` and `-` panic on overflow like `Decimal` does. Amounts that come from
/// outside go through [`Money::checked_add`] and [`Money::checked_sub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn rupees(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// `None` when the result does not fit a `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Adds up `amounts`, or `None` on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// Formats the amount with a rupee sign and Indian digit grouping
    /// (`₹1,00,000`). Fractions are rounded to paise and dropped when zero.
    pub fn inr(&self) -> String {
        let rounded = self.0.round_dp(2).normalize();
        let text = rounded.abs().to_string();
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text.as_str(), None),
        };

        let mut grouped = group_indian(whole);
        if let Some(fraction) = fraction {
            grouped.push('.');
            grouped.push_str(fraction);
        }

        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-₹{grouped}")
        } else {
            format!("₹{grouped}")
        }
    }
}

/// Last three digits form one group, every group before that has two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(55000));
        let b = Money::new(dec!(20000));
        assert_eq!(a + b, Money::new(dec!(75000)));
        assert_eq!(a - b, Money::new(dec!(35000)));
    }

    #[test]
    fn test_inr_grouping() {
        assert_eq!(Money::ZERO.inr(), "₹0");
        assert_eq!(Money::rupees(999).inr(), "₹999");
        assert_eq!(Money::rupees(55000).inr(), "₹55,000");
        assert_eq!(Money::rupees(100000).inr(), "₹1,00,000");
        assert_eq!(Money::rupees(12345678).inr(), "₹1,23,45,678");
        assert_eq!(Money::new(dec!(1500.50)).inr(), "₹1,500.5");
        assert_eq!(Money::rupees(-2500).inr(), "-₹2,500");
    }

    #[test]
    fn test_display_is_normalized() {
        assert_eq!(Money::new(dec!(10.00)).to_string(), "10");
        assert_eq!(Money::new(dec!(0.0)).to_string(), "0");
    }

    #[test]
    fn test_checked_sum() {
        let total = Money::checked_sum([Money::rupees(1), Money::rupees(2), Money::rupees(3)]);
        assert_eq!(total, Some(Money::rupees(6)));
        assert_eq!(Money::checked_sum([]), Some(Money::ZERO));

        let huge = Money::new(Decimal::MAX);
        assert_eq!(Money::checked_sum([huge, Money::rupees(1)]), None);
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge.checked_add(Money::rupees(1)), None);
        assert_eq!(Money::new(Decimal::MIN).checked_sub(Money::rupees(1)), None);
        assert_eq!(
            Money::rupees(5).checked_sub(Money::rupees(7)),
            Some(Money::rupees(-2))
        );
    }
}
