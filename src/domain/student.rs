use super::money::Money;
use crate::error::{FeeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-head split of a student's fees.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct FeeBreakdown {
    pub tuition: Money,
    pub hostel: Money,
    pub library: Money,
    pub lab: Money,
}

impl FeeBreakdown {
    /// Heads in display order.
    pub fn entries(&self) -> [(&'static str, Money); 4] {
        [
            ("Tuition", self.tuition),
            ("Hostel", self.hostel),
            ("Library", self.library),
            ("Lab", self.lab),
        ]
    }

    pub fn total(&self) -> Money {
        self.entries()
            .into_iter()
            .fold(Money::ZERO, |acc, (_, amount)| acc + amount)
    }
}

/// Payment status of a student. Derived from the amounts, never stored.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum FeeStatus {
    Pending,
    Partial,
    Paid,
}

impl FeeStatus {
    pub fn derive(total_fees: Money, paid_amount: Money) -> Self {
        if paid_amount >= total_fees {
            FeeStatus::Paid
        } else if paid_amount.is_zero() {
            FeeStatus::Pending
        } else {
            FeeStatus::Partial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "Pending",
            FeeStatus::Partial => "Partial",
            FeeStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student record on the roster.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Student {
    /// Roll number. Unique, doubles as the login name.
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Stored and compared in plaintext.
    #[serde(skip_serializing)]
    pub password: String,
    pub course: String,
    pub year: u8,
    pub semester: u8,
    pub total_fees: Money,
    pub paid_amount: Money,
    pub fee_breakdown: FeeBreakdown,
}

impl Student {
    pub fn due(&self) -> Money {
        self.total_fees - self.paid_amount
    }

    pub fn status(&self) -> FeeStatus {
        FeeStatus::derive(self.total_fees, self.paid_amount)
    }

    pub fn has_dues(&self) -> bool {
        self.due().is_positive()
    }

    /// Adds `amount` to the paid total. Any amount is accepted as long as the
    /// paid total and the due amount stay representable; otherwise the record
    /// is left untouched.
    pub fn record_payment(&mut self, amount: Money) -> Result<()> {
        let paid = self
            .paid_amount
            .checked_add(amount)
            .ok_or(FeeError::AmountOutOfRange)?;
        self.total_fees
            .checked_sub(paid)
            .ok_or(FeeError::AmountOutOfRange)?;
        self.paid_amount = paid;
        Ok(())
    }

    pub fn matches_credentials(&self, id: &str, password: &str) -> bool {
        self.id == id && self.password == password
    }
}

/// The fields a student supplies when registering. Everything else comes from
/// the registration defaults.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}
