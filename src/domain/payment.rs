use super::money::Money;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the student chose to pay. Purely informational; no gateway sits behind
/// any of these.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[default]
    #[serde(rename = "Google Pay")]
    GooglePay,
    #[serde(rename = "PhonePe")]
    PhonePe,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::GooglePay => "Google Pay",
            PaymentMethod::PhonePe => "PhonePe",
        }
    }

    pub fn is_upi(&self) -> bool {
        matches!(self, PaymentMethod::GooglePay | PaymentMethod::PhonePe)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '-', '_'], "").as_str() {
            "card" | "creditcard" => Ok(PaymentMethod::CreditCard),
            "gpay" | "googlepay" => Ok(PaymentMethod::GooglePay),
            "phonepe" => Ok(PaymentMethod::PhonePe),
            other => Err(format!("unknown payment method: {other}")),
        }
    }
}

/// What the mock gateway hands back. It never declines.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PaymentConfirmation {
    pub success: bool,
    pub transaction_id: String,
}

/// The details a receipt needs about one completed payment.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentDetails {
    pub amount: Money,
    pub transaction_id: String,
    pub method: PaymentMethod,
    pub paid_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!("card".parse::<PaymentMethod>(), Ok(PaymentMethod::CreditCard));
        assert_eq!(
            "Credit Card".parse::<PaymentMethod>(),
            Ok(PaymentMethod::CreditCard)
        );
        assert_eq!("gpay".parse::<PaymentMethod>(), Ok(PaymentMethod::GooglePay));
        assert_eq!("PhonePe".parse::<PaymentMethod>(), Ok(PaymentMethod::PhonePe));
        assert!("paypal".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_method_serializes_as_label() {
        let json = serde_json::to_string(&PaymentMethod::GooglePay).unwrap();
        assert_eq!(json, "\"Google Pay\"");
        assert!(PaymentMethod::PhonePe.is_upi());
        assert!(!PaymentMethod::CreditCard.is_upi());
    }
}
