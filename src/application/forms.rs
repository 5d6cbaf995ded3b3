//! Input checks performed before anything reaches the service.
//!
//! The service accepts whatever it is given; these forms are where the
//! registration and payment rules live.

use crate::domain::money::Money;
use crate::domain::payment::PaymentMethod;
use crate::domain::student::{NewStudent, Student};
use crate::error::{FeeError, Result};

const MIN_PASSWORD_LEN: usize = 6;
const CARD_DIGITS: usize = 16;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(self) -> Result<NewStudent> {
        if self.password != self.confirm_password {
            return Err(FeeError::Validation("Passwords do not match.".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FeeError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters long."
            )));
        }

        Ok(NewStudent {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password,
        })
    }
}

/// The payment page's state for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    pub amount: Money,
    pub method: PaymentMethod,
    card_number: String,
    upi_id: String,
}

impl PaymentForm {
    /// Starts with the full due amount and Google Pay selected.
    pub fn for_student(student: &Student) -> Self {
        Self {
            amount: student.due(),
            method: PaymentMethod::default(),
            card_number: String::new(),
            upi_id: upi_id_for(student),
        }
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    /// Accepts up to sixteen digits, ignoring whitespace, and stores them in
    /// groups of four. Anything else is rejected and the previous value kept.
    pub fn set_card_number(&mut self, raw: &str) -> bool {
        let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) || digits.len() > CARD_DIGITS {
            return false;
        }
        self.card_number = group_card_digits(&digits);
        true
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn upi_id(&self) -> &str {
        &self.upi_id
    }

    /// Checks the amount against what is due and, for card payments, the card
    /// number length.
    pub fn validate(&self, due: Money) -> Result<()> {
        if !self.amount.is_positive() || self.amount > due {
            return Err(FeeError::Validation(format!(
                "Please enter an amount between ₹1 and ₹{due}"
            )));
        }

        if self.method == PaymentMethod::CreditCard {
            let digits = self.card_number.chars().filter(|c| !c.is_whitespace()).count();
            if digits != CARD_DIGITS {
                return Err(FeeError::Validation(
                    "Please enter a valid 16-digit credit card number.".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// `g.akash` + last four of `23UCS001` -> `g.akash0001@gmail.com`.
fn upi_id_for(student: &Student) -> String {
    let name: String = student
        .name
        .split_whitespace()
        .collect::<String>()
        .to_lowercase();
    let chars: Vec<char> = student.id.chars().collect();
    let suffix: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{name}{suffix}@gmail.com")
}

fn group_card_digits(digits: &str) -> String {
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    fn registration(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            id: "23UCS011".to_string(),
            name: "K.Priya".to_string(),
            email: "k.priya@example.com".to_string(),
            phone: "9876500000".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_registration_password_rules() {
        let err = registration("secret1", "secret2").validate().unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match.");

        let err = registration("abc", "abc").validate().unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters long.");

        let data = registration("secret1", "secret1").validate().unwrap();
        assert_eq!(data.id, "23UCS011");
        assert_eq!(data.password, "secret1");
    }

    #[test]
    fn test_payment_form_defaults() {
        let student = fixtures::seed_students().remove(1);
        let form = PaymentForm::for_student(&student);
        assert_eq!(form.amount, Money::rupees(32000));
        assert_eq!(form.method, PaymentMethod::GooglePay);
        assert_eq!(form.upi_id(), "p.dharshan0002@gmail.com");
    }

    #[test]
    fn test_upi_id_strips_spaces() {
        let student = fixtures::seed_students().remove(8);
        let form = PaymentForm::for_student(&student);
        assert_eq!(form.upi_id(), "m.thulasidass0009@gmail.com");
    }

    #[test]
    fn test_amount_bounds() {
        let student = fixtures::seed_students().remove(0);
        let due = student.due();
        let form = PaymentForm::for_student(&student);

        assert!(form.clone().with_amount(Money::rupees(1)).validate(due).is_ok());
        assert!(form.clone().with_amount(due).validate(due).is_ok());

        let err = form
            .clone()
            .with_amount(Money::ZERO)
            .validate(due)
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter an amount between ₹1 and ₹55000");
        assert!(form.with_amount(Money::rupees(55001)).validate(due).is_err());
    }

    #[test]
    fn test_card_number_entry() {
        let student = fixtures::seed_students().remove(0);
        let mut form = PaymentForm::for_student(&student).with_method(PaymentMethod::CreditCard);

        assert!(form.set_card_number("4111 1111 1111"));
        assert_eq!(form.card_number(), "4111 1111 1111");
        let err = form.validate(student.due()).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid 16-digit credit card number.");

        assert!(!form.set_card_number("4111-1111"));
        assert!(!form.set_card_number("41111111111111112"));
        assert_eq!(form.card_number(), "4111 1111 1111");

        assert!(form.set_card_number("4111111111111111"));
        assert_eq!(form.card_number(), "4111 1111 1111 1111");
        assert!(form.validate(student.due()).is_ok());
    }
}
