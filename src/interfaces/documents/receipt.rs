use super::{Document, ISSUER, course_line, summary_line};
use crate::domain::payment::PaymentDetails;
use crate::domain::student::Student;

/// A payment receipt.
///
/// `student` is the record after the payment was booked, so the totals and the
/// balance reflect it.
pub struct Receipt<'a> {
    student: &'a Student,
    payment: &'a PaymentDetails,
    /// The closing receipt issued alongside the admin slip.
    is_final: bool,
}

impl<'a> Receipt<'a> {
    pub fn new(student: &'a Student, payment: &'a PaymentDetails) -> Self {
        Self {
            student,
            payment,
            is_final: false,
        }
    }

    pub fn final_payment(student: &'a Student, payment: &'a PaymentDetails) -> Self {
        Self {
            student,
            payment,
            is_final: true,
        }
    }
}

impl Document for Receipt<'_> {
    fn file_stem(&self) -> String {
        format!("SEC-Receipt-{}", self.student.id)
    }

    fn lines(&self) -> Vec<String> {
        let s = self.student;
        let p = self.payment;

        let mut lines = vec!["Payment Successful!".to_string()];
        if self.is_final {
            lines.push("Congratulations, all your dues have been cleared.".to_string());
        } else {
            lines.push("Your fee payment has been processed successfully.".to_string());
        }
        lines.push(String::new());

        let title = if self.is_final { "Final Payment Receipt" } else { "Receipt" };
        lines.extend([
            format!("{title} | {ISSUER}"),
            format!("Transaction ID: {}", p.transaction_id),
            format!("Date: {}", p.paid_at.format("%d/%m/%Y, %H:%M:%S")),
            String::new(),
            "Student Details".to_string(),
            format!("  Name: {}", s.name),
            format!("  Roll Number: {}", s.id),
            format!("  Email: {}", s.email),
            format!("  Course: {}", course_line(s)),
            String::new(),
            "Payment Summary".to_string(),
            summary_line("Amount Paid", &p.amount.inr()),
            summary_line("Payment Method", p.method.label()),
        ]);
        if !self.is_final {
            lines.push(summary_line("Total Fees", &s.total_fees.inr()));
            lines.push(summary_line("Total Paid Amount", &s.paid_amount.inr()));
        }
        lines.push(summary_line("Balance Due", &s.due().inr()));
        lines.push(String::new());

        if !self.is_final {
            lines.push(format!("An email receipt has been sent to {}.", s.email));
        }
        lines.push(
            "This is a computer-generated receipt and does not require a signature.".to_string(),
        );
        lines
    }
}
