use crate::domain::money::Money;
use crate::domain::student::{FeeStatus, Student};
use crate::error::{FeeError, Result};
use serde::Serialize;

/// Collection totals across the whole roster.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct FeeSummary {
    pub students: usize,
    pub total_fees: Money,
    pub total_collected: Money,
    pub total_due: Money,
}

impl FeeSummary {
    /// Fails with [`FeeError::AmountOutOfRange`] if the totals overflow.
    pub fn from_roster(students: &[Student]) -> Result<Self> {
        let total_fees = Money::checked_sum(students.iter().map(|s| s.total_fees))
            .ok_or(FeeError::AmountOutOfRange)?;
        let total_collected = Money::checked_sum(students.iter().map(|s| s.paid_amount))
            .ok_or(FeeError::AmountOutOfRange)?;
        let total_due = total_fees
            .checked_sub(total_collected)
            .ok_or(FeeError::AmountOutOfRange)?;
        Ok(Self {
            students: students.len(),
            total_fees,
            total_collected,
            total_due,
        })
    }
}

/// One line of the admin table and of the CSV report.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FeeReportRow {
    pub roll_number: String,
    pub name: String,
    pub email: String,
    pub total_fees: Money,
    pub paid_amount: Money,
    pub due_amount: Money,
    pub status: FeeStatus,
}

impl From<&Student> for FeeReportRow {
    fn from(student: &Student) -> Self {
        Self {
            roll_number: student.id.clone(),
            name: student.name.clone(),
            email: student.email.clone(),
            total_fees: student.total_fees,
            paid_amount: student.paid_amount,
            due_amount: student.due(),
            status: student.status(),
        }
    }
}

pub fn report_rows(students: &[Student]) -> Vec<FeeReportRow> {
    students.iter().map(FeeReportRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    #[test]
    fn test_summary_over_seed_roster() {
        let summary = FeeSummary::from_roster(&fixtures::seed_students()).unwrap();
        assert_eq!(summary.students, 10);
        assert_eq!(summary.total_fees, Money::rupees(511800));
        assert_eq!(summary.total_collected, Money::rupees(203500));
        assert_eq!(summary.total_due, Money::rupees(308300));
    }

    #[test]
    fn test_summary_of_empty_roster() {
        let summary = FeeSummary::from_roster(&[]).unwrap();
        assert_eq!(summary.students, 0);
        assert_eq!(summary.total_due, Money::ZERO);
    }

    #[test]
    fn test_summary_overflow_is_an_error() {
        let mut students = fixtures::seed_students();
        students[0].total_fees = Money::new(rust_decimal::Decimal::MAX);
        students[1].total_fees = Money::new(rust_decimal::Decimal::MAX);
        let err = FeeSummary::from_roster(&students).unwrap_err();
        assert!(matches!(err, FeeError::AmountOutOfRange));
    }

    #[test]
    fn test_row_due_and_status() {
        let rows = report_rows(&fixtures::seed_students());
        for row in &rows {
            assert_eq!(row.due_amount, row.total_fees - row.paid_amount);
        }
        assert_eq!(rows[0].status, FeeStatus::Pending);
        assert_eq!(rows[1].status, FeeStatus::Partial);
        assert_eq!(rows[2].status, FeeStatus::Paid);
    }
}
