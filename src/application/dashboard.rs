use super::forms::PaymentForm;
use super::session::Session;
use crate::domain::payment::PaymentDetails;
use crate::domain::student::Student;
use crate::error::{FeeError, Result};
use chrono::Local;
use tracing::info;

/// Which screen of the student dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Dashboard,
    Payment,
    Receipt,
    AdminSlip,
    FullPaymentSuccess,
}

/// The one button the main dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    PayNow,
    GenerateAdminSlip,
}

impl DashboardAction {
    pub fn for_student(student: &Student) -> Self {
        if student.has_dues() {
            DashboardAction::PayNow
        } else {
            DashboardAction::GenerateAdminSlip
        }
    }
}

/// Navigation state of a logged-in student.
#[derive(Debug, Clone, Default)]
pub struct StudentDashboard {
    view: DashboardView,
    last_payment: Option<PaymentDetails>,
}

impl StudentDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DashboardView {
        self.view
    }

    pub fn last_payment(&self) -> Option<&PaymentDetails> {
        self.last_payment.as_ref()
    }

    /// Moves to the payment page. Only offered while something is due.
    pub fn open_payment(&mut self, student: &Student) -> Result<PaymentForm> {
        if DashboardAction::for_student(student) != DashboardAction::PayNow {
            return Err(FeeError::Validation("No fees are due.".to_string()));
        }
        self.view = DashboardView::Payment;
        Ok(PaymentForm::for_student(student))
    }

    /// Moves to the no-dues certificate. Only offered once everything is paid.
    pub fn open_admin_slip(&mut self, student: &Student) -> Result<()> {
        if DashboardAction::for_student(student) != DashboardAction::GenerateAdminSlip {
            return Err(FeeError::Validation(format!(
                "Fees of {} are still due.",
                student.due().inr()
            )));
        }
        self.view = DashboardView::AdminSlip;
        Ok(())
    }

    /// Validates the form, charges the mock gateway and books the payment.
    ///
    /// Lands on the full-payment page when the payment settles the account,
    /// on the plain receipt otherwise.
    pub async fn submit_payment(
        &mut self,
        session: &mut Session,
        form: &PaymentForm,
    ) -> Result<&PaymentDetails> {
        if self.view != DashboardView::Payment {
            return Err(FeeError::Validation(
                "Open the payment page first.".to_string(),
            ));
        }

        let student = session.current_student()?.clone();
        form.validate(student.due())?;

        let confirmation = session
            .service()
            .process_payment(&student.id, form.amount)
            .await?;
        if !confirmation.success {
            return Err(FeeError::Validation(
                "Payment failed. Please try again.".to_string(),
            ));
        }
        session.update_student_fee(&student.id, form.amount).await?;

        let settled = !session.current_student()?.has_dues();
        self.view = if settled {
            DashboardView::FullPaymentSuccess
        } else {
            DashboardView::Receipt
        };
        info!(
            roll_number = %student.id,
            amount = %form.amount,
            method = %form.method,
            settled,
            "payment recorded"
        );

        Ok(self.last_payment.insert(PaymentDetails {
            amount: form.amount,
            transaction_id: confirmation.transaction_id,
            method: form.method,
            paid_at: Local::now(),
        }))
    }

    pub fn back(&mut self) {
        self.view = DashboardView::Dashboard;
    }
}
