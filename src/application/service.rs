use crate::config::ServiceConfig;
use crate::domain::money::Money;
use crate::domain::payment::PaymentConfirmation;
use crate::domain::ports::StudentStoreBox;
use crate::domain::student::{NewStudent, Student};
use crate::domain::user::User;
use crate::error::{FeeError, Result};
use crate::infrastructure::fixtures;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

pub const REGISTRATION_SUCCESS: &str = "Registration successful! Please login.";

/// The fee desk's mock back office.
///
/// `FeeService` owns the roster store and answers every call after an
/// artificial delay, the way a remote API would. There is exactly one logical
/// writer, so calls are applied in the order they are awaited.
pub struct FeeService {
    store: StudentStoreBox,
    config: ServiceConfig,
}

impl FeeService {
    /// Creates a new `FeeService`.
    ///
    /// # Arguments
    ///
    /// * `store` - The roster backend. Seed it before handing it over.
    /// * `config` - Latency profile and admin account.
    pub fn new(store: StudentStoreBox, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Checks the admin account first, then the roster. Passwords are compared
    /// as plain strings.
    pub async fn login(&self, id: &str, password: &str) -> Result<Option<User>> {
        delay(self.config.latency.auth).await;

        if self.config.admin.matches_credentials(id, password) {
            info!(username = %id, "admin logged in");
            return Ok(Some(User::Admin(self.config.admin.clone())));
        }

        let user = self
            .store
            .get_all()
            .await?
            .into_iter()
            .find(|s| s.matches_credentials(id, password))
            .map(User::Student);

        match &user {
            Some(_) => info!(roll_number = %id, "student logged in"),
            None => warn!(login = %id, "rejected login"),
        }
        Ok(user)
    }

    /// Appends a student with the registration defaults. Fails with
    /// [`FeeError::DuplicateStudent`] if the roll number or email is taken.
    pub async fn register_student(&self, data: NewStudent) -> Result<Student> {
        delay(self.config.latency.auth).await;

        if self.store.exists(&data.id, &data.email).await? {
            warn!(roll_number = %data.id, email = %data.email, "duplicate registration");
            return Err(FeeError::DuplicateStudent);
        }

        let student = fixtures::registered_student(data);
        self.store.insert(student.clone()).await?;
        info!(roll_number = %student.id, "student registered");
        Ok(student)
    }

    /// A snapshot of the whole roster, in registration order.
    pub async fn get_students(&self) -> Result<Vec<Student>> {
        delay(self.config.latency.query).await;
        let students = self.store.get_all().await?;
        debug!(count = students.len(), "roster read");
        Ok(students)
    }

    /// Adds `amount` to the student's paid total and returns the updated roster,
    /// or `None` if the roll number is unknown.
    ///
    /// The amount is applied as given. Bounds are the caller's concern; an
    /// overpayment is logged, not refused. Only an amount that would push the
    /// totals out of range fails, with [`FeeError::AmountOutOfRange`].
    pub async fn update_fee(&self, student_id: &str, amount: Money) -> Result<Option<Vec<Student>>> {
        delay(self.config.latency.query).await;

        let booked = self
            .store
            .add_payment(student_id, amount)
            .await
            .inspect_err(|e| warn!(roll_number = %student_id, %amount, error = %e, "fee update refused"))?;
        let Some(student) = booked else {
            warn!(roll_number = %student_id, "fee update for unknown student");
            return Ok(None);
        };

        if student.paid_amount > student.total_fees {
            warn!(
                roll_number = %student_id,
                paid = %student.paid_amount,
                total = %student.total_fees,
                "paid amount exceeds total fees"
            );
        }
        debug!(roll_number = %student_id, %amount, "fee updated");

        Ok(Some(self.store.get_all().await?))
    }

    /// Simulates the payment gateway. Always succeeds.
    pub async fn process_payment(&self, student_id: &str, amount: Money) -> Result<PaymentConfirmation> {
        delay(self.config.latency.gateway).await;

        let transaction_id = format!("TXN{}", unix_millis());
        info!(roll_number = %student_id, %amount, %transaction_id, "payment processed");
        Ok(PaymentConfirmation {
            success: true,
            transaction_id,
        })
    }
}

async fn delay(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
