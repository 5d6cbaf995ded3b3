use super::service::FeeService;
use crate::domain::money::Money;
use crate::domain::student::{NewStudent, Student};
use crate::domain::user::{Admin, User};
use crate::error::{FeeError, Result};
use tracing::info;

/// Who is logged in, plus the roster the views render from.
///
/// Every mutation goes through the service first; the session only mirrors
/// what the service returned.
pub struct Session {
    service: FeeService,
    user: Option<User>,
    students: Vec<Student>,
}

impl Session {
    /// Opens a session and loads the roster.
    pub async fn open(service: FeeService) -> Result<Self> {
        let students = service.get_students().await?;
        Ok(Self {
            service,
            user: None,
            students,
        })
    }

    pub fn service(&self) -> &FeeService {
        &self.service
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Logs in and keeps the user. An admin login also refreshes the roster.
    pub async fn login(&mut self, id: &str, password: &str) -> Result<&User> {
        let user = self
            .service
            .login(id, password)
            .await?
            .ok_or(FeeError::InvalidCredentials)?;

        if matches!(user, User::Admin(_)) {
            self.students = self.service.get_students().await?;
        }
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.display_name(), "logged out");
        }
    }

    pub async fn register(&self, data: NewStudent) -> Result<Student> {
        self.service.register_student(data).await
    }

    /// Applies a payment to the roster and, when the payer is the logged-in
    /// student, to the session user as well. Unknown ids leave both untouched.
    pub async fn update_student_fee(&mut self, student_id: &str, amount: Money) -> Result<()> {
        let Some(updated) = self.service.update_fee(student_id, amount).await? else {
            return Ok(());
        };

        if let Some(User::Student(current)) = &mut self.user
            && current.id == student_id
            && let Some(fresh) = updated.iter().find(|s| s.id == student_id)
        {
            *current = fresh.clone();
        }
        self.students = updated;
        Ok(())
    }

    /// Re-reads the roster from the service.
    pub async fn refresh(&mut self) -> Result<&[Student]> {
        self.students = self.service.get_students().await?;
        Ok(&self.students)
    }

    pub fn current_student(&self) -> Result<&Student> {
        match &self.user {
            Some(User::Student(student)) => Ok(student),
            Some(User::Admin(_)) => Err(FeeError::Unauthorized(
                "The admin account has no student dashboard.".to_string(),
            )),
            None => Err(FeeError::Unauthorized("Please login first.".to_string())),
        }
    }

    pub fn current_admin(&self) -> Result<&Admin> {
        match &self.user {
            Some(User::Admin(admin)) => Ok(admin),
            _ => Err(FeeError::Unauthorized(
                "Only the admin can view fee collection.".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::domain::user::Role;
    use crate::infrastructure::fixtures;
    use crate::infrastructure::in_memory::InMemoryStudentStore;

    async fn session() -> Session {
        let service = FeeService::new(
            Box::new(InMemoryStudentStore::with_students(fixtures::seed_students())),
            ServiceConfig::instant(),
        );
        Session::open(service).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_loads_roster() {
        let session = session().await;
        assert_eq!(session.students().len(), 10);
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_keeps_user_empty() {
        let mut session = session().await;
        let err = session.login("23UCS001", "nope").await.unwrap_err();
        assert!(matches!(err, FeeError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid credentials. Please try again.");
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_admin_login_refreshes_roster() {
        let mut session = session().await;
        session
            .register(NewStudent {
                id: "23UCS011".to_string(),
                name: "K.Priya".to_string(),
                email: "k.priya@example.com".to_string(),
                phone: "9876500000".to_string(),
                password: "priya@1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.students().len(), 10);

        let user = session.login("admin", "admin@123").await.unwrap();
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(session.students().len(), 11);
        assert!(session.current_admin().is_ok());
        assert!(session.current_student().is_err());
    }

    #[tokio::test]
    async fn test_fee_update_refreshes_logged_in_student() {
        let mut session = session().await;
        session.login("23UCS008", "sec@2025").await.unwrap();

        session
            .update_student_fee("23UCS008", Money::rupees(27500))
            .await
            .unwrap();

        let student = session.current_student().unwrap();
        assert_eq!(student.paid_amount, Money::rupees(52500));
        let listed = session.students().iter().find(|s| s.id == "23UCS008").unwrap();
        assert_eq!(listed.paid_amount, Money::rupees(52500));
    }

    #[tokio::test]
    async fn test_fee_update_for_other_student_leaves_user() {
        let mut session = session().await;
        session.login("23UCS001", "sec@2025").await.unwrap();
        session
            .update_student_fee("23UCS002", Money::rupees(100))
            .await
            .unwrap();
        assert_eq!(session.current_student().unwrap().paid_amount, Money::ZERO);
    }

    #[tokio::test]
    async fn test_logout() {
        let mut session = session().await;
        session.login("23UCS001", "sec@2025").await.unwrap();
        session.logout();
        assert!(session.user().is_none());
        assert!(matches!(
            session.current_student(),
            Err(FeeError::Unauthorized(_))
        ));
    }
}
