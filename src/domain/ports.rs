use super::money::Money;
use super::student::Student;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for the student roster.
///
/// Implementations must keep insertion order: the roster listing and the CSV
/// report follow it.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Appends a new student.
    async fn insert(&self, student: Student) -> Result<()>;
    /// Books `amount` against the student in one step and returns the updated
    /// record, or `None` if the roll number is unknown.
    async fn add_payment(&self, id: &str, amount: Money) -> Result<Option<Student>>;
    async fn get(&self, id: &str) -> Result<Option<Student>>;
    /// Whether any student already uses this roll number or email.
    async fn exists(&self, id: &str, email: &str) -> Result<bool>;
    async fn get_all(&self) -> Result<Vec<Student>>;
}

pub type StudentStoreBox = Box<dyn StudentStore>;
