use crate::domain::money::Money;
use crate::domain::ports::StudentStore;
use crate::domain::student::Student;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory, insertion-ordered student roster.
///
/// Uses `Arc<RwLock<Vec<Student>>>` so clones share one roster. Nothing survives
/// the process.
#[derive(Default, Clone)]
pub struct InMemoryStudentStore {
    students: Arc<RwLock<Vec<Student>>>,
}

impl InMemoryStudentStore {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster pre-filled with `students`, in order.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Arc::new(RwLock::new(students)),
        }
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn insert(&self, student: Student) -> Result<()> {
        let mut students = self.students.write().await;
        students.push(student);
        Ok(())
    }

    async fn add_payment(&self, id: &str, amount: Money) -> Result<Option<Student>> {
        let mut students = self.students.write().await;
        let Some(student) = students.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        student.record_payment(amount)?;
        Ok(Some(student.clone()))
    }

    async fn get(&self, id: &str) -> Result<Option<Student>> {
        let students = self.students.read().await;
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    async fn exists(&self, id: &str, email: &str) -> Result<bool> {
        let students = self.students.read().await;
        Ok(students.iter().any(|s| s.id == id || s.email == email))
    }

    async fn get_all(&self) -> Result<Vec<Student>> {
        let students = self.students.read().await;
        Ok(students.clone())
    }
}
