use super::student::Student;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single administrator account. Never part of the roster.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Admin {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Admin {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Admin {
    fn default() -> Self {
        Self::new("admin", "admin@123")
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("student"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// An authenticated user. The role is carried by the variant.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum User {
    Student(Student),
    Admin(Admin),
}

impl User {
    pub fn role(&self) -> Role {
        match self {
            User::Student(_) => Role::Student,
            User::Admin(_) => Role::Admin,
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            User::Student(student) => Some(student),
            User::Admin(_) => None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            User::Student(student) => &student.name,
            User::Admin(admin) => &admin.username,
        }
    }
}
