//! Application layer: the mock fee service and the state the views run on.
//!
//! `FeeService` is the entry point for every roster operation. `Session` keeps
//! the logged-in user and the roster; the dashboards and forms drive it.

pub mod admin;
pub mod dashboard;
pub mod forms;
pub mod service;
pub mod session;
