//! Domain types for the fee desk: students, money, users and the store port.

pub mod money;
pub mod payment;
pub mod ports;
pub mod student;
pub mod user;
