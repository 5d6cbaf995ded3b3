//! Service configuration: simulated latency and the admin account.

use crate::domain::user::Admin;
use clap::ValueEnum;
use std::time::Duration;

/// Artificial delays applied by the mock service, per kind of call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// `login` and `register_student`.
    pub auth: Duration,
    /// `get_students` and `update_fee`.
    pub query: Duration,
    /// `process_payment`.
    pub gateway: Duration,
}

impl Latency {
    pub const NONE: Self = Self {
        auth: Duration::ZERO,
        query: Duration::ZERO,
        gateway: Duration::ZERO,
    };
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(500),
            query: Duration::from_millis(100),
            gateway: Duration::from_millis(1500),
        }
    }
}

/// Named latency profiles selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LatencyProfile {
    /// Delays of a slow campus network.
    #[default]
    Default,
    /// No delay at all.
    None,
}

impl From<LatencyProfile> for Latency {
    fn from(profile: LatencyProfile) -> Self {
        match profile {
            LatencyProfile::Default => Latency::default(),
            LatencyProfile::None => Latency::NONE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub latency: Latency,
    pub admin: Admin,
}

impl ServiceConfig {
    pub fn new(latency: Latency) -> Self {
        Self {
            latency,
            admin: Admin::default(),
        }
    }

    /// No delays, default admin. What the tests use.
    pub fn instant() -> Self {
        Self::new(Latency::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latency_matches_mock_api() {
        let latency = Latency::default();
        assert_eq!(latency.auth, Duration::from_millis(500));
        assert_eq!(latency.query, Duration::from_millis(100));
        assert_eq!(latency.gateway, Duration::from_millis(1500));
    }

    #[test]
    fn test_profile_conversion() {
        assert_eq!(Latency::from(LatencyProfile::None), Latency::NONE);
        assert_eq!(Latency::from(LatencyProfile::Default), Latency::default());
    }
}
