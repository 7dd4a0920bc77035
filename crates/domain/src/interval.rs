//! Publishing interval for self-reporting metrics.

use crate::{DomainError, value_kind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Interval, in seconds, at which a reporter publishes a metric.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishingInterval(f64);

impl PublishingInterval {
    /// Wrap a number of seconds. Any number is accepted.
    #[must_use]
    pub const fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Build an interval from a dynamic value; only numbers are accepted.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        value
            .as_f64()
            .map(Self)
            .ok_or_else(|| DomainError::IntervalNotANumber {
                actual: value_kind(value),
            })
    }

    /// Seconds as given.
    #[must_use]
    pub const fn seconds(self) -> f64 {
        self.0
    }

    /// Interval as a `Duration`, when it is finite and non-negative.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.0).ok()
    }
}
