//! Metric kinds and the injectable set of accepted kind tags.

use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Standard metric shapes a metric object may self-identify as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Monotonic counter.
    Counter,
    /// Point-in-time value (callback or settable).
    Gauge,
    /// Distribution of observed values.
    Histogram,
    /// Rate of events over time.
    Meter,
    /// Duration distribution combined with a rate.
    Timer,
}

impl MetricKind {
    /// Every standard kind, in tag order.
    pub const ALL: [Self; 5] = [
        Self::Counter,
        Self::Gauge,
        Self::Histogram,
        Self::Meter,
        Self::Timer,
    ];

    /// Returns the tag returned by `getType()` for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Counter => "Counter",
            Self::Gauge => "Gauge",
            Self::Histogram => "Histogram",
            Self::Meter => "Meter",
            Self::Timer => "Timer",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = DomainError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == input)
            .ok_or_else(|| DomainError::UnknownMetricKind {
                tag: input.to_owned(),
            })
    }
}

/// Set of kind tags accepted by metric validation.
///
/// The set is owned by whatever module defines the supported metric types and
/// injected into validation; custom tags outside [`MetricKind`] are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricKindSet {
    tags: BTreeSet<String>,
}

impl MetricKindSet {
    /// Set holding the five standard kinds.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_kinds(MetricKind::ALL)
    }

    /// Set holding the provided standard kinds.
    pub fn from_kinds(kinds: impl IntoIterator<Item = MetricKind>) -> Self {
        Self::from_tags(kinds.into_iter().map(MetricKind::as_str))
    }

    /// Set holding arbitrary tags.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a tag to the set.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Returns true when `tag` is an accepted kind.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Iterate accepted tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of accepted tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true when no tag is accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for MetricKindSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for MetricKindSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(formatter, "[{}]", joined.join(", "))
    }
}
