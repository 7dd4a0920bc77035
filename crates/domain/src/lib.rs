//! # metrics-client-domain
//!
//! Value objects shared by metric constructors and reporters:
//!
//! - **Kinds** - `MetricKind` and the injectable `MetricKindSet`
//! - **Dimensions** - string-keyed, string-valued metric tags
//! - **Interval** - `PublishingInterval` in seconds
//! - **Values** - descriptions of dynamic JSON values for error messages
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared`
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use metrics_client_shared::shared_crate_version;

pub mod dimensions;
pub mod errors;
pub mod interval;
pub mod kinds;
pub mod values;

pub use dimensions::Dimensions;
pub use errors::DomainError;
pub use interval::PublishingInterval;
pub use kinds::{MetricKind, MetricKindSet};
pub use values::{UNDEFINED, describe, value_kind};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
