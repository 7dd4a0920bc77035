//! # metrics-client-adapters
//!
//! Logger adapters implementing the `LoggerPort` contract: a JSON-lines logger
//! over pluggable sinks and a `tracing` bridge.
//! This crate depends on `ports` and `shared`.

pub mod log_sink;
pub mod logger;
pub mod tracing_logger;

pub use log_sink::{LogSink, MemoryLogSink, StderrLogSink};
pub use logger::{JsonLogger, LogFields};
pub use tracing_logger::{TracingLogger, init_tracing};

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
