//! Gauge callback arguments.

use serde_json::Value;

/// Zero-argument source of a gauge reading.
pub type GaugeCallback = dyn Fn() -> Value + Send + Sync;

/// Whatever was supplied in a callback slot.
///
/// Configuration-driven constructors can end up with plain data where a
/// function was expected; `Value` keeps that case representable so it fails
/// validation instead of failing to type-check upstream.
#[derive(Clone, Copy)]
pub enum CallbackArg<'a> {
    /// A callable.
    Function(&'a dyn Fn() -> Value),
    /// Non-callable data.
    Value(&'a Value),
}

impl<'a> CallbackArg<'a> {
    /// Borrow a callable.
    pub const fn function(callback: &'a dyn Fn() -> Value) -> Self {
        Self::Function(callback)
    }

    /// Borrow a shared gauge callback.
    pub fn gauge(callback: &'a GaugeCallback) -> Self {
        Self::Function(callback)
    }
}

impl std::fmt::Debug for CallbackArg<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function(_) => formatter.write_str("CallbackArg::Function(..)"),
            Self::Value(value) => formatter.debug_tuple("CallbackArg::Value").field(value).finish(),
        }
    }
}
