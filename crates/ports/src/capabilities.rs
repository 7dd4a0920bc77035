//! Runtime view of an object's exported methods.

use serde_json::Value;
use std::sync::Arc;

/// Exported-method surface of an object that crossed a dynamic boundary.
///
/// Typed implementors reach this view through [`crate::MetricObject`],
/// [`crate::ReporterObject`] and [`crate::LoggerObject`]; runtime-loaded
/// objects implement it through [`crate::PluginObject`].
pub trait Capabilities {
    /// Returns true when the object exports a callable named `method`.
    fn has_method(&self, method: &str) -> bool;

    /// Invoke an exported method and return its result.
    ///
    /// Returns `None` when the method is not exported or cannot be invoked
    /// with dynamic arguments.
    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value>;

    /// Names of `required` methods this object does not export, in order.
    fn missing_methods<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|method| !self.has_method(method))
            .collect()
    }
}

/// Shared, thread-safe capability object (stored in option DTOs).
pub type SharedCapabilities = Arc<dyn Capabilities + Send + Sync>;
