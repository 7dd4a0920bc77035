//! Method tables for objects loaded at runtime.

use crate::Capabilities;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A callable exported by a plugin object. Arguments are variadic.
pub type PluginMethod = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// An object described only by the methods it exports.
#[derive(Clone, Default)]
pub struct PluginObject {
    methods: BTreeMap<String, PluginMethod>,
}

impl PluginObject {
    /// Create an object exporting nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Export a method, replacing any method with the same name.
    #[must_use]
    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }

    /// Look up an exported method.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&PluginMethod> {
        self.methods.get(name)
    }
}

impl Capabilities for PluginObject {
    fn has_method(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
        self.method(method).map(|callable| callable(args))
    }
}

impl fmt::Debug for PluginObject {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PluginObject")
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}
