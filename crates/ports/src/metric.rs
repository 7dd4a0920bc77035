//! Metric contract.

use crate::Capabilities;
use serde_json::Value;
use std::sync::Arc;

/// Exported name of the serialization method.
pub const METRIC_TO_JSON: &str = "toJSON";
/// Exported name of the kind-tag method.
pub const METRIC_GET_TYPE: &str = "getType";

/// A metric that can be registered and reported.
///
/// Concrete gauges, counters, histograms, meters and timers live outside this
/// workspace; they only need to serialize themselves and report their kind.
pub trait Metric: Send + Sync {
    /// Serialize the current state of the metric.
    fn to_json(&self) -> Value;

    /// Kind tag, checked against the injected `MetricKindSet`.
    fn metric_type(&self) -> String;
}

/// Capability view over a typed [`Metric`].
#[derive(Clone)]
pub struct MetricObject(pub Arc<dyn Metric>);

impl MetricObject {
    /// Wrap a typed metric.
    pub fn new(metric: impl Metric + 'static) -> Self {
        Self(Arc::new(metric))
    }
}

impl Capabilities for MetricObject {
    fn has_method(&self, method: &str) -> bool {
        matches!(method, METRIC_TO_JSON | METRIC_GET_TYPE)
    }

    fn invoke(&self, method: &str, _args: &[Value]) -> Option<Value> {
        match method {
            METRIC_TO_JSON => Some(self.0.to_json()),
            METRIC_GET_TYPE => Some(Value::String(self.0.metric_type())),
            _ => None,
        }
    }
}
