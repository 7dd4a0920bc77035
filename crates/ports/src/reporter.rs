//! Reporter and registry contracts.

use crate::Capabilities;
use metrics_client_domain::PublishingInterval;
use serde_json::Value;
use std::sync::Arc;

/// Exported name of the registry setter.
pub const REPORTER_SET_REGISTRY: &str = "setRegistry";
/// Exported name of the interval scheduling method.
pub const REPORTER_REPORT_METRIC_ON_INTERVAL: &str = "reportMetricOnInterval";

/// Read side of a metrics registry, as seen by a reporter.
pub trait MetricsRegistry: Send + Sync {
    /// Serialized state of the metric registered under `key`.
    fn metric_json(&self, key: &str) -> Option<Value>;

    /// Keys of all registered metrics.
    fn metric_keys(&self) -> Vec<String>;
}

/// Periodically exports registered metrics to an external sink.
pub trait Reporter: Send + Sync {
    /// Attach the registry the reporter reads metrics from.
    fn set_registry(&self, registry: Arc<dyn MetricsRegistry>);

    /// Schedule the metric under `metric_key` for reporting every `interval`.
    fn report_metric_on_interval(&self, metric_key: &str, interval: PublishingInterval);
}

/// Capability view over a typed [`Reporter`].
#[derive(Clone)]
pub struct ReporterObject(pub Arc<dyn Reporter>);

impl ReporterObject {
    /// Wrap a typed reporter.
    pub fn new(reporter: impl Reporter + 'static) -> Self {
        Self(Arc::new(reporter))
    }
}

impl Capabilities for ReporterObject {
    fn has_method(&self, method: &str) -> bool {
        matches!(
            method,
            REPORTER_SET_REGISTRY | REPORTER_REPORT_METRIC_ON_INTERVAL
        )
    }

    /// `reportMetricOnInterval` takes `[metricKey, intervalSeconds]`.
    /// Registry handles cannot be passed as JSON, so `setRegistry` is not
    /// invocable here; call [`Reporter::set_registry`] directly.
    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
        if method != REPORTER_REPORT_METRIC_ON_INTERVAL {
            return None;
        }
        let key = args.first()?.as_str()?;
        let seconds = args.get(1)?.as_f64()?;
        self.0
            .report_metric_on_interval(key, PublishingInterval::from_seconds(seconds));
        Some(Value::Null)
    }
}
