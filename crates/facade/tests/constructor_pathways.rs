//! End-to-end checks of the constructor pathways using typed metrics,
//! reporters and loggers behind their capability views.

use metrics_client_adapters::{JsonLogger, MemoryLogSink, TracingLogger};
use metrics_client_facade::{
    CallbackArg, InvalidArgument, MetricKindSet, ReporterOptions, SelfReportingRegistryOptions,
    SharedCapabilities, validate_counter_options, validate_gauge_options, validate_metric,
    validate_register_options, validate_reporter_instance, validate_reporter_parameters,
    validate_self_reporting_metrics_registry_parameters,
};
use metrics_client_ports::{
    LoggerObject, Metric, MetricObject, MetricsRegistry, PluginObject, PublishingInterval,
    Reporter, ReporterObject,
};
use metrics_client_shared::{ErrorCode, ErrorEnvelope};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

struct RequestCounter {
    count: u64,
}

impl Metric for RequestCounter {
    fn to_json(&self) -> Value {
        json!({"count": self.count})
    }

    fn metric_type(&self) -> String {
        "Counter".to_string()
    }
}

#[derive(Default)]
struct ScheduleReporter {
    scheduled: Mutex<Vec<String>>,
}

impl Reporter for ScheduleReporter {
    fn set_registry(&self, _registry: Arc<dyn MetricsRegistry>) {}

    fn report_metric_on_interval(&self, metric_key: &str, _interval: PublishingInterval) {
        if let Ok(mut guard) = self.scheduled.lock() {
            guard.push(metric_key.to_owned());
        }
    }
}

fn json_logger() -> SharedCapabilities {
    Arc::new(LoggerObject::new(JsonLogger::new(Arc::new(
        MemoryLogSink::new(),
    ))))
}

fn parameter_of(result: Result<(), InvalidArgument>) -> Option<String> {
    result.err().map(|error| error.parameter().to_owned())
}

#[test]
fn gauge_with_numeric_callback_passes() {
    let reading = || json!(42);
    let result = validate_gauge_options(
        Some(&json!("cpu")),
        Some(CallbackArg::function(&reading)),
        Some(&json!({"host": "a"})),
        Some(&json!(10)),
    );
    assert_eq!(result, Ok(()));
}

#[test]
fn gauge_with_string_callback_fails_on_the_callback() {
    let reading = || json!("bad");
    let result = validate_gauge_options(
        Some(&json!("cpu")),
        Some(CallbackArg::function(&reading)),
        Some(&json!({})),
        Some(&json!(10)),
    );
    assert_eq!(
        result.err().map(|error| error.to_string()),
        Some("callback() must be a number, got string".to_string())
    );
}

#[test]
fn gauge_checks_common_parameters_before_calling_back() {
    let calls = Mutex::new(0_u32);
    let reading = || {
        if let Ok(mut guard) = calls.lock() {
            *guard += 1;
        }
        json!(1)
    };

    let result = validate_gauge_options(
        Some(&json!(12)),
        Some(CallbackArg::function(&reading)),
        None,
        None,
    );
    assert_eq!(parameter_of(result), Some("name".to_string()));
    assert_eq!(calls.lock().map(|guard| *guard).ok(), Some(0));
}

#[test]
fn gauge_callback_runs_exactly_once() {
    let calls = Mutex::new(0_u32);
    let reading = || {
        if let Ok(mut guard) = calls.lock() {
            *guard += 1;
        }
        json!(-3.5)
    };

    let result = validate_gauge_options(
        Some(&json!("temperature")),
        Some(CallbackArg::function(&reading)),
        None,
        None,
    );
    assert_eq!(result, Ok(()));
    assert_eq!(calls.lock().map(|guard| *guard).ok(), Some(1));
}

#[test]
fn counter_reports_first_violation_only() {
    let result = validate_counter_options(
        Some(&json!("requests")),
        Some(&json!({"route": 404})),
        Some(&json!("soon")),
    );
    assert_eq!(
        result.err().map(|error| error.to_string()),
        Some("dimensions['route'] must be a string, got number".to_string())
    );
}

#[test]
fn typed_metric_registers_with_standard_kinds() {
    let metric = MetricObject::new(RequestCounter { count: 3 });
    let result = validate_register_options(
        Some(&json!("requests")),
        Some(&metric),
        Some(&json!({"region": "eu"})),
        None,
        &MetricKindSet::standard(),
    );
    assert_eq!(result, Ok(()));
}

#[test]
fn register_checks_metric_before_name() {
    let result = validate_register_options(
        Some(&json!(false)),
        None,
        None,
        None,
        &MetricKindSet::standard(),
    );
    assert_eq!(
        result.err().map(|error| error.to_string()),
        Some("metric was undefined".to_string())
    );
}

#[test]
fn metric_with_unknown_kind_fails() {
    let summary = PluginObject::new()
        .with_method("toJSON", |_| json!({}))
        .with_method("getType", |_| json!("Summary"));
    let result = validate_metric(Some(&summary), &MetricKindSet::standard());
    assert_eq!(
        result.err().map(|error| error.to_string()),
        Some(
            "metric.getType() returned \"Summary\", expected one of [Counter, Gauge, Histogram, Meter, Timer]"
                .to_string()
        )
    );

    let extended = MetricKindSet::standard().with_tag("Summary");
    assert_eq!(validate_metric(Some(&summary), &extended), Ok(()));
}

#[test]
fn typed_reporter_satisfies_instance_check() {
    let reporter = ReporterObject::new(ScheduleReporter::default());
    assert_eq!(validate_reporter_instance(Some(&reporter)), Ok(()));
}

#[test]
fn reporter_without_interval_method_fails() {
    let partial = PluginObject::new().with_method("setRegistry", |_| Value::Null);
    assert_eq!(
        validate_reporter_instance(Some(&partial))
            .err()
            .map(|error| error.to_string()),
        Some(
            "reporter must implement setRegistry() and reportMetricOnInterval(); missing reportMetricOnInterval()"
                .to_string()
        )
    );
}

#[test]
fn reporter_parameters_accept_absent_options_and_real_loggers() {
    assert_eq!(validate_reporter_parameters(None), Ok(()));

    let options = ReporterOptions::default()
        .with_default_dimensions(json!({"service": "billing"}))
        .with_logger(json_logger());
    assert_eq!(validate_reporter_parameters(Some(&options)), Ok(()));

    let tracing_backed: SharedCapabilities =
        Arc::new(LoggerObject::new(TracingLogger::with_component("reporter")));
    let options = ReporterOptions::default().with_logger(tracing_backed);
    assert_eq!(validate_reporter_parameters(Some(&options)), Ok(()));
}

#[test]
fn reporter_parameters_decoded_from_json() -> Result<(), InvalidArgument> {
    let options = ReporterOptions::from_value(&json!({"defaultDimensions": {"env": 1}}))?;
    assert_eq!(
        parameter_of(validate_reporter_parameters(Some(&options))),
        Some("defaultDimensions".to_string())
    );
    Ok(())
}

#[test]
fn reporter_logger_decoded_from_json_must_be_an_object() {
    let error = ReporterOptions::from_value(&json!({"logger": "not a logger"})).err();
    assert_eq!(
        error.as_ref().map(InvalidArgument::parameter),
        Some("logger")
    );

    let error = ReporterOptions::from_value(&json!({
        "defaultDimensions": {"env": 1},
        "logger": {"debug": true}
    }))
    .err();
    assert_eq!(
        error.as_ref().map(InvalidArgument::parameter),
        Some("defaultDimensions")
    );
}

#[test]
fn self_reporting_registry_checks_reporter_then_logger() {
    let reporter = ReporterObject::new(ScheduleReporter::default());
    let incomplete: SharedCapabilities =
        Arc::new(PluginObject::new().with_method("info", |_| Value::Null));
    let options = SelfReportingRegistryOptions::with_logger(incomplete);

    assert_eq!(
        parameter_of(validate_self_reporting_metrics_registry_parameters(
            None,
            Some(&options)
        )),
        Some("reporter".to_string())
    );
    assert_eq!(
        parameter_of(validate_self_reporting_metrics_registry_parameters(
            Some(&reporter),
            Some(&options)
        )),
        Some("logger".to_string())
    );

    let options = SelfReportingRegistryOptions::with_logger(json_logger());
    assert_eq!(
        validate_self_reporting_metrics_registry_parameters(Some(&reporter), Some(&options)),
        Ok(())
    );
    assert_eq!(
        validate_self_reporting_metrics_registry_parameters(Some(&reporter), None),
        Ok(())
    );
}

#[test]
fn failures_convert_to_invalid_argument_envelopes() {
    let error = validate_counter_options(Some(&json!(null)), None, None)
        .err()
        .map(ErrorEnvelope::from);

    assert_eq!(
        error.as_ref().map(|error| &error.code),
        Some(&ErrorCode::invalid_argument())
    );
    assert_eq!(
        error.and_then(|error| error.metadata.get("actual").cloned()),
        Some("null".to_string())
    );
}
