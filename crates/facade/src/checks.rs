//! Primitive argument checks.
//!
//! Each check returns silently or fails with [`InvalidArgument`]. Optional
//! parameters treat both `None` and an explicit JSON `null` as absent. The
//! `check_*` variants take the parameter name used in messages; option DTOs
//! call them through `#[derive(Validate)]`.

use crate::InvalidArgument;
use crate::callback::CallbackArg;
use metrics_client_domain::{
    Dimensions, DomainError, MetricKindSet, PublishingInterval, describe, value_kind,
};
use metrics_client_ports::{
    Capabilities, LOGGER_METHODS, METRIC_GET_TYPE, METRIC_TO_JSON,
    REPORTER_REPORT_METRIC_ON_INTERVAL, REPORTER_SET_REGISTRY, SharedCapabilities,
};
use serde_json::Value;

const METRIC_METHODS: [&str; 2] = [METRIC_TO_JSON, METRIC_GET_TYPE];
const REPORTER_METHODS: [&str; 2] = [REPORTER_SET_REGISTRY, REPORTER_REPORT_METRIC_ON_INTERVAL];

/// Fails unless `name` is a string. Empty strings are accepted.
pub fn validate_metric_name(name: Option<&Value>) -> Result<(), InvalidArgument> {
    check_metric_name("name", name)
}

/// Fails unless present dimensions are an object of string values.
pub fn validate_optional_dimensions(dimensions: Option<&Value>) -> Result<(), InvalidArgument> {
    check_optional_dimensions("dimensions", dimensions)
}

/// Fails unless a present publishing interval is a number.
pub fn validate_optional_publishing_interval(
    interval: Option<&Value>,
) -> Result<(), InvalidArgument> {
    check_optional_publishing_interval("publishingIntervalInSeconds", interval)
}

/// Fails unless `callback` is callable and returns a number.
///
/// The callback is invoked exactly once, on the caller's stack. A panic inside
/// it is not caught.
pub fn validate_number_returning_callback(
    callback: Option<CallbackArg<'_>>,
) -> Result<(), InvalidArgument> {
    check_number_returning_callback("callback", callback)
}

/// Fails unless a present logger exports `debug`, `info`, `warn` and `error`.
pub fn validate_optional_logger(logger: Option<&dyn Capabilities>) -> Result<(), InvalidArgument> {
    check_optional_logger("logger", logger)
}

/// Fails unless `metric` exports `toJSON` and `getType` and reports a kind
/// contained in `kinds`.
pub fn validate_metric(
    metric: Option<&dyn Capabilities>,
    kinds: &MetricKindSet,
) -> Result<(), InvalidArgument> {
    check_metric("metric", metric, kinds)
}

/// Fails unless `reporter` exports `setRegistry` and `reportMetricOnInterval`.
pub fn validate_reporter_instance(
    reporter: Option<&dyn Capabilities>,
) -> Result<(), InvalidArgument> {
    check_reporter_instance("reporter", reporter)
}

/// Named form of [`validate_metric_name`].
pub fn check_metric_name(parameter: &str, name: Option<&Value>) -> Result<(), InvalidArgument> {
    match name {
        Some(Value::String(_)) => Ok(()),
        other => Err(InvalidArgument::type_mismatch(
            parameter,
            "a string",
            Some(describe(other)),
        )),
    }
}

/// Named form of [`validate_optional_dimensions`].
pub fn check_optional_dimensions(
    parameter: &str,
    dimensions: Option<&Value>,
) -> Result<(), InvalidArgument> {
    let Some(dimensions) = dimensions.filter(|value| !value.is_null()) else {
        return Ok(());
    };
    Dimensions::from_value(dimensions)
        .map(drop)
        .map_err(|error| dimension_error(parameter, error))
}

pub(crate) fn dimension_error(parameter: &str, error: DomainError) -> InvalidArgument {
    match error {
        DomainError::DimensionValueNotString { key, actual } => {
            InvalidArgument::dimension_value(parameter, &key, actual)
        },
        DomainError::DimensionsNotAnObject { actual } => InvalidArgument::type_mismatch(
            parameter,
            "an object of string values",
            Some(actual),
        ),
        other => InvalidArgument::type_mismatch(
            parameter,
            "an object of string values",
            Some(&other.to_string()),
        ),
    }
}

/// Named form of [`validate_optional_publishing_interval`].
pub fn check_optional_publishing_interval(
    parameter: &str,
    interval: Option<&Value>,
) -> Result<(), InvalidArgument> {
    let Some(interval) = interval.filter(|value| !value.is_null()) else {
        return Ok(());
    };
    PublishingInterval::from_value(interval)
        .map(drop)
        .map_err(|_| {
            InvalidArgument::type_mismatch(parameter, "a number", Some(value_kind(interval)))
        })
}

/// Named form of [`validate_number_returning_callback`].
pub fn check_number_returning_callback(
    parameter: &str,
    callback: Option<CallbackArg<'_>>,
) -> Result<(), InvalidArgument> {
    let callable = match callback {
        Some(CallbackArg::Function(callable)) => callable,
        Some(CallbackArg::Value(value)) => {
            return Err(InvalidArgument::type_mismatch(
                parameter,
                "a function",
                Some(value_kind(value)),
            ));
        },
        None => {
            return Err(InvalidArgument::type_mismatch(
                parameter,
                "a function",
                Some(describe(None)),
            ));
        },
    };

    let returned = callable();
    if returned.is_number() {
        Ok(())
    } else {
        Err(InvalidArgument::type_mismatch(
            &format!("{parameter}()"),
            "a number",
            Some(value_kind(&returned)),
        ))
    }
}

/// Named form of [`validate_optional_logger`].
pub fn check_optional_logger(
    parameter: &str,
    logger: Option<&dyn Capabilities>,
) -> Result<(), InvalidArgument> {
    let Some(logger) = logger else {
        return Ok(());
    };
    let missing = logger.missing_methods(&LOGGER_METHODS);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(InvalidArgument::missing_methods(
            parameter,
            &LOGGER_METHODS,
            &missing,
        ))
    }
}

/// Logger check for option DTOs holding a shared capability object.
pub fn check_optional_shared_logger(
    parameter: &str,
    logger: Option<&SharedCapabilities>,
) -> Result<(), InvalidArgument> {
    check_optional_logger(parameter, logger.map(erase))
}

fn erase(shared: &SharedCapabilities) -> &dyn Capabilities {
    &**shared
}

/// Named form of [`validate_metric`].
pub fn check_metric(
    parameter: &str,
    metric: Option<&dyn Capabilities>,
    kinds: &MetricKindSet,
) -> Result<(), InvalidArgument> {
    let Some(metric) = metric else {
        return Err(InvalidArgument::undefined(parameter, "a metric object"));
    };

    let missing = metric.missing_methods(&METRIC_METHODS);
    if !missing.is_empty() {
        return Err(InvalidArgument::missing_methods(
            parameter,
            &METRIC_METHODS,
            &missing,
        ));
    }

    let tag = metric.invoke(METRIC_GET_TYPE, &[]).unwrap_or(Value::Null);
    match tag.as_str() {
        Some(tag) if kinds.contains(tag) => Ok(()),
        _ => Err(InvalidArgument::unknown_kind(
            parameter,
            &tag.to_string(),
            &kinds.to_string(),
        )),
    }
}

/// Named form of [`validate_reporter_instance`].
pub fn check_reporter_instance(
    parameter: &str,
    reporter: Option<&dyn Capabilities>,
) -> Result<(), InvalidArgument> {
    let Some(reporter) = reporter else {
        return Err(InvalidArgument::undefined(parameter, "a reporter object"));
    };

    let missing = reporter.missing_methods(&REPORTER_METHODS);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(InvalidArgument::missing_methods(
            parameter,
            &REPORTER_METHODS,
            &missing,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_client_domain::MetricKind;
    use metrics_client_ports::PluginObject;
    use proptest::prelude::*;
    use serde_json::json;
    use std::cell::Cell;

    fn metric_of_kind(tag: &'static str) -> PluginObject {
        PluginObject::new()
            .with_method(METRIC_TO_JSON, |_| json!({}))
            .with_method(METRIC_GET_TYPE, move |_| json!(tag))
    }

    #[test]
    fn name_rejects_every_non_string_kind() {
        for value in [json!(1), json!({}), json!(null), json!(true), json!([])] {
            assert!(validate_metric_name(Some(&value)).is_err(), "{value}");
        }
        let error = validate_metric_name(None).err();
        assert_eq!(error.as_ref().and_then(InvalidArgument::actual), Some("undefined"));
    }

    #[test]
    fn name_accepts_empty_string() {
        assert!(validate_metric_name(Some(&json!(""))).is_ok());
    }

    #[test]
    fn dimensions_null_and_absent_are_no_ops() {
        assert!(validate_optional_dimensions(None).is_ok());
        assert!(validate_optional_dimensions(Some(&Value::Null)).is_ok());
    }

    #[test]
    fn dimensions_reject_arrays_and_scalars() {
        let error = validate_optional_dimensions(Some(&json!(["a"]))).err();
        assert_eq!(error.as_ref().and_then(InvalidArgument::actual), Some("array"));
        assert!(validate_optional_dimensions(Some(&json!("host=a"))).is_err());
    }

    #[test]
    fn dimensions_error_names_offending_key() {
        let error = validate_optional_dimensions(Some(&json!({"host": "a", "pid": 7}))).err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("dimensions['pid'] must be a string, got number".to_string())
        );
    }

    #[test]
    fn interval_accepts_numbers_only() {
        assert!(validate_optional_publishing_interval(None).is_ok());
        assert!(validate_optional_publishing_interval(Some(&Value::Null)).is_ok());
        assert!(validate_optional_publishing_interval(Some(&json!(10))).is_ok());
        assert!(validate_optional_publishing_interval(Some(&json!(-0.5))).is_ok());
        assert!(validate_optional_publishing_interval(Some(&json!("10"))).is_err());
        assert!(validate_optional_publishing_interval(Some(&json!(false))).is_err());
    }

    #[test]
    fn callback_must_be_callable() {
        let error = validate_number_returning_callback(None).err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("callback must be a function, got undefined".to_string())
        );

        let not_callable = json!(42);
        let error = validate_number_returning_callback(Some(CallbackArg::Value(&not_callable))).err();
        assert_eq!(error.as_ref().and_then(InvalidArgument::actual), Some("number"));
    }

    #[test]
    fn callback_must_return_a_number() {
        let error = validate_number_returning_callback(Some(CallbackArg::Function(&|| json!("bad"))))
            .err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("callback() must be a number, got string".to_string())
        );
        assert!(validate_number_returning_callback(Some(CallbackArg::Function(&|| Value::Null))).is_err());
    }

    #[test]
    fn callback_accepts_zero_and_negative_numbers() {
        for number in [json!(0), json!(-3), json!(-0.25), json!(42)] {
            let callback = move || number.clone();
            assert!(validate_number_returning_callback(Some(CallbackArg::Function(&callback))).is_ok());
        }
    }

    #[test]
    fn callback_runs_exactly_once() {
        let calls = Cell::new(0);
        let callback = || {
            calls.set(calls.get() + 1);
            json!(1)
        };
        assert!(validate_number_returning_callback(Some(CallbackArg::Function(&callback))).is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    #[should_panic(expected = "gauge source unavailable")]
    fn callback_panics_propagate_unmodified() {
        let callback = || -> Value { panic!("gauge source unavailable") };
        let _ = validate_number_returning_callback(Some(CallbackArg::Function(&callback)));
    }

    #[test]
    fn logger_absent_is_a_no_op() {
        assert!(validate_optional_logger(None).is_ok());
    }

    #[test]
    fn logger_missing_methods_yield_one_combined_error() {
        let partial = PluginObject::new()
            .with_method("debug", |_| Value::Null)
            .with_method("info", |_| Value::Null);
        let error = validate_optional_logger(Some(&partial)).err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some(
                "logger must implement debug(), info(), warn() and error(); missing warn() and error()"
                    .to_string()
            )
        );
    }

    #[test]
    fn metric_undefined_has_fixed_message() {
        let error = validate_metric(None, &MetricKindSet::standard()).err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("metric was undefined".to_string())
        );
    }

    #[test]
    fn metric_without_get_type_fails() {
        let metric = PluginObject::new().with_method(METRIC_TO_JSON, |_| json!({}));
        let error = validate_metric(Some(&metric), &MetricKindSet::standard()).err();
        assert!(error.is_some_and(|error| error.message().contains("missing getType()")));
    }

    #[test]
    fn metric_kind_must_be_in_injected_set() {
        let kinds = MetricKindSet::from_kinds([MetricKind::Gauge, MetricKind::Counter]);
        assert!(validate_metric(Some(&metric_of_kind("Gauge")), &kinds).is_ok());

        let error = validate_metric(Some(&metric_of_kind("Timer")), &kinds).err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some(
                "metric.getType() returned \"Timer\", expected one of [Counter, Gauge]".to_string()
            )
        );
    }

    #[test]
    fn metric_non_string_kind_fails() {
        let metric = PluginObject::new()
            .with_method(METRIC_TO_JSON, |_| json!({}))
            .with_method(METRIC_GET_TYPE, |_| json!(3));
        assert!(validate_metric(Some(&metric), &MetricKindSet::standard()).is_err());
    }

    #[test]
    fn reporter_requires_both_methods() {
        let partial = PluginObject::new().with_method(REPORTER_SET_REGISTRY, |_| Value::Null);
        let error = validate_reporter_instance(Some(&partial)).err();
        assert!(error.is_some_and(|error| {
            error.message().ends_with("missing reportMetricOnInterval()")
        }));

        let complete = partial.with_method(REPORTER_REPORT_METRIC_ON_INTERVAL, |_| Value::Null);
        assert!(validate_reporter_instance(Some(&complete)).is_ok());
        assert!(validate_reporter_instance(None).is_err());
    }

    proptest! {
        #[test]
        fn any_string_is_a_valid_name(name in ".*") {
            prop_assert!(validate_metric_name(Some(&Value::String(name))).is_ok());
        }

        #[test]
        fn any_number_is_rejected_as_name(number in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
            prop_assert!(validate_metric_name(Some(&json!(number))).is_err());
        }

        #[test]
        fn any_finite_number_is_a_valid_interval(seconds in -1.0e9f64..1.0e9) {
            prop_assert!(validate_optional_publishing_interval(Some(&json!(seconds))).is_ok());
        }
    }
}
