//! The single failure type raised by argument validation.

use metrics_client_shared::{ErrorCode, ErrorEnvelope, ValidationError};

/// An argument passed to a metric or reporter constructor is unusable.
///
/// Every violation uses this one type; failures differ only by message and
/// by the parameter they name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidArgument {
    parameter: String,
    expected: String,
    actual: Option<String>,
    message: String,
}

impl InvalidArgument {
    fn new(
        parameter: &str,
        expected: impl Into<String>,
        actual: Option<&str>,
        message: String,
    ) -> Self {
        Self {
            parameter: parameter.to_owned(),
            expected: expected.into(),
            actual: actual.map(str::to_owned),
            message,
        }
    }

    /// `parameter` has the wrong type or shape.
    #[must_use]
    pub fn type_mismatch(parameter: &str, expected: &str, actual: Option<&str>) -> Self {
        let message = actual.map_or_else(
            || format!("{parameter} must be {expected}"),
            |actual| format!("{parameter} must be {expected}, got {actual}"),
        );
        Self::new(parameter, expected, actual, message)
    }

    /// A required object was not supplied at all.
    #[must_use]
    pub fn undefined(parameter: &str, expected: &str) -> Self {
        Self::new(
            parameter,
            expected,
            Some(metrics_client_domain::UNDEFINED),
            format!("{parameter} was undefined"),
        )
    }

    /// `parameter` does not export every method of its contract.
    #[must_use]
    pub fn missing_methods(parameter: &str, contract: &[&str], missing: &[&str]) -> Self {
        let expected = format!("an object implementing {}", join_methods(contract));
        let message = format!(
            "{parameter} must implement {}; missing {}",
            join_methods(contract),
            join_methods(missing)
        );
        Self::new(parameter, expected, None, message)
    }

    /// A dimension value is not a string.
    #[must_use]
    pub fn dimension_value(parameter: &str, key: &str, actual: &str) -> Self {
        Self::new(
            parameter,
            "a string",
            Some(actual),
            format!("{parameter}['{key}'] must be a string, got {actual}"),
        )
    }

    /// A metric reported a kind tag outside the accepted set.
    #[must_use]
    pub fn unknown_kind(parameter: &str, actual: &str, accepted: &str) -> Self {
        Self::new(
            parameter,
            format!("one of {accepted}"),
            Some(actual),
            format!("{parameter}.getType() returned {actual}, expected one of {accepted}"),
        )
    }

    /// Name of the offending parameter.
    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Expected type or shape.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Observed kind, when known.
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn join_methods(methods: &[&str]) -> String {
    let rendered: Vec<String> = methods.iter().map(|method| format!("{method}()")).collect();
    match rendered.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

impl ValidationError for InvalidArgument {
    fn type_mismatch(parameter: &str, expected: &str, actual: Option<&str>) -> Self {
        Self::type_mismatch(parameter, expected, actual)
    }

    fn invalid(parameter: &str, reason: String) -> Self {
        Self::new(parameter, "a valid value", None, format!("{parameter} {reason}"))
    }
}

impl From<InvalidArgument> for ErrorEnvelope {
    fn from(error: InvalidArgument) -> Self {
        let mut envelope = Self::expected(ErrorCode::invalid_argument(), error.message)
            .with_metadata("parameter", error.parameter)
            .with_metadata("expected", error.expected);
        if let Some(actual) = error.actual {
            envelope = envelope.with_metadata("actual", actual);
        }
        envelope
    }
}
