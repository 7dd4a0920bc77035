//! Validation traits shared by hand-written checks and derived DTO checks.

/// Trait for validation errors produced by argument checks.
pub trait ValidationError: Sized {
    /// A parameter does not have the expected type or shape.
    ///
    /// `actual` names the observed kind when it is known.
    fn type_mismatch(parameter: &str, expected: &str, actual: Option<&str>) -> Self;

    /// A parameter is invalid for a reason that is not a plain type mismatch.
    fn invalid(parameter: &str, reason: String) -> Self;
}

/// Validate a DTO using compile-time derived rules.
pub trait Validate {
    /// Error type returned by validation.
    type Error: ValidationError;

    /// Validate the DTO, stopping at the first violation.
    fn validate(&self) -> Result<(), Self::Error>;
}
