//! Metric dimensions (string-keyed, string-valued tags).

use crate::{DomainError, value_kind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Tags attached to a metric for slicing and filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimensions(BTreeMap<String, String>);

impl Dimensions {
    /// Create an empty set of dimensions.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build dimensions from a dynamic value.
    ///
    /// Arrays and scalars are rejected, as is the first non-string value (in
    /// key order).
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        let Value::Object(entries) = value else {
            return Err(DomainError::DimensionsNotAnObject {
                actual: value_kind(value),
            });
        };

        let mut dimensions = BTreeMap::new();
        for (key, value) in entries {
            let Value::String(text) = value else {
                return Err(DomainError::DimensionValueNotString {
                    key: key.clone(),
                    actual: value_kind(value),
                });
            };
            dimensions.insert(key.clone(), text.clone());
        }
        Ok(Self(dimensions))
    }

    /// Add or replace a dimension.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a dimension value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate dimensions in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert back into a dynamic JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect(),
        )
    }
}

impl TryFrom<&Value> for Dimensions {
    type Error = DomainError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl<K, V> FromIterator<(K, V)> for Dimensions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn string_only_objects_are_accepted() -> Result<(), DomainError> {
        let dimensions = Dimensions::from_value(&json!({"host": "a", "region": "us-east-1"}))?;
        assert_eq!(dimensions.len(), 2);
        assert_eq!(dimensions.get("host"), Some("a"));
        Ok(())
    }

    #[test]
    fn arrays_are_not_dimensions() {
        let error = Dimensions::from_value(&json!(["host", "a"])).err();
        assert_eq!(
            error,
            Some(DomainError::DimensionsNotAnObject { actual: "array" })
        );
    }

    #[test]
    fn non_string_value_names_its_key() {
        let error = Dimensions::from_value(&json!({"host": "a", "port": 8080})).err();
        assert_eq!(
            error,
            Some(DomainError::DimensionValueNotString {
                key: "port".to_string(),
                actual: "number",
            })
        );
    }

    #[test]
    fn with_replaces_existing_key() {
        let dimensions = Dimensions::new().with("env", "prod").with("env", "dev");
        assert_eq!(dimensions.len(), 1);
        assert_eq!(dimensions.get("env"), Some("dev"));
    }

    #[test]
    fn to_value_is_accepted_again() -> Result<(), DomainError> {
        let dimensions: Dimensions = [("host", "a")].into_iter().collect();
        let parsed = Dimensions::try_from(&dimensions.to_value())?;
        assert_eq!(parsed, dimensions);
        Ok(())
    }

    proptest! {
        #[test]
        fn any_string_map_is_accepted(map in prop::collection::btree_map(".{0,8}", ".{0,8}", 0..8)) {
            let value = Value::Object(
                map.into_iter().map(|(key, text)| (key, Value::String(text))).collect(),
            );
            let parsed = Dimensions::from_value(&value);
            prop_assert!(parsed.is_ok());
        }

        #[test]
        fn any_numeric_value_is_rejected(key in "[a-z]{1,8}", number in any::<i64>()) {
            let mut entries = serde_json::Map::new();
            entries.insert(key.clone(), json!(number));
            let value = Value::Object(entries);
            let parsed = Dimensions::from_value(&value);
            prop_assert_eq!(
                parsed.err(),
                Some(DomainError::DimensionValueNotString { key, actual: "number" })
            );
        }
    }
}
