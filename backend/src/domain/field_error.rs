//! Field-level validation failures and the lookup table built from them.
//!
//! Forms render one message next to each input. The server reports failures as
//! an ordered list, so callers fold that list into an [`ErrorMap`] keyed by
//! field name before rendering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One validation failure tied to a named form input.
///
/// Serialised as `{"field": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending form field.
    #[schema(example = "email")]
    pub field: String,
    /// Human-readable message for the field.
    #[schema(example = "Dodgy email alert!")]
    pub message: String,
}

impl FieldError {
    /// Build a field error from any string-like parts.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Mapping from field name to message.
///
/// ## Invariants
/// - Each field name appears at most once.
/// - When built from a sequence, a later entry for the same field replaces
///   the earlier one.
///
/// Iteration is ordered by field name. Serialises as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Number of distinct fields with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(field, message)` pairs ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    fn insert(&mut self, field: String, message: String) {
        self.0.insert(field, message);
    }
}

impl FromIterator<FieldError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut map = Self::default();
        for FieldError { field, message } in iter {
            map.insert(field, message);
        }
        map
    }
}

/// Fold an ordered sequence of field errors into an [`ErrorMap`].
///
/// Last write wins for duplicate field names. Empty input yields an empty map.
///
/// # Examples
/// ```
/// use registration::domain::{FieldError, to_error_map};
///
/// let errors = vec![
///     FieldError::new("email", "taken"),
///     FieldError::new("email", "Dodgy email alert!"),
/// ];
/// let map = to_error_map(&errors);
/// assert_eq!(map.get("email"), Some("Dodgy email alert!"));
/// assert_eq!(map.len(), 1);
/// ```
pub fn to_error_map<'a, I>(errors: I) -> ErrorMap
where
    I: IntoIterator<Item = &'a FieldError>,
{
    errors.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error map folding.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::single(vec![("email", "Dodgy email alert!")])]
    #[case::several(vec![
        ("email", "Dodgy email alert!"),
        ("password", "Dodgy password"),
        ("username", "already taken"),
    ])]
    fn unique_fields_map_one_to_one(#[case] pairs: Vec<(&str, &str)>) {
        let errors: Vec<FieldError> = pairs
            .iter()
            .map(|(field, message)| FieldError::new(*field, *message))
            .collect();

        let map = to_error_map(&errors);

        assert_eq!(map.len(), errors.len());
        for error in &errors {
            assert_eq!(map.get(&error.field), Some(error.message.as_str()));
        }
    }

    #[test]
    fn later_duplicate_overwrites_earlier_message() {
        let errors = vec![
            FieldError::new("email", "first"),
            FieldError::new("password", "Dodgy password"),
            FieldError::new("email", "second"),
        ];

        let map = to_error_map(&errors);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("email"), Some("second"));
        assert_eq!(map.get("password"), Some("Dodgy password"));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        let errors: Vec<FieldError> = Vec::new();
        let map = to_error_map(&errors);
        assert!(map.is_empty());
        assert_eq!(map.get("email"), None);
    }

    #[test]
    fn collecting_owned_errors_matches_borrowed_fold() {
        let errors = vec![
            FieldError::new("a", "one"),
            FieldError::new("b", "two"),
            FieldError::new("a", "three"),
        ];

        let borrowed = to_error_map(&errors);
        let owned: ErrorMap = errors.into_iter().collect();

        assert_eq!(borrowed, owned);
    }

    #[test]
    fn iterates_in_field_name_order() {
        let errors = vec![
            FieldError::new("username", "u"),
            FieldError::new("email", "e"),
        ];

        let map = to_error_map(&errors);
        let fields: Vec<&str> = map.iter().map(|(field, _)| field).collect();

        assert_eq!(fields, vec!["email", "username"]);
    }

    #[test]
    fn serialises_as_flat_object() {
        let map = to_error_map(&[FieldError::new("email", "Dodgy email alert!")]);
        let value = serde_json::to_value(&map).expect("error map serialises");
        assert_eq!(value, json!({ "email": "Dodgy email alert!" }));
    }

    #[test]
    fn field_error_round_trips_wire_shape() {
        let value = json!({ "field": "password", "message": "Dodgy password" });
        let error: FieldError = serde_json::from_value(value).expect("field error decodes");
        assert_eq!(error, FieldError::new("password", "Dodgy password"));
    }
}
