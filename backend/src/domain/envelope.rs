//! Response payloads exchanged between the registration endpoint and the
//! form submitter.
//!
//! [`ResponseEnvelope`] mirrors the wire shape, where `error`, `success`, and
//! `user` are independent optional slots. [`SubmissionOutcome`] is the
//! exhaustive form callers should branch on.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::field_error::{ErrorMap, FieldError, to_error_map};

/// User created or authenticated by the registration flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegisteredUser {
    /// Username as chosen at registration.
    #[schema(example = "mike")]
    pub username: String,
}

impl RegisteredUser {
    /// Wrap a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// JSON body returned by the registration endpoint.
///
/// No invariant ties the slots together; a server may populate any subset.
/// Absent slots are omitted on the wire and decode as `None`. Unknown keys are
/// ignored so the decoded value is exactly what the caller would have read.
///
/// Example JSON:
/// `{"error":[{"field":"email","message":"Dodgy email alert!"}],"user":{"username":"big bri"}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResponseEnvelope {
    /// Field errors; presence marks the submission as rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<FieldError>>,
    /// Success message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    /// User the request concerned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RegisteredUser>,
}

impl ResponseEnvelope {
    /// Envelope carrying only a user, as returned on successful registration.
    pub fn with_user(user: RegisteredUser) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    /// Envelope carrying field errors, as returned on rejected registration.
    pub fn with_errors(errors: Vec<FieldError>) -> Self {
        Self {
            error: Some(errors),
            ..Self::default()
        }
    }

    /// Classify the envelope, checking the `error` slot first.
    ///
    /// A present `error` slot yields [`SubmissionOutcome::Failure`] even when
    /// the list is empty or a user is also present.
    ///
    /// # Examples
    /// ```
    /// use registration::domain::{RegisteredUser, ResponseEnvelope, SubmissionOutcome};
    ///
    /// let outcome = ResponseEnvelope::with_user(RegisteredUser::new("mike")).into_outcome();
    /// assert!(matches!(outcome, SubmissionOutcome::Success { user: Some(_), .. }));
    /// ```
    pub fn into_outcome(self) -> SubmissionOutcome {
        match self.error {
            Some(errors) => SubmissionOutcome::Failure { errors },
            None => SubmissionOutcome::Success {
                user: self.user,
                message: self.success,
            },
        }
    }
}

impl From<ResponseEnvelope> for SubmissionOutcome {
    fn from(value: ResponseEnvelope) -> Self {
        value.into_outcome()
    }
}

/// Result of a form submission as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server accepted the submission.
    Success {
        /// User echoed back by the server, if any.
        user: Option<RegisteredUser>,
        /// Free-form success message, if any.
        message: Option<String>,
    },
    /// The server rejected one or more fields.
    Failure {
        /// Field errors in the order the server sent them.
        errors: Vec<FieldError>,
    },
}

impl SubmissionOutcome {
    /// `true` for [`SubmissionOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Field errors keyed by name; empty for [`SubmissionOutcome::Success`].
    pub fn error_map(&self) -> ErrorMap {
        match self {
            Self::Failure { errors } => to_error_map(errors),
            Self::Success { .. } => ErrorMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[test]
    fn decodes_success_payload() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"user":{"username":"mike"}}"#).expect("envelope decodes");
        assert_eq!(
            envelope,
            ResponseEnvelope::with_user(RegisteredUser::new("mike"))
        );
    }

    #[test]
    fn decodes_failure_payload_without_transforming_it() {
        let envelope: ResponseEnvelope = serde_json::from_str(
            r#"{"error":[{"field":"email","message":"Dodgy email alert!"}]}"#,
        )
        .expect("envelope decodes");
        assert_eq!(
            envelope,
            ResponseEnvelope::with_errors(vec![FieldError::new("email", "Dodgy email alert!")])
        );
    }

    #[rstest]
    #[case::empty_object(json!({}))]
    #[case::unknown_keys(json!({ "status": "queued" }))]
    fn tolerates_missing_and_unknown_slots(#[case] body: Value) {
        let envelope: ResponseEnvelope = serde_json::from_value(body).expect("envelope decodes");
        assert_eq!(envelope, ResponseEnvelope::default());
    }

    #[test]
    fn omits_absent_slots_when_serialised() {
        let value = serde_json::to_value(ResponseEnvelope::with_user(RegisteredUser::new("mike")))
            .expect("envelope serialises");
        assert_eq!(value, json!({ "user": { "username": "mike" } }));
    }

    #[test]
    fn error_slot_takes_precedence_over_user() {
        let envelope = ResponseEnvelope {
            error: Some(vec![FieldError::new("password", "Dodgy password")]),
            success: Some("ignored".to_owned()),
            user: Some(RegisteredUser::new("big bri")),
        };

        let outcome = envelope.into_outcome();

        assert_eq!(
            outcome,
            SubmissionOutcome::Failure {
                errors: vec![FieldError::new("password", "Dodgy password")],
            }
        );
        assert_eq!(outcome.error_map().get("password"), Some("Dodgy password"));
    }

    #[test]
    fn empty_error_slot_still_counts_as_failure() {
        let outcome = ResponseEnvelope::with_errors(Vec::new()).into_outcome();
        assert!(!outcome.is_success());
        assert!(outcome.error_map().is_empty());
    }

    #[test]
    fn success_carries_user_and_message() {
        let envelope = ResponseEnvelope {
            error: None,
            success: Some("welcome".to_owned()),
            user: Some(RegisteredUser::new("mike")),
        };

        let outcome = SubmissionOutcome::from(envelope);

        assert_eq!(
            outcome,
            SubmissionOutcome::Success {
                user: Some(RegisteredUser::new("mike")),
                message: Some("welcome".to_owned()),
            }
        );
        assert!(outcome.error_map().is_empty());
    }
}
