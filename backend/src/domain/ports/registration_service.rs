//! Driving port for the registration endpoint.
//!
//! The HTTP handler asks this port what to answer and only translates the
//! reply into a status code and envelope. No request data crosses the port:
//! the endpoint does not parse, validate, or persist submissions.

use async_trait::async_trait;

use crate::domain::{FieldError, RegisteredUser, ResponseEnvelope};

/// Username returned by the accepting fixture.
pub const FIXTURE_REGISTERED_USERNAME: &str = "mike";
/// Username echoed by the rejecting fixture.
pub const FIXTURE_REJECTED_USERNAME: &str = "big bri";

/// Reply produced for one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationReply {
    /// The user was registered.
    Registered {
        /// Newly registered user.
        user: RegisteredUser,
    },
    /// One or more fields were rejected.
    Rejected {
        /// Per-field failures.
        errors: Vec<FieldError>,
        /// User the attempt concerned, if known.
        user: Option<RegisteredUser>,
    },
}

impl RegistrationReply {
    /// Wire envelope for this reply.
    pub fn into_envelope(self) -> ResponseEnvelope {
        match self {
            Self::Registered { user } => ResponseEnvelope::with_user(user),
            Self::Rejected { errors, user } => ResponseEnvelope {
                error: Some(errors),
                success: None,
                user,
            },
        }
    }
}

/// Domain use-case port for registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Decide the reply for an incoming registration.
    async fn register(&self) -> RegistrationReply;
}

/// Fixture registration service used until real persistence exists.
///
/// Accepts every registration by default. The rejecting mode returns the
/// field-error contract clients are expected to handle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FixtureRegistrationService {
    /// Registers every user as `mike`.
    #[default]
    Accepting,
    /// Rejects the email and password fields.
    Rejecting,
}

impl FixtureRegistrationService {
    /// Select the fixture mode from a `reject` flag.
    pub fn from_reject_flag(reject: bool) -> Self {
        if reject {
            Self::Rejecting
        } else {
            Self::Accepting
        }
    }
}

#[async_trait]
impl RegistrationService for FixtureRegistrationService {
    async fn register(&self) -> RegistrationReply {
        match self {
            Self::Accepting => RegistrationReply::Registered {
                user: RegisteredUser::new(FIXTURE_REGISTERED_USERNAME),
            },
            Self::Rejecting => RegistrationReply::Rejected {
                errors: vec![
                    FieldError::new("email", "Dodgy email alert!"),
                    FieldError::new("password", "Dodgy password"),
                ],
                user: Some(RegisteredUser::new(FIXTURE_REJECTED_USERNAME)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(false, FixtureRegistrationService::Accepting)]
    #[case(true, FixtureRegistrationService::Rejecting)]
    fn reject_flag_selects_mode(#[case] reject: bool, #[case] expected: FixtureRegistrationService) {
        assert_eq!(FixtureRegistrationService::from_reject_flag(reject), expected);
    }

    #[tokio::test]
    async fn accepting_fixture_registers_mike() {
        let reply = FixtureRegistrationService::Accepting.register().await;
        let envelope = serde_json::to_value(reply.into_envelope()).expect("envelope serialises");
        assert_eq!(envelope, json!({ "user": { "username": "mike" } }));
    }

    #[tokio::test]
    async fn rejecting_fixture_reports_two_field_errors() {
        let reply = FixtureRegistrationService::Rejecting.register().await;
        let envelope = serde_json::to_value(reply.into_envelope()).expect("envelope serialises");
        assert_eq!(
            envelope,
            json!({
                "error": [
                    { "field": "email", "message": "Dodgy email alert!" },
                    { "field": "password", "message": "Dodgy password" }
                ],
                "user": { "username": "big bri" }
            })
        );
    }
}
