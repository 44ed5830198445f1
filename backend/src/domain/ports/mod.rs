//! Domain ports for the hexagonal boundary.

mod registration_service;
mod submission_observer;

#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::{
    FIXTURE_REGISTERED_USERNAME, FIXTURE_REJECTED_USERNAME, FixtureRegistrationService,
    RegistrationReply, RegistrationService,
};
#[cfg(test)]
pub use submission_observer::MockSubmissionObserver;
pub use submission_observer::{
    NoOpSubmissionObserver, ResponseStatus, SubmissionObserver, TracingSubmissionObserver,
};
