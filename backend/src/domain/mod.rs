//! Domain types for the registration flow.
//!
//! Purpose: describe what a form submission carries and what the server
//! answers, independent of the HTTP client and server that move them.
//!
//! Public surface:
//! - `Form`, `FormMethod`, `FormValue`, `FormError`: the submittable form.
//! - `FieldError`, `ErrorMap`, `to_error_map`: field-level failures.
//! - `ResponseEnvelope`, `RegisteredUser`, `SubmissionOutcome`: replies.

pub mod envelope;
pub mod field_error;
pub mod form;
pub mod ports;

pub use self::envelope::{RegisteredUser, ResponseEnvelope, SubmissionOutcome};
pub use self::field_error::{ErrorMap, FieldError, to_error_map};
pub use self::form::{Form, FormError, FormMethod, FormValue};
