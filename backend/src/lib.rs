//! Registration form helpers.
//!
//! The client half submits a [`domain::Form`] with
//! [`outbound::form_submitter::HttpFormSubmitter`] and folds field errors
//! with [`domain::to_error_map`]. The server half exposes the fixture
//! registration endpoint those helpers consume.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::RequestTrace;
