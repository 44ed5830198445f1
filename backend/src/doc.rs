//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the registration endpoint and the envelope schemas it
//! returns. Swagger UI serves it in debug builds, and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{FieldError, RegisteredUser, ResponseEnvelope};

/// OpenAPI document for the registration API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration API",
        description = "Form-submission endpoint consumed by the registration page."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::register::register),
    components(schemas(ResponseEnvelope, FieldError, RegisteredUser)),
    tags(
        (name = "registration", description = "User registration")
    )
)]
pub struct ApiDoc;
