//! Registration endpoint.
//!
//! ```text
//! POST /register   (multipart/form-data, body ignored)
//! 200 {"user":{"username":"mike"}}
//! 400 {"error":[{"field":"email","message":"Dodgy email alert!"}, ...],"user":{"username":"big bri"}}
//! ```
//!
//! The handler does not read the submitted fields. It asks the
//! [`RegistrationService`](crate::domain::ports::RegistrationService) port for
//! a reply and renders it.

use actix_web::{HttpResponse, post, web};
use tracing::info;

use crate::domain::ResponseEnvelope;
use crate::domain::ports::RegistrationReply;
use crate::inbound::http::state::HttpState;

/// Register a user from a submitted form.
///
/// The multipart body is accepted but not inspected.
#[utoipa::path(
    post,
    path = "/register",
    responses(
        (status = 200, description = "User registered", body = ResponseEnvelope),
        (status = 400, description = "Field errors", body = ResponseEnvelope)
    ),
    tags = ["registration"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(state: web::Data<HttpState>) -> HttpResponse {
    let reply = state.registration.register().await;
    let mut response = match &reply {
        RegistrationReply::Registered { user } => {
            info!(username = %user.username, "registration accepted");
            HttpResponse::Ok()
        }
        RegistrationReply::Rejected { errors, .. } => {
            info!(field_errors = errors.len(), "registration rejected");
            HttpResponse::BadRequest()
        }
    };
    response.json(reply.into_envelope())
}
