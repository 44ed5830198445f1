//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only on
//! domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureRegistrationService, RegistrationService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Port answering registration requests.
    pub registration: Arc<dyn RegistrationService>,
}

impl HttpState {
    /// Bundle the registration port.
    pub fn new(registration: Arc<dyn RegistrationService>) -> Self {
        Self { registration }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureRegistrationService::default()))
    }
}
