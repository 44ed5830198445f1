//! HTTP server configuration object.

use std::sync::Arc;

use registration::domain::ports::{FixtureRegistrationService, RegistrationService};

use super::settings::ServerSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) registration: Arc<dyn RegistrationService>,
}

impl ServerConfig {
    /// Bind to `host:port` with the accepting registration fixture.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            registration: Arc::new(FixtureRegistrationService::Accepting),
        }
    }

    /// Derive the configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self::new(settings.host(), settings.port()).with_registration(Arc::new(
            FixtureRegistrationService::from_reject_flag(settings.reject_registrations),
        ))
    }

    /// Replace the registration port implementation.
    #[must_use]
    pub fn with_registration(mut self, registration: Arc<dyn RegistrationService>) -> Self {
        self.registration = registration;
        self
    }
}
