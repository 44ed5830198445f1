//! Registration server entry-point: loads settings, initialises logging, and
//! serves the registration endpoint.

mod server;

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| std::io::Error::other(format!("failed to load server settings: {err}")))?;
    info!(
        host = settings.host(),
        port = settings.port(),
        reject_registrations = settings.reject_registrations,
        "loaded server settings"
    );

    create_server(ServerConfig::from_settings(&settings))?.await
}
