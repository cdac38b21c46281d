//! Process startup helpers for the CLI.

use tracing_subscriber::EnvFilter;

use crate::{
    framework::{Diagnostics, Snapshot, StringValue},
    host::ProviderHost,
    model::DiscordProviderModel,
    provider::DiscordProvider,
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Logs go to stderr so stdout stays
/// machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds and configures a host for the Discord provider.
///
/// # Arguments
/// - `version` - Provider version reported in metadata
/// - `token` - Declared authentication token; `None` falls back to the environment
///
/// # Returns
/// - `Ok(ProviderHost)` - Provider configured and client propagated to every handler
/// - `Err(Diagnostics)` - Configuration failed, e.g. no token could be resolved
pub fn configure_host(version: &str, token: Option<String>) -> Result<ProviderHost, Diagnostics> {
    let mut host = ProviderHost::new(DiscordProvider::new(version))?;

    let config = Snapshot::from_model(&DiscordProviderModel {
        authentication_token: StringValue::from(token),
    })?;

    let diagnostics = host.configure(config);
    if diagnostics.has_error() {
        return Err(diagnostics);
    }

    tracing::info!("Discord provider {} configured", version);

    Ok(host)
}
