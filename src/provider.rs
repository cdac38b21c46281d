//! Discord provider root.
//!
//! Resolves the bot token, builds the shared Discord client once, and registers the
//! resource and data source handlers that receive it.

use std::sync::Arc;

use discord_api::{ClientError, DiscordHandle, SerenityClient};

use crate::{
    config::ProviderConfig,
    data_source::server::ServerDataSource,
    error::{internal::InternalError, ProviderError},
    framework::{
        Attribute, DataSourceFactory, Diagnostics, Provider, ProviderConfigureRequest,
        ProviderConfigureResponse, ProviderData, ProviderMetadata, ResourceFactory, Schema,
    },
    model::{provider::TOKEN_ATTRIBUTE, DiscordProviderModel},
    resource::channel::ChannelResource,
};

/// Prefix of every resource and data source type name.
pub const PROVIDER_TYPE_NAME: &str = "discord";

/// Builds a Discord client from a resolved bot token.
pub type ClientFactory = Box<dyn Fn(&str) -> Result<DiscordHandle, ClientError> + Send + Sync>;

/// Supplies the environment token fallback.
pub type TokenLookup = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Provider root for Discord.
pub struct DiscordProvider {
    /// Release version, `dev` for local builds, or `test` under acceptance tests.
    version: String,
    env_token: TokenLookup,
    connect: ClientFactory,
}

impl DiscordProvider {
    /// Creates a provider that reads `DISCORD_AUTHENTICATION_TOKEN` and talks to Discord
    /// through serenity.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            env_token: Box::new(ProviderConfig::token_from_env),
            connect: Box::new(|token: &str| {
                let client = SerenityClient::connect(token)?;
                Ok(Arc::new(client) as DiscordHandle)
            }),
        }
    }

    /// Replaces the environment token lookup.
    pub fn with_env_token<F>(mut self, lookup: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.env_token = Box::new(lookup);
        self
    }

    /// Replaces how the Discord client is built from the resolved token.
    pub fn with_client_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Result<DiscordHandle, ClientError> + Send + Sync + 'static,
    {
        self.connect = Box::new(factory);
        self
    }

    fn try_configure(&self, model: &DiscordProviderModel) -> Result<DiscordHandle, ProviderError> {
        let config = ProviderConfig::resolve(&model.authentication_token, (self.env_token)())?;

        (self.connect)(&config.authentication_token).map_err(ProviderError::ClientConstruction)
    }
}

impl Provider for DiscordProvider {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    fn schema(&self) -> Schema {
        Schema::new("Manage Discord servers and channels").attribute(
            TOKEN_ATTRIBUTE,
            Attribute::optional_string()
                .description("authentication token for the discord bot")
                .sensitive(),
        )
    }

    /// Resolves the token and builds the client.
    ///
    /// At most one configuration error is reported. When the token cannot be resolved the
    /// client factory is never called.
    fn configure(&self, request: ProviderConfigureRequest) -> ProviderConfigureResponse {
        let mut response = ProviderConfigureResponse::default();

        let model: DiscordProviderModel = match request.config.get() {
            Ok(model) => model,
            Err(diagnostics) => {
                response.diagnostics = diagnostics;
                return response;
            }
        };

        match self.try_configure(&model) {
            Ok(client) => {
                let data: ProviderData = Arc::new(client);
                response.resource_data = Some(data.clone());
                response.data_source_data = Some(data);
                tracing::debug!("Configured Discord client");
            }
            Err(e) => {
                tracing::error!("Failed to configure Discord provider: {}", e);
                response
                    .diagnostics
                    .push(e.into_diagnostic("Unable to configure provider"));
            }
        }

        response
    }

    fn resources(&self) -> Vec<ResourceFactory> {
        vec![ChannelResource::factory]
    }

    fn data_sources(&self) -> Vec<DataSourceFactory> {
        vec![ServerDataSource::factory]
    }
}

/// Extracts the Discord client handle from provider data.
///
/// # Arguments
/// - `data` - Opaque data produced by [`DiscordProvider::configure`]
///
/// # Returns
/// - `Ok(DiscordHandle)` - The shared client
/// - `Err(InternalError::UnexpectedProviderData)` - The data is of another type
pub fn client_from_provider_data(data: &ProviderData) -> Result<DiscordHandle, ProviderError> {
    data.downcast_ref::<DiscordHandle>()
        .cloned()
        .ok_or_else(|| InternalError::UnexpectedProviderData.into())
}

/// Applies provider data to a handler's client slot.
///
/// Absent data means the provider is not configured yet and leaves the slot untouched.
pub(crate) fn configure_client(
    slot: &mut Option<DiscordHandle>,
    provider_data: Option<ProviderData>,
    summary: &str,
) -> Diagnostics {
    let Some(data) = provider_data else {
        return Diagnostics::new();
    };

    match client_from_provider_data(&data) {
        Ok(client) => {
            *slot = Some(client);
            Diagnostics::new()
        }
        Err(e) => e.into_diagnostic(summary).into(),
    }
}
