//! `discord_server` data source.
//!
//! Looks up a guild by ID and exposes its name and description. Reads are idempotent and
//! never write partial results: either both computed attributes are refreshed or the state
//! stays null.

use discord_api::{DiscordGuild, DiscordHandle};
use serenity::async_trait;

use crate::{
    error::{internal::InternalError, ProviderError},
    framework::{
        Attribute, Context, DataSource, Diagnostics, MetadataRequest, MetadataResponse,
        ProviderData, ReadDataSourceRequest, ReadDataSourceResponse, Schema,
    },
    model::{server::ID_ATTRIBUTE, ServerDataSourceModel},
    provider::configure_client,
    util::parse::parse_guild_id,
};

/// Server (guild) data source handler.
#[derive(Default)]
pub struct ServerDataSource {
    client: Option<DiscordHandle>,
}

impl ServerDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor registered with the provider.
    pub fn factory() -> Box<dyn DataSource> {
        Box::new(Self::new())
    }

    /// Fetches the guild named by the configured ID.
    ///
    /// # Arguments
    /// - `ctx` - Call context whose deadline bounds the request
    /// - `config` - Declared data source configuration
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)` - The guild's current name and description
    /// - `Err(ProviderError::InvalidId)` - The ID is not a Discord snowflake
    /// - `Err(ProviderError::ClientErr)` - Discord rejected the lookup
    async fn try_read(
        &self,
        ctx: &Context,
        config: &ServerDataSourceModel,
    ) -> Result<DiscordGuild, ProviderError> {
        let client = self
            .client
            .as_ref()
            .ok_or(ProviderError::InternalErr(InternalError::NotConfigured))?;
        let guild_id = parse_guild_id(ID_ATTRIBUTE, config.id.value_str())?;

        let guild = ctx.bound(client.get_guild(guild_id)).await??;

        Ok(guild)
    }
}

#[async_trait]
impl DataSource for ServerDataSource {
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse {
        MetadataResponse {
            type_name: format!("{}_server", request.provider_type_name),
        }
    }

    fn schema(&self) -> Schema {
        Schema::new("Server data source")
            .attribute(
                ID_ATTRIBUTE,
                Attribute::required_string().description("Id of the server"),
            )
            .attribute(
                "name",
                Attribute::computed_string().description("Name of the server"),
            )
            .attribute(
                "description",
                Attribute::computed_string().description("description of the server"),
            )
    }

    fn configure(&mut self, provider_data: Option<ProviderData>) -> Diagnostics {
        configure_client(
            &mut self.client,
            provider_data,
            "Unexpected Data Source Configure Type",
        )
    }

    async fn read(&self, ctx: &Context, request: ReadDataSourceRequest) -> ReadDataSourceResponse {
        let mut response = ReadDataSourceResponse::default();

        let mut data: ServerDataSourceModel = match request.config.get() {
            Ok(data) => data,
            Err(diagnostics) => {
                response.diagnostics = diagnostics;
                return response;
            }
        };

        match self.try_read(ctx, &data).await {
            Ok(guild) => {
                data.apply_remote(&guild);
                tracing::trace!("read a data source");

                response.diagnostics.append(response.state.set(&data));
            }
            Err(e) => {
                tracing::error!("Failed to read server {}: {}", data.id.value_str(), e);
                response
                    .diagnostics
                    .push(e.into_diagnostic("Unable to get Server"));
            }
        }

        response
    }
}
