//! `discord_channel` resource.
//!
//! Manages a text channel inside a guild. The channel ID is assigned by Discord on create
//! and is the only key tying declared state to the remote channel; the name is mirrored
//! from Discord on every read. Moving a channel to another guild replaces it.

use discord_api::{DiscordChannel, DiscordHandle};
use serenity::async_trait;

use crate::{
    error::{internal::InternalError, ProviderError},
    framework::{
        Attribute, Context, CreateRequest, CreateResponse, DeleteRequest, DeleteResponse,
        Diagnostics, ImportStateRequest, ImportStateResponse, MetadataRequest, MetadataResponse,
        PlanModifier, ProviderData, ReadRequest, ReadResponse, Resource, Schema, StringValue,
        UpdateRequest, UpdateResponse,
    },
    model::{
        channel::{GUILD_ID_ATTRIBUTE, ID_ATTRIBUTE, NAME_ATTRIBUTE},
        ChannelResourceModel,
    },
    provider::configure_client,
    util::parse::{parse_channel_id, parse_guild_id},
};

/// Channel resource handler.
#[derive(Default)]
pub struct ChannelResource {
    client: Option<DiscordHandle>,
}

impl ChannelResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor registered with the provider.
    pub fn factory() -> Box<dyn Resource> {
        Box::new(Self::new())
    }

    fn client(&self) -> Result<&DiscordHandle, ProviderError> {
        self.client
            .as_ref()
            .ok_or_else(|| InternalError::NotConfigured.into())
    }

    async fn try_create(
        &self,
        ctx: &Context,
        plan: &ChannelResourceModel,
    ) -> Result<DiscordChannel, ProviderError> {
        let client = self.client()?;
        let guild_id = parse_guild_id(GUILD_ID_ATTRIBUTE, plan.guild_id.value_str())?;

        let channel = ctx
            .bound(client.create_channel(guild_id, plan.name.value_str()))
            .await??;

        Ok(channel)
    }

    async fn try_read(
        &self,
        ctx: &Context,
        state: &ChannelResourceModel,
    ) -> Result<DiscordChannel, ProviderError> {
        let client = self.client()?;
        let channel_id = parse_channel_id(ID_ATTRIBUTE, state.id.value_str())?;

        let channel = ctx.bound(client.get_channel(channel_id)).await??;

        Ok(channel)
    }

    async fn try_update(
        &self,
        ctx: &Context,
        plan: &ChannelResourceModel,
    ) -> Result<DiscordChannel, ProviderError> {
        let client = self.client()?;
        let channel_id = parse_channel_id(ID_ATTRIBUTE, plan.id.value_str())?;

        let channel = ctx
            .bound(client.edit_channel(channel_id, plan.name.value_str()))
            .await??;

        Ok(channel)
    }

    async fn try_delete(
        &self,
        ctx: &Context,
        state: &ChannelResourceModel,
    ) -> Result<(), ProviderError> {
        let client = self.client()?;
        let channel_id = parse_channel_id(ID_ATTRIBUTE, state.id.value_str())?;

        ctx.bound(client.delete_channel(channel_id)).await??;

        Ok(())
    }
}

#[async_trait]
impl Resource for ChannelResource {
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse {
        MetadataResponse {
            type_name: format!("{}_channel", request.provider_type_name),
        }
    }

    fn schema(&self) -> Schema {
        Schema::new("Text channel in a Discord server")
            .attribute(
                NAME_ATTRIBUTE,
                Attribute::required_string().description("Name of the channel"),
            )
            .attribute(
                GUILD_ID_ATTRIBUTE,
                Attribute::required_string()
                    .description("Id of the server the channel belongs to")
                    .plan_modifier(PlanModifier::RequiresReplace),
            )
            .attribute(
                ID_ATTRIBUTE,
                Attribute::computed_string()
                    .description("Id of the channel")
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
    }

    fn configure(&mut self, provider_data: Option<ProviderData>) -> Diagnostics {
        configure_client(
            &mut self.client,
            provider_data,
            "Unexpected Resource Configure Type",
        )
    }

    /// Creates the channel and records the ID Discord assigned.
    ///
    /// On failure the state stays null and nothing from the failed call is read.
    async fn create(&self, ctx: &Context, request: CreateRequest) -> CreateResponse {
        let mut response = CreateResponse::default();

        let mut data: ChannelResourceModel = match request.plan.get() {
            Ok(data) => data,
            Err(diagnostics) => {
                response.diagnostics = diagnostics;
                return response;
            }
        };

        match self.try_create(ctx, &data).await {
            Ok(channel) => {
                data.id = StringValue::known(channel.id.to_string());
                tracing::trace!("created a resource");
                tracing::debug!(
                    "Created channel {} ({}) in guild {}",
                    channel.name,
                    channel.id,
                    channel.guild_id
                );

                response.diagnostics.append(response.state.set(&data));
            }
            Err(e) => {
                tracing::error!(
                    "Failed to create channel {} in guild {}: {}",
                    data.name.value_str(),
                    data.guild_id.value_str(),
                    e
                );
                response
                    .diagnostics
                    .push(e.into_diagnostic("Error creating channel"));
            }
        }

        response
    }

    /// Refreshes the channel name from Discord.
    ///
    /// The prior state is returned unchanged when the lookup fails, including when the
    /// channel no longer exists.
    async fn read(&self, ctx: &Context, request: ReadRequest) -> ReadResponse {
        let data = request.state.get::<ChannelResourceModel>();
        let mut response = ReadResponse {
            state: request.state,
            diagnostics: Diagnostics::new(),
        };

        let mut data = match data {
            Ok(data) => data,
            Err(diagnostics) => {
                response.diagnostics = diagnostics;
                return response;
            }
        };

        match self.try_read(ctx, &data).await {
            Ok(channel) => {
                data.apply_remote(&channel);
                response.diagnostics.append(response.state.set(&data));
            }
            Err(e) => {
                tracing::error!("Failed to read channel {}: {}", data.id.value_str(), e);
                response
                    .diagnostics
                    .push(e.into_diagnostic("Unable to read channel"));
            }
        }

        response
    }

    /// Renames the channel. Only the name is sent to Discord.
    async fn update(&self, ctx: &Context, request: UpdateRequest) -> UpdateResponse {
        let plan = request.plan.get::<ChannelResourceModel>();
        let prior = request.state.get::<ChannelResourceModel>();
        let mut response = UpdateResponse {
            state: request.state,
            diagnostics: Diagnostics::new(),
        };

        let (mut plan, prior) = match (plan, prior) {
            (Ok(plan), Ok(prior)) => (plan, prior),
            (plan, prior) => {
                if let Err(diagnostics) = plan {
                    response.diagnostics.append(diagnostics);
                }
                if let Err(diagnostics) = prior {
                    response.diagnostics.append(diagnostics);
                }
                return response;
            }
        };

        if plan.id.as_known().is_none() {
            plan.id = prior.id;
        }

        match self.try_update(ctx, &plan).await {
            Ok(channel) => {
                tracing::debug!("Renamed channel {} to {}", channel.id, channel.name);
                response.diagnostics.append(response.state.set(&plan));
            }
            Err(e) => {
                tracing::error!("Failed to update channel {}: {}", plan.id.value_str(), e);
                response
                    .diagnostics
                    .push(e.into_diagnostic("Unable to update channel"));
            }
        }

        response
    }

    async fn delete(&self, ctx: &Context, request: DeleteRequest) -> DeleteResponse {
        let mut response = DeleteResponse::default();

        let data: ChannelResourceModel = match request.state.get() {
            Ok(data) => data,
            Err(diagnostics) => {
                response.diagnostics = diagnostics;
                return response;
            }
        };

        if let Err(e) = self.try_delete(ctx, &data).await {
            tracing::error!("Failed to delete channel {}: {}", data.id.value_str(), e);
            response
                .diagnostics
                .push(e.into_diagnostic("Unable to delete channel"));
        }

        response
    }

    /// Uses the import identifier verbatim as the channel ID; the next read fills in the
    /// remaining attributes.
    async fn import_state(
        &self,
        _ctx: &Context,
        request: ImportStateRequest,
    ) -> ImportStateResponse {
        let mut response = ImportStateResponse::default();

        response.diagnostics = response
            .state
            .set_attribute(ID_ATTRIBUTE, StringValue::known(request.id));

        response
    }
}
