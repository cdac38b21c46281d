//! Serenity-backed implementation of [`DiscordClient`].
//!
//! All requests go through a single shared `Http` client. Serenity applies Discord's
//! ratelimits internally, so no retry or backoff logic exists here.

use std::sync::Arc;

use serenity::all::{ChannelId, ChannelType, CreateChannel, EditChannel, GuildId};
use serenity::async_trait;
use serenity::http::Http;

use crate::{
    client::DiscordClient,
    error::ClientError,
    model::{DiscordChannel, DiscordGuild},
};

/// Discord client performing authenticated REST calls through serenity.
#[derive(Clone)]
pub struct SerenityClient {
    http: Arc<Http>,
}

impl SerenityClient {
    /// Creates a client authenticated with a bot token.
    ///
    /// The token is validated locally before the `Http` client is built; no request is sent.
    /// Serenity adds the `Bot ` authorization prefix when it is missing.
    ///
    /// # Arguments
    /// - `token` - Bot token from the Discord Developer Portal
    ///
    /// # Returns
    /// - `Ok(SerenityClient)` - Client ready to issue requests
    /// - `Err(ClientError::InvalidToken)` - Token is not shaped like a Discord bot token
    pub fn connect(token: &str) -> Result<Self, ClientError> {
        serenity::utils::validate_token(token)
            .map_err(|e| ClientError::InvalidToken(e.to_string()))?;

        Ok(Self::from_http(Arc::new(Http::new(token))))
    }

    /// Wraps an existing serenity `Http` client, e.g. one shared with a gateway bot.
    pub fn from_http(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// The underlying serenity `Http` client.
    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }
}

#[async_trait]
impl DiscordClient for SerenityClient {
    async fn create_channel(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<DiscordChannel, ClientError> {
        let builder = CreateChannel::new(name).kind(ChannelType::Text);

        let channel = guild_id
            .create_channel(self.http.as_ref(), builder)
            .await
            .map_err(|e| ClientError::from_serenity("guild", guild_id.get(), e))?;

        tracing::debug!("Created channel {} in guild {}", channel.id, guild_id);

        Ok(DiscordChannel::from_guild_channel(&channel))
    }

    async fn get_channel(&self, channel_id: ChannelId) -> Result<DiscordChannel, ClientError> {
        let channel = channel_id
            .to_channel(self.http.as_ref())
            .await
            .map_err(|e| ClientError::from_serenity("channel", channel_id.get(), e))?;

        let Some(channel) = channel.guild() else {
            return Err(ClientError::NotGuildChannel(channel_id));
        };

        Ok(DiscordChannel::from_guild_channel(&channel))
    }

    async fn edit_channel(
        &self,
        channel_id: ChannelId,
        name: &str,
    ) -> Result<DiscordChannel, ClientError> {
        let channel = channel_id
            .edit(self.http.as_ref(), EditChannel::new().name(name))
            .await
            .map_err(|e| ClientError::from_serenity("channel", channel_id.get(), e))?;

        tracing::debug!("Renamed channel {} to {}", channel_id, channel.name);

        Ok(DiscordChannel::from_guild_channel(&channel))
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ClientError> {
        channel_id
            .delete(self.http.as_ref())
            .await
            .map_err(|e| ClientError::from_serenity("channel", channel_id.get(), e))?;

        tracing::debug!("Deleted channel {}", channel_id);

        Ok(())
    }

    async fn get_guild(&self, guild_id: GuildId) -> Result<DiscordGuild, ClientError> {
        let guild = guild_id
            .to_partial_guild(self.http.as_ref())
            .await
            .map_err(|e| ClientError::from_serenity("guild", guild_id.get(), e))?;

        Ok(DiscordGuild::from_partial_guild(&guild))
    }
}
