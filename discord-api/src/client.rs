use std::sync::Arc;

use serenity::all::{ChannelId, GuildId};
use serenity::async_trait;

use crate::{
    error::ClientError,
    model::{DiscordChannel, DiscordGuild},
};

/// Shared, thread-safe handle to a Discord client.
///
/// Constructed once when the provider is configured and cloned into every resource and
/// data source handler.
pub type DiscordHandle = Arc<dyn DiscordClient>;

/// Discord REST operations used by the provider's handlers.
///
/// Each method is a single round trip to the remote API. Implementations must be safe to
/// share across concurrently running handler calls.
#[async_trait]
pub trait DiscordClient: Send + Sync {
    /// Creates a text channel named `name` in the guild.
    ///
    /// # Returns
    /// - `Ok(DiscordChannel)` - The created channel including its server-assigned ID
    /// - `Err(ClientError)` - The guild does not exist or the request was rejected
    async fn create_channel(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<DiscordChannel, ClientError>;

    /// Fetches a guild channel by ID.
    ///
    /// # Returns
    /// - `Ok(DiscordChannel)` - The channel as currently stored by Discord
    /// - `Err(ClientError::NotFound)` - No channel with this ID exists
    /// - `Err(ClientError::NotGuildChannel)` - The ID belongs to a direct message channel
    async fn get_channel(&self, channel_id: ChannelId) -> Result<DiscordChannel, ClientError>;

    /// Renames a guild channel.
    ///
    /// # Returns
    /// - `Ok(DiscordChannel)` - The channel after the edit was applied
    /// - `Err(ClientError)` - The channel does not exist or the request was rejected
    async fn edit_channel(
        &self,
        channel_id: ChannelId,
        name: &str,
    ) -> Result<DiscordChannel, ClientError>;

    /// Deletes a channel.
    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ClientError>;

    /// Fetches a guild by ID.
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)` - The guild's name and description
    /// - `Err(ClientError::NotFound)` - The guild does not exist or the bot is not a member
    async fn get_guild(&self, guild_id: GuildId) -> Result<DiscordGuild, ClientError>;
}
