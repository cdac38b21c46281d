use serenity::all::{ChannelId, GuildChannel, GuildId};

/// Discord channel within a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordChannel {
    /// Discord-assigned channel ID.
    pub id: ChannelId,
    /// Guild the channel belongs to.
    pub guild_id: GuildId,
    /// Channel display name.
    pub name: String,
}

impl DiscordChannel {
    /// Converts a serenity guild channel at the client boundary.
    ///
    /// # Arguments
    /// - `channel` - Guild channel as returned by the Discord API
    ///
    /// # Returns
    /// - `DiscordChannel` - Domain model with the channel's ID, guild and name
    pub fn from_guild_channel(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id,
            guild_id: channel.guild_id,
            name: channel.name.clone(),
        }
    }
}
