//! Discord channel factory.

use discord_api::{ChannelId, DiscordChannel, GuildId};

use crate::factory::helpers::next_id;

/// Factory for creating test channels within a guild.
///
/// # Example
///
/// ```rust,ignore
/// let channel = ChannelFactory::new(guild.id)
///     .id(456)
///     .name("general")
///     .build();
/// ```
pub struct ChannelFactory {
    id: u64,
    guild_id: GuildId,
    name: String,
}

impl ChannelFactory {
    /// Creates a new ChannelFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"channel-{id}"`
    ///
    /// # Arguments
    /// - `guild_id` - Guild the channel belongs to
    pub fn new(guild_id: GuildId) -> Self {
        let id = next_id();
        Self {
            id,
            guild_id,
            name: format!("channel-{}", id),
        }
    }

    /// Sets the channel ID.
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the channel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds the channel model.
    pub fn build(self) -> DiscordChannel {
        DiscordChannel {
            id: ChannelId::new(self.id),
            guild_id: self.guild_id,
            name: self.name,
        }
    }
}

/// Creates a channel with default values in the given guild.
pub fn create_channel(guild_id: GuildId) -> DiscordChannel {
    ChannelFactory::new(guild_id).build()
}
