use serenity::all::{GuildId, PartialGuild};

/// Discord guild (server) as seen by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordGuild {
    /// Discord-assigned guild ID.
    pub id: GuildId,
    /// Guild display name.
    pub name: String,
    /// Guild description, only set for community guilds.
    pub description: Option<String>,
}

impl DiscordGuild {
    /// Converts a serenity partial guild at the client boundary.
    ///
    /// # Arguments
    /// - `guild` - Partial guild as returned by `GET /guilds/{guild.id}`
    ///
    /// # Returns
    /// - `DiscordGuild` - Domain model with the guild's ID, name and description
    pub fn from_partial_guild(guild: &PartialGuild) -> Self {
        Self {
            id: guild.id,
            name: guild.name.clone(),
            description: guild.description.clone(),
        }
    }
}
