//! Discord guild factory.

use discord_api::{DiscordGuild, GuildId};

use crate::factory::helpers::next_id;

/// Factory for creating test guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let guild = GuildFactory::new()
///     .id(123)
///     .name("My Server")
///     .description("A place to hang out")
///     .build();
/// ```
pub struct GuildFactory {
    id: u64,
    name: String,
    description: Option<String>,
}

impl GuildFactory {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Guild {id}"`
    /// - description: `None`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id,
            name: format!("Guild {}", id),
            description: None,
        }
    }

    /// Sets the guild ID.
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the guild name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the guild description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the guild model.
    pub fn build(self) -> DiscordGuild {
        DiscordGuild {
            id: GuildId::new(self.id),
            name: self.name,
            description: self.description,
        }
    }
}

impl Default for GuildFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a guild with default values.
///
/// Shorthand for `GuildFactory::new().build()`.
pub fn create_guild() -> DiscordGuild {
    GuildFactory::new().build()
}
