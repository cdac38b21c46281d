use discord_api::DiscordGuild;
use serde::{Deserialize, Serialize};

use crate::framework::StringValue;

pub const ID_ATTRIBUTE: &str = "id";

/// Attributes of the `discord_server` data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerDataSourceModel {
    /// Guild ID to look up.
    pub id: StringValue,
    pub name: StringValue,
    pub description: StringValue,
}

impl ServerDataSourceModel {
    /// Overwrites the computed attributes with the guild's current values.
    ///
    /// A guild without a description reads as an empty string rather than null, so the
    /// attribute is always known after a successful read.
    pub fn apply_remote(&mut self, guild: &DiscordGuild) {
        self.name = StringValue::known(guild.name.as_str());
        self.description = StringValue::known(guild.description.clone().unwrap_or_default());
    }
}
