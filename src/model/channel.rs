use discord_api::DiscordChannel;
use serde::{Deserialize, Serialize};

use crate::framework::StringValue;

pub const NAME_ATTRIBUTE: &str = "name";
pub const GUILD_ID_ATTRIBUTE: &str = "guild_id";
pub const ID_ATTRIBUTE: &str = "id";

/// Attributes of a `discord_channel` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelResourceModel {
    pub name: StringValue,
    pub guild_id: StringValue,
    /// Discord-assigned channel ID; unknown until the channel is created.
    pub id: StringValue,
}

impl ChannelResourceModel {
    /// Builds a fully known model.
    pub fn new(name: impl Into<String>, guild_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: StringValue::known(name),
            guild_id: StringValue::known(guild_id),
            id: StringValue::known(id),
        }
    }

    /// Mirrors the remote channel's name. The ID and guild are left as tracked.
    pub fn apply_remote(&mut self, channel: &DiscordChannel) {
        self.name = StringValue::known(channel.name.as_str());
    }
}
