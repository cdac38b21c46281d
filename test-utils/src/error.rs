use discord_api::{ChannelId, GuildId};
use thiserror::Error;

/// Errors that can occur while building a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// A seeded channel references a guild that was never added to the builder.
    #[error("Channel {channel_id} belongs to guild {guild_id} which was not seeded")]
    UnknownGuild {
        channel_id: ChannelId,
        guild_id: GuildId,
    },
}
