//! In-memory Discord backend.
//!
//! [`MockDiscordClient`] implements `DiscordClient` over a map of guilds and channels guarded
//! by a tokio `RwLock`. Unknown IDs answer with `ClientError::NotFound` the same way the
//! serenity client maps Discord's 404 responses, and every call is recorded so tests can
//! assert which requests a handler made.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use discord_api::{
    async_trait, ChannelId, ClientError, DiscordChannel, DiscordClient, DiscordGuild, GuildId,
};
use tokio::sync::RwLock;

/// A request received by the mock client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    CreateChannel { guild_id: GuildId, name: String },
    GetChannel(ChannelId),
    EditChannel { channel_id: ChannelId, name: String },
    DeleteChannel(ChannelId),
    GetGuild(GuildId),
}

#[derive(Default)]
struct MockState {
    guilds: HashMap<GuildId, DiscordGuild>,
    channels: HashMap<ChannelId, DiscordChannel>,
    calls: Vec<MockCall>,
}

/// Discord client backed by in-memory state.
pub struct MockDiscordClient {
    state: RwLock<MockState>,
    next_channel_id: AtomicU64,
    /// When set, every request fails with this message after being recorded.
    failure: Option<&'static str>,
    /// Delay applied before every request is handled.
    latency: Option<Duration>,
}

impl MockDiscordClient {
    /// Creates an empty mock that assigns channel IDs starting at `first_channel_id`.
    pub fn new(first_channel_id: u64) -> Self {
        Self {
            state: RwLock::new(MockState::default()),
            next_channel_id: AtomicU64::new(first_channel_id),
            failure: None,
            latency: None,
        }
    }

    /// Makes every request fail with a non-404 error carrying `message`.
    pub fn with_failure(mut self, message: &'static str) -> Self {
        self.failure = Some(message);
        self
    }

    /// Delays every request by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Stores a guild so lookups and channel creation in it succeed.
    pub async fn insert_guild(&self, guild: DiscordGuild) {
        self.state.write().await.guilds.insert(guild.id, guild);
    }

    /// Stores a channel as if it had already been created remotely.
    pub async fn insert_channel(&self, channel: DiscordChannel) {
        self.state.write().await.channels.insert(channel.id, channel);
    }

    /// Renames a stored channel without recording a call, simulating an out-of-band edit.
    ///
    /// # Returns
    /// - `true` if the channel exists and was renamed
    pub async fn rename_channel(&self, channel_id: ChannelId, name: &str) -> bool {
        match self.state.write().await.channels.get_mut(&channel_id) {
            Some(channel) => {
                channel.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes a stored channel without recording a call, simulating deletion outside the provider.
    pub async fn remove_channel(&self, channel_id: ChannelId) -> Option<DiscordChannel> {
        self.state.write().await.channels.remove(&channel_id)
    }

    /// Returns the stored channel, if any.
    pub async fn channel(&self, channel_id: ChannelId) -> Option<DiscordChannel> {
        self.state.read().await.channels.get(&channel_id).cloned()
    }

    /// Returns the number of stored channels.
    pub async fn channel_count(&self) -> usize {
        self.state.read().await.channels.len()
    }

    /// Returns every request received so far, in order.
    pub async fn calls(&self) -> Vec<MockCall> {
        self.state.read().await.calls.clone()
    }

    /// Records the call, then applies injected latency and failure.
    async fn begin(&self, call: MockCall) -> Result<(), ClientError> {
        self.state.write().await.calls.push(call);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.failure {
            Some(message) => Err(ClientError::from(serenity::Error::Other(message))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DiscordClient for MockDiscordClient {
    async fn create_channel(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<DiscordChannel, ClientError> {
        self.begin(MockCall::CreateChannel {
            guild_id,
            name: name.to_string(),
        })
        .await?;

        let mut state = self.state.write().await;
        if !state.guilds.contains_key(&guild_id) {
            return Err(ClientError::NotFound {
                kind: "guild",
                id: guild_id.get(),
            });
        }

        let id = ChannelId::new(self.next_channel_id.fetch_add(1, Ordering::SeqCst));
        let channel = DiscordChannel {
            id,
            guild_id,
            name: name.to_string(),
        };
        state.channels.insert(id, channel.clone());

        Ok(channel)
    }

    async fn get_channel(&self, channel_id: ChannelId) -> Result<DiscordChannel, ClientError> {
        self.begin(MockCall::GetChannel(channel_id)).await?;

        self.state
            .read()
            .await
            .channels
            .get(&channel_id)
            .cloned()
            .ok_or(ClientError::NotFound {
                kind: "channel",
                id: channel_id.get(),
            })
    }

    async fn edit_channel(
        &self,
        channel_id: ChannelId,
        name: &str,
    ) -> Result<DiscordChannel, ClientError> {
        self.begin(MockCall::EditChannel {
            channel_id,
            name: name.to_string(),
        })
        .await?;

        let mut state = self.state.write().await;
        let Some(channel) = state.channels.get_mut(&channel_id) else {
            return Err(ClientError::NotFound {
                kind: "channel",
                id: channel_id.get(),
            });
        };

        channel.name = name.to_string();

        Ok(channel.clone())
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ClientError> {
        self.begin(MockCall::DeleteChannel(channel_id)).await?;

        match self.state.write().await.channels.remove(&channel_id) {
            Some(_) => Ok(()),
            None => Err(ClientError::NotFound {
                kind: "channel",
                id: channel_id.get(),
            }),
        }
    }

    async fn get_guild(&self, guild_id: GuildId) -> Result<DiscordGuild, ClientError> {
        self.begin(MockCall::GetGuild(guild_id)).await?;

        self.state
            .read()
            .await
            .guilds
            .get(&guild_id)
            .cloned()
            .ok_or(ClientError::NotFound {
                kind: "guild",
                id: guild_id.get(),
            })
    }
}
