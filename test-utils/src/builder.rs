use std::sync::Arc;
use std::time::Duration;

use discord_api::{DiscordChannel, DiscordGuild};

use crate::{context::TestContext, error::TestError, mock::MockDiscordClient};

/// ID assigned to the first channel the mock creates unless overridden.
const DEFAULT_FIRST_CHANNEL_ID: u64 = 1_000_000;

/// Builder for creating test contexts backed by an in-memory Discord.
///
/// Seed guilds and channels, optionally inject failures or latency, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_guild(guild)
///     .next_channel_id(456)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    guilds: Vec<DiscordGuild>,
    channels: Vec<DiscordChannel>,
    first_channel_id: u64,
    failure: Option<&'static str>,
    latency: Option<Duration>,
}

impl TestBuilder {
    /// Creates a new test builder with an empty Discord.
    pub fn new() -> Self {
        Self {
            guilds: Vec::new(),
            channels: Vec::new(),
            first_channel_id: DEFAULT_FIRST_CHANNEL_ID,
            failure: None,
            latency: None,
        }
    }

    /// Adds a guild to the mock Discord.
    ///
    /// # Arguments
    /// - `guild` - Guild that lookups and channel creation can target
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_guild(mut self, guild: DiscordGuild) -> Self {
        self.guilds.push(guild);
        self
    }

    /// Adds an existing channel to the mock Discord.
    ///
    /// The channel's guild must also be added with `with_guild()`, in any order.
    ///
    /// # Arguments
    /// - `channel` - Channel that exists before the test runs
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_channel(mut self, channel: DiscordChannel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Sets the ID assigned to the next channel the mock creates.
    pub fn next_channel_id(mut self, id: u64) -> Self {
        self.first_channel_id = id;
        self
    }

    /// Makes every Discord request fail with `message`.
    pub fn failing(mut self, message: &'static str) -> Self {
        self.failure = Some(message);
        self
    }

    /// Delays every Discord request by `latency`.
    ///
    /// Pair with `#[tokio::test(start_paused = true)]` so tests do not actually wait.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Builds the test context, seeding the mock with the configured guilds and channels.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with the mock client ready
    /// - `Err(TestError::UnknownGuild)` - A seeded channel references a guild that was not added
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut client = MockDiscordClient::new(self.first_channel_id);
        if let Some(message) = self.failure {
            client = client.with_failure(message);
        }
        if let Some(latency) = self.latency {
            client = client.with_latency(latency);
        }

        for channel in &self.channels {
            if !self.guilds.iter().any(|guild| guild.id == channel.guild_id) {
                return Err(TestError::UnknownGuild {
                    channel_id: channel.id,
                    guild_id: channel.guild_id,
                });
            }
        }

        for guild in self.guilds {
            client.insert_guild(guild).await;
        }
        for channel in self.channels {
            client.insert_channel(channel).await;
        }

        Ok(TestContext::new(Arc::new(client)))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
