use std::any::Any;
use std::sync::Arc;

use discord_api::DiscordHandle;

use crate::mock::MockDiscordClient;

/// Test context holding the in-memory Discord client.
pub struct TestContext {
    /// The mock client, kept concrete so tests can inspect state and recorded calls.
    pub client: Arc<MockDiscordClient>,
}

impl TestContext {
    /// Wraps an already configured mock client.
    pub fn new(client: Arc<MockDiscordClient>) -> Self {
        Self { client }
    }

    /// The mock as the trait object handlers store after configuration.
    pub fn handle(&self) -> DiscordHandle {
        self.client.clone()
    }

    /// The mock packaged the way the provider hands its client to resources and data sources.
    ///
    /// # Returns
    /// - `Arc<dyn Any + Send + Sync>` - Type-erased `DiscordHandle`
    pub fn provider_data(&self) -> Arc<dyn Any + Send + Sync> {
        Arc::new(self.handle())
    }
}
