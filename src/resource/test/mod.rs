use std::time::Duration;

use discord_api::{ChannelId, GuildId};
use test_utils::{
    builder::TestBuilder, context::TestContext, error::TestError, factory, mock::MockCall,
};

use crate::{
    framework::{
        AttributePath, Context, CreateRequest, DeleteRequest, ErrorKind, ImportStateRequest,
        MetadataRequest, PlanModifier, ReadRequest, Resource, Snapshot, StringValue,
        UpdateRequest,
    },
    model::ChannelResourceModel,
    resource::channel::ChannelResource,
};

mod channel;

/// Channel resource configured with the test context's mock client.
fn configured_resource(test: &TestContext) -> ChannelResource {
    let mut resource = ChannelResource::new();
    let diagnostics = resource.configure(Some(test.provider_data()));
    assert!(diagnostics.is_empty());
    resource
}

fn snapshot(model: &ChannelResourceModel) -> Snapshot {
    Snapshot::from_model(model).unwrap()
}

/// Context with guild 123 and channel 456 named "general".
async fn seeded_channel() -> Result<TestContext, TestError> {
    let guild = factory::guild::GuildFactory::new().id(123).build();
    let channel = factory::channel::ChannelFactory::new(guild.id)
        .id(456)
        .name("general")
        .build();

    TestBuilder::new()
        .with_guild(guild)
        .with_channel(channel)
        .build()
        .await
}
