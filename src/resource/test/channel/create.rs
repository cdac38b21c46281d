use super::*;

fn plan(name: &str, guild_id: &str) -> Snapshot {
    snapshot(&ChannelResourceModel {
        name: StringValue::known(name),
        guild_id: StringValue::known(guild_id),
        id: StringValue::Unknown,
    })
}

/// Tests creating a channel in an existing guild.
///
/// Verifies the state records the ID Discord assigned alongside the declared
/// attributes, and that the channel now exists remotely.
///
/// Expected: State {name: "general", guild_id: "123", id: "456"}
#[tokio::test]
async fn creates_channel_and_records_id() -> Result<(), TestError> {
    let guild = factory::guild::GuildFactory::new().id(123).build();
    let test = TestBuilder::new()
        .with_guild(guild)
        .next_channel_id(456)
        .build()
        .await?;
    let resource = configured_resource(&test);

    let response = resource
        .create(
            &Context::background(),
            CreateRequest {
                plan: plan("general", "123"),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    let state: ChannelResourceModel = response.state.get().unwrap();
    assert_eq!(state, ChannelResourceModel::new("general", "123", "456"));

    let channel = test.client.channel(ChannelId::new(456)).await.unwrap();
    assert_eq!(channel.name, "general");
    assert_eq!(channel.guild_id, GuildId::new(123));

    Ok(())
}

/// Tests creating a channel in a guild the bot cannot see.
///
/// Expected: Remote error, state left null
#[tokio::test]
async fn unknown_guild_leaves_state_null() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let resource = configured_resource(&test);

    let response = resource
        .create(
            &Context::background(),
            CreateRequest {
                plan: plan("general", "999"),
            },
        )
        .await;

    assert!(response.state.is_null());
    assert_eq!(response.diagnostics.len(), 1);
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Remote);
    assert_eq!(diagnostic.summary, "Error creating channel");
    assert_eq!(diagnostic.detail, "Unknown guild 999");
    assert_eq!(test.client.channel_count().await, 0);

    Ok(())
}

/// Tests a non-numeric guild ID.
///
/// Expected: Conversion error on guild_id, no request sent
#[tokio::test]
async fn invalid_guild_id_is_rejected_before_request() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let resource = configured_resource(&test);

    let response = resource
        .create(
            &Context::background(),
            CreateRequest {
                plan: plan("general", "not-a-snowflake"),
            },
        )
        .await;

    assert!(response.state.is_null());
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Conversion);
    assert_eq!(diagnostic.attribute, Some(AttributePath::root("guild_id")));
    assert!(test.client.calls().await.is_empty());

    Ok(())
}

/// Tests Discord rejecting the request.
///
/// Expected: The client's message is surfaced verbatim as detail
#[tokio::test]
async fn surfaces_remote_error_message() -> Result<(), TestError> {
    let guild = factory::guild::GuildFactory::new().id(123).build();
    let test = TestBuilder::new()
        .with_guild(guild)
        .failing("Missing Permissions")
        .build()
        .await?;
    let resource = configured_resource(&test);

    let response = resource
        .create(
            &Context::background(),
            CreateRequest {
                plan: plan("general", "123"),
            },
        )
        .await;

    assert!(response.state.is_null());
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.summary, "Error creating channel");
    assert_eq!(diagnostic.detail, "Missing Permissions");

    Ok(())
}

/// Tests the call context's deadline passing while Discord is slow.
///
/// Expected: Timeout error, state left null
#[tokio::test(start_paused = true)]
async fn deadline_bounds_request() -> Result<(), TestError> {
    let guild = factory::guild::GuildFactory::new().id(123).build();
    let test = TestBuilder::new()
        .with_guild(guild)
        .latency(Duration::from_secs(30))
        .build()
        .await?;
    let resource = configured_resource(&test);

    let ctx = Context::with_timeout(Duration::from_secs(5));
    let response = resource
        .create(
            &ctx,
            CreateRequest {
                plan: plan("general", "123"),
            },
        )
        .await;

    assert!(response.state.is_null());
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Timeout);

    Ok(())
}

/// Tests reading a freshly created channel.
///
/// Expected: The read state matches the created state
#[tokio::test]
async fn read_after_create_returns_same_name() -> Result<(), TestError> {
    let guild = factory::guild::create_guild();
    let guild_id = guild.id.to_string();
    let test = TestBuilder::new().with_guild(guild).build().await?;
    let resource = configured_resource(&test);
    let ctx = Context::background();

    let created = resource
        .create(
            &ctx,
            CreateRequest {
                plan: plan("voice-lobby", &guild_id),
            },
        )
        .await;
    let read = resource
        .read(
            &ctx,
            ReadRequest {
                state: created.state.clone(),
            },
        )
        .await;

    assert!(read.diagnostics.is_empty());
    assert_eq!(read.state, created.state);
    let state: ChannelResourceModel = read.state.get().unwrap();
    assert_eq!(state.name, StringValue::known("voice-lobby"));

    Ok(())
}

/// Tests the full lifecycle of a created channel renamed outside the provider.
///
/// Verifies that creating "general" in guild 123 records the assigned ID 456,
/// and that a later read after an out-of-band rename changes only the name.
///
/// Expected: State {name: "general-renamed", guild_id: "123", id: "456"}
#[tokio::test]
async fn create_then_read_picks_up_remote_rename() -> Result<(), TestError> {
    let guild = factory::guild::GuildFactory::new().id(123).build();
    let test = TestBuilder::new()
        .with_guild(guild)
        .next_channel_id(456)
        .build()
        .await?;
    let resource = configured_resource(&test);
    let ctx = Context::background();

    let created = resource
        .create(
            &ctx,
            CreateRequest {
                plan: plan("general", "123"),
            },
        )
        .await;
    assert!(created.diagnostics.is_empty());
    assert_eq!(
        created.state.get::<ChannelResourceModel>().unwrap(),
        ChannelResourceModel::new("general", "123", "456")
    );

    assert!(
        test.client
            .rename_channel(ChannelId::new(456), "general-renamed")
            .await
    );

    let read = resource
        .read(
            &ctx,
            ReadRequest {
                state: created.state,
            },
        )
        .await;

    assert!(read.diagnostics.is_empty());
    assert_eq!(
        read.state.get::<ChannelResourceModel>().unwrap(),
        ChannelResourceModel::new("general-renamed", "123", "456")
    );

    Ok(())
}
