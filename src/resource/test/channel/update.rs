use super::*;

/// Tests renaming a channel.
///
/// Expected: Discord receives the new name, state equals the plan
#[tokio::test]
async fn renames_channel() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    let plan = ChannelResourceModel::new("announcements", "123", "456");

    let response = resource
        .update(
            &Context::background(),
            UpdateRequest {
                plan: snapshot(&plan),
                state: snapshot(&ChannelResourceModel::new("general", "123", "456")),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    assert_eq!(response.state.get::<ChannelResourceModel>().unwrap(), plan);
    assert_eq!(
        test.client.calls().await,
        vec![MockCall::EditChannel {
            channel_id: ChannelId::new(456),
            name: "announcements".to_string(),
        }]
    );
    let channel = test.client.channel(ChannelId::new(456)).await.unwrap();
    assert_eq!(channel.name, "announcements");

    Ok(())
}

/// Tests a plan whose ID is still unknown.
///
/// Expected: The prior state's ID is used and kept in the new state
#[tokio::test]
async fn unknown_plan_id_falls_back_to_prior_state() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    let plan = ChannelResourceModel {
        name: StringValue::known("announcements"),
        guild_id: StringValue::known("123"),
        id: StringValue::Unknown,
    };

    let response = resource
        .update(
            &Context::background(),
            UpdateRequest {
                plan: snapshot(&plan),
                state: snapshot(&ChannelResourceModel::new("general", "123", "456")),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    assert_eq!(
        response.state.get::<ChannelResourceModel>().unwrap(),
        ChannelResourceModel::new("announcements", "123", "456")
    );

    Ok(())
}

/// Tests renaming a channel that no longer exists.
///
/// Expected: Remote error, prior state returned unchanged
#[tokio::test]
async fn failed_update_keeps_prior_state() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    test.client.remove_channel(ChannelId::new(456)).await;
    let prior = snapshot(&ChannelResourceModel::new("general", "123", "456"));

    let response = resource
        .update(
            &Context::background(),
            UpdateRequest {
                plan: snapshot(&ChannelResourceModel::new("announcements", "123", "456")),
                state: prior.clone(),
            },
        )
        .await;

    assert_eq!(response.state, prior);
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.summary, "Unable to update channel");
    assert_eq!(diagnostic.detail, "Unknown channel 456");

    Ok(())
}
