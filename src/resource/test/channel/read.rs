use super::*;

fn state() -> Snapshot {
    snapshot(&ChannelResourceModel::new("general", "123", "456"))
}

/// Tests reading a channel renamed outside the provider.
///
/// Expected: Only the name changes
#[tokio::test]
async fn picks_up_remote_rename() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    assert!(test.client.rename_channel(ChannelId::new(456), "renamed").await);

    let response = resource
        .read(&Context::background(), ReadRequest { state: state() })
        .await;

    assert!(response.diagnostics.is_empty());
    let state: ChannelResourceModel = response.state.get().unwrap();
    assert_eq!(state, ChannelResourceModel::new("renamed", "123", "456"));

    Ok(())
}

/// Tests reading an unchanged channel.
///
/// Expected: State identical to the prior state
#[tokio::test]
async fn unchanged_channel_reads_identically() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);

    let response = resource
        .read(&Context::background(), ReadRequest { state: state() })
        .await;

    assert!(response.diagnostics.is_empty());
    assert_eq!(response.state, state());
    assert_eq!(
        test.client.calls().await,
        vec![MockCall::GetChannel(ChannelId::new(456))]
    );

    Ok(())
}

/// Tests reading a channel that was deleted remotely.
///
/// Expected: Remote error, prior state returned unchanged
#[tokio::test]
async fn missing_channel_keeps_prior_state() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    test.client.remove_channel(ChannelId::new(456)).await;

    let response = resource
        .read(&Context::background(), ReadRequest { state: state() })
        .await;

    assert_eq!(response.state, state());
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Remote);
    assert_eq!(diagnostic.summary, "Unable to read channel");
    assert_eq!(diagnostic.detail, "Unknown channel 456");

    Ok(())
}

/// Tests reading a state whose ID is not a snowflake.
///
/// Expected: Conversion error on id, no request sent
#[tokio::test]
async fn invalid_id_is_rejected() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    let state = snapshot(&ChannelResourceModel::new("general", "123", "0"));

    let response = resource
        .read(&Context::background(), ReadRequest { state })
        .await;

    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Conversion);
    assert_eq!(diagnostic.attribute, Some(AttributePath::root("id")));
    assert!(test.client.calls().await.is_empty());

    Ok(())
}
