use super::*;

/// Tests deleting an existing channel.
///
/// Expected: No diagnostics, channel gone remotely, a later read fails
#[tokio::test]
async fn deletes_channel() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    let state = snapshot(&ChannelResourceModel::new("general", "123", "456"));

    let response = resource
        .delete(
            &Context::background(),
            DeleteRequest {
                state: state.clone(),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    assert!(test.client.channel(ChannelId::new(456)).await.is_none());

    let read = resource
        .read(&Context::background(), ReadRequest { state })
        .await;
    assert!(read.diagnostics.has_error());

    Ok(())
}

/// Tests deleting a channel that is already gone.
///
/// Expected: Remote error
#[tokio::test]
async fn deleting_missing_channel_fails() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    test.client.remove_channel(ChannelId::new(456)).await;

    let response = resource
        .delete(
            &Context::background(),
            DeleteRequest {
                state: snapshot(&ChannelResourceModel::new("general", "123", "456")),
            },
        )
        .await;

    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Remote);
    assert_eq!(diagnostic.summary, "Unable to delete channel");

    Ok(())
}
