use super::*;

/// Tests importing by channel ID.
///
/// Expected: Only id is set, verbatim, without contacting Discord
#[tokio::test]
async fn sets_id_verbatim() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);

    let response = resource
        .import_state(
            &Context::background(),
            ImportStateRequest {
                id: "456".to_string(),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    assert_eq!(
        response.state.attribute("id").unwrap(),
        StringValue::known("456")
    );
    assert_eq!(response.state.attribute("name").unwrap(), StringValue::Null);
    assert!(test.client.calls().await.is_empty());

    Ok(())
}

/// Tests the read that follows an import.
///
/// Expected: The name is filled in from Discord
#[tokio::test]
async fn read_after_import_fills_name() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    let ctx = Context::background();

    let imported = resource
        .import_state(
            &ctx,
            ImportStateRequest {
                id: "456".to_string(),
            },
        )
        .await;
    let response = resource
        .read(
            &ctx,
            ReadRequest {
                state: imported.state,
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    let state: ChannelResourceModel = response.state.get().unwrap();
    assert_eq!(state.id, StringValue::known("456"));
    assert_eq!(state.name, StringValue::known("general"));

    Ok(())
}

/// Tests importing an identifier that is not a snowflake.
///
/// Expected: Import succeeds, the following read reports a conversion error
#[tokio::test]
async fn malformed_id_fails_on_read() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    let ctx = Context::background();

    let imported = resource
        .import_state(
            &ctx,
            ImportStateRequest {
                id: "general".to_string(),
            },
        )
        .await;
    assert!(imported.diagnostics.is_empty());

    let response = resource
        .read(
            &ctx,
            ReadRequest {
                state: imported.state,
            },
        )
        .await;

    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Conversion);

    Ok(())
}

/// Tests importing a signed identifier for an existing channel.
///
/// Expected: The read rejects the ID instead of tracking channel 456 under another string
#[tokio::test]
async fn signed_id_fails_on_read() -> Result<(), TestError> {
    let test = seeded_channel().await?;
    let resource = configured_resource(&test);
    let ctx = Context::background();

    let imported = resource
        .import_state(
            &ctx,
            ImportStateRequest {
                id: "+456".to_string(),
            },
        )
        .await;
    let response = resource
        .read(
            &ctx,
            ReadRequest {
                state: imported.state.clone(),
            },
        )
        .await;

    assert_eq!(response.state, imported.state);
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Conversion);
    assert_eq!(diagnostic.attribute, Some(AttributePath::root("id")));
    assert!(test.client.calls().await.is_empty());

    Ok(())
}
