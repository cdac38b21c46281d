use super::*;

use std::sync::Arc;

/// Tests the resource type name is derived from the provider type name.
///
/// Expected: "discord_channel"
#[test]
fn type_name_uses_provider_prefix() {
    let resource = ChannelResource::new();

    let response = resource.metadata(&MetadataRequest {
        provider_type_name: "discord".to_string(),
    });

    assert_eq!(response.type_name, "discord_channel");
}

/// Tests the declared schema.
///
/// Expected: name and guild_id required, id computed and kept across plans,
/// guild_id forces replacement
#[test]
fn schema_declares_channel_attributes() {
    let schema = ChannelResource::new().schema();

    assert!(schema.attributes["name"].required);
    assert!(schema.attributes["guild_id"].required);
    assert_eq!(
        schema.attributes["guild_id"].plan_modifiers,
        vec![PlanModifier::RequiresReplace]
    );

    let id = &schema.attributes["id"];
    assert!(id.computed);
    assert!(!id.required && !id.optional);
    assert_eq!(id.plan_modifiers, vec![PlanModifier::UseStateForUnknown]);
}

/// Tests configuring before the provider has produced data.
///
/// Expected: No diagnostics, resource stays unconfigured
#[tokio::test]
async fn absent_provider_data_is_ignored() {
    let mut resource = ChannelResource::new();

    let diagnostics = resource.configure(None);
    assert!(diagnostics.is_empty());

    let response = resource
        .read(
            &Context::background(),
            ReadRequest {
                state: snapshot(&ChannelResourceModel::new("general", "123", "456")),
            },
        )
        .await;
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Internal);
}

/// Tests provider data of the wrong type.
///
/// Expected: A single type mismatch error
#[test]
fn rejects_unexpected_provider_data() {
    let mut resource = ChannelResource::new();

    let diagnostics = resource.configure(Some(Arc::new("not a client")));

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::TypeMismatch);
    assert_eq!(diagnostic.summary, "Unexpected Resource Configure Type");
}
