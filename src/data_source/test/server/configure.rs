use super::*;

use std::sync::Arc;

/// Tests the data source type name.
///
/// Expected: "discord_server"
#[test]
fn type_name_uses_provider_prefix() {
    let response = ServerDataSource::new().metadata(&MetadataRequest {
        provider_type_name: "discord".to_string(),
    });

    assert_eq!(response.type_name, "discord_server");
}

/// Tests the declared schema.
///
/// Expected: id required, name and description computed
#[test]
fn schema_declares_server_attributes() {
    let schema = ServerDataSource::new().schema();

    assert!(schema.attributes["id"].required);
    assert!(schema.attributes["name"].computed);
    assert!(schema.attributes["description"].computed);
    assert_eq!(schema.attributes.len(), 3);
}

/// Tests provider data of the wrong type.
///
/// Expected: A single type mismatch error
#[test]
fn rejects_unexpected_provider_data() {
    let mut data_source = ServerDataSource::new();

    let diagnostics = data_source.configure(Some(Arc::new(42_u64)));

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::TypeMismatch);
    assert_eq!(diagnostic.summary, "Unexpected Data Source Configure Type");
}

/// Tests a read before the provider has been configured.
///
/// Expected: Internal error, state left null
#[tokio::test]
async fn unconfigured_read_fails() {
    let mut data_source = ServerDataSource::new();
    assert!(data_source.configure(None).is_empty());

    let response = data_source
        .read(
            &Context::background(),
            ReadDataSourceRequest {
                config: config("123"),
            },
        )
        .await;

    assert!(response.state.is_null());
    let diagnostic = response.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, ErrorKind::Internal);
    assert_eq!(diagnostic.summary, "Unable to get Server");
}
