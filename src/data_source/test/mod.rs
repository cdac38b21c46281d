use std::time::Duration;

use discord_api::GuildId;
use test_utils::{
    builder::TestBuilder, context::TestContext, error::TestError, factory, mock::MockCall,
};

use crate::{
    data_source::server::ServerDataSource,
    framework::{
        AttributePath, Context, DataSource, ErrorKind, MetadataRequest, ReadDataSourceRequest,
        Snapshot, StringValue,
    },
    model::ServerDataSourceModel,
};

mod server;

/// Server data source configured with the test context's mock client.
fn configured_data_source(test: &TestContext) -> ServerDataSource {
    let mut data_source = ServerDataSource::new();
    let diagnostics = data_source.configure(Some(test.provider_data()));
    assert!(diagnostics.is_empty());
    data_source
}

/// Configuration declaring only the server ID.
fn config(id: &str) -> Snapshot {
    Snapshot::from_model(&ServerDataSourceModel {
        id: StringValue::known(id),
        ..Default::default()
    })
    .unwrap()
}
