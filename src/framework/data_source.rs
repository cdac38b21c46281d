//! Data source contract.

use serenity::async_trait;

use super::{
    context::Context,
    diagnostics::Diagnostics,
    provider::ProviderData,
    resource::{MetadataRequest, MetadataResponse},
    schema::Schema,
    snapshot::Snapshot,
};

/// Constructor the provider registers for each data source type.
pub type DataSourceFactory = fn() -> Box<dyn DataSource>;

#[derive(Debug, Clone)]
pub struct ReadDataSourceRequest {
    pub config: Snapshot,
}

#[derive(Debug, Clone, Default)]
pub struct ReadDataSourceResponse {
    pub state: Snapshot,
    pub diagnostics: Diagnostics,
}

/// Read-only lookup handler.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse;

    fn schema(&self) -> Schema;

    /// Receives the provider's data source data. Called with `None` before the provider has
    /// been configured.
    fn configure(&mut self, provider_data: Option<ProviderData>) -> Diagnostics;

    async fn read(&self, ctx: &Context, request: ReadDataSourceRequest) -> ReadDataSourceResponse;
}
