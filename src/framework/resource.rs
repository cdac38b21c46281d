//! Managed resource contract.

use serenity::async_trait;

use super::{
    context::Context, diagnostics::Diagnostics, provider::ProviderData, schema::Schema,
    snapshot::Snapshot,
};

/// Constructor the provider registers for each resource type.
pub type ResourceFactory = fn() -> Box<dyn Resource>;

/// Input of a handler's `metadata` call.
#[derive(Debug, Clone)]
pub struct MetadataRequest {
    pub provider_type_name: String,
}

/// Output of a handler's `metadata` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataResponse {
    /// Full type name, e.g. `discord_channel`.
    pub type_name: String,
}

#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub plan: Snapshot,
}

/// A null `state` tells the host nothing was created.
#[derive(Debug, Clone, Default)]
pub struct CreateResponse {
    pub state: Snapshot,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct ReadRequest {
    /// Prior state tracked by the host.
    pub state: Snapshot,
}

#[derive(Debug, Clone, Default)]
pub struct ReadResponse {
    pub state: Snapshot,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub plan: Snapshot,
    /// Prior state tracked by the host.
    pub state: Snapshot,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateResponse {
    pub state: Snapshot,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub state: Snapshot,
}

/// On success the host drops the resource from its tracked state.
#[derive(Debug, Clone, Default)]
pub struct DeleteResponse {
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct ImportStateRequest {
    /// Identifier supplied by the practitioner on import.
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ImportStateResponse {
    pub state: Snapshot,
    pub diagnostics: Diagnostics,
}

/// Lifecycle handler for one managed resource type.
///
/// Handlers keep no state between calls beyond the provider data received in `configure`;
/// everything else round-trips through the host's snapshots. The host never runs two calls
/// for the same resource instance at once, but calls for different instances may overlap.
#[async_trait]
pub trait Resource: Send + Sync {
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse;

    fn schema(&self) -> Schema;

    /// Receives the provider's resource data. Called with `None` before the provider has
    /// been configured.
    fn configure(&mut self, provider_data: Option<ProviderData>) -> Diagnostics;

    async fn create(&self, ctx: &Context, request: CreateRequest) -> CreateResponse;

    async fn read(&self, ctx: &Context, request: ReadRequest) -> ReadResponse;

    async fn update(&self, ctx: &Context, request: UpdateRequest) -> UpdateResponse;

    async fn delete(&self, ctx: &Context, request: DeleteRequest) -> DeleteResponse;

    async fn import_state(&self, ctx: &Context, request: ImportStateRequest)
        -> ImportStateResponse;
}
