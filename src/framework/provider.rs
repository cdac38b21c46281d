//! Provider root contract.

use std::any::Any;
use std::sync::Arc;

use super::{
    data_source::DataSourceFactory, diagnostics::Diagnostics, resource::ResourceFactory,
    schema::Schema, snapshot::Snapshot,
};

/// Opaque data a provider hands to its resources and data sources after configuration.
///
/// The host does not know its type; handlers check for the type they expect.
pub type ProviderData = Arc<dyn Any + Send + Sync>;

/// Provider type name and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    /// Prefix for every resource and data source type name, e.g. `discord`.
    pub type_name: String,
    pub version: String,
}

/// Provider configuration as declared by the practitioner.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfigureRequest {
    pub config: Snapshot,
}

/// Result of configuring a provider.
#[derive(Default)]
pub struct ProviderConfigureResponse {
    /// Passed to every resource's `configure`.
    pub resource_data: Option<ProviderData>,
    /// Passed to every data source's `configure`.
    pub data_source_data: Option<ProviderData>,
    pub diagnostics: Diagnostics,
}

/// Process-wide provider root.
///
/// The host calls `configure` once at startup, then instantiates the registered resources and
/// data sources and hands them the configured data.
pub trait Provider: Send + Sync {
    fn metadata(&self) -> ProviderMetadata;

    fn schema(&self) -> Schema;

    fn configure(&self, request: ProviderConfigureRequest) -> ProviderConfigureResponse;

    /// Constructors for every resource type the provider offers.
    fn resources(&self) -> Vec<ResourceFactory>;

    /// Constructors for every data source type the provider offers.
    fn data_sources(&self) -> Vec<DataSourceFactory>;
}
