//! Host runtime contract.
//!
//! The orchestration runtime that loads this plugin drives every lifecycle call; this module
//! declares the surface it talks to. Handlers implement [`Provider`], [`Resource`] or
//! [`DataSource`], receive host-owned [`Snapshot`]s of plan, state, and configuration, and
//! answer with new snapshots plus [`Diagnostics`].
//!
//! Planning, diffing, and the plugin transport belong to the host and are not modelled here.

pub mod context;
pub mod data_source;
pub mod diagnostics;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod snapshot;
pub mod types;

pub use context::Context;
pub use data_source::{
    DataSource, DataSourceFactory, ReadDataSourceRequest, ReadDataSourceResponse,
};
pub use diagnostics::{AttributePath, Diagnostic, Diagnostics, ErrorKind};
pub use provider::{
    Provider, ProviderConfigureRequest, ProviderConfigureResponse, ProviderData, ProviderMetadata,
};
pub use resource::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ImportStateRequest,
    ImportStateResponse, MetadataRequest, MetadataResponse, ReadRequest, ReadResponse, Resource,
    ResourceFactory, UpdateRequest, UpdateResponse,
};
pub use schema::{Attribute, PlanModifier, Schema};
pub use snapshot::Snapshot;
pub use types::StringValue;
