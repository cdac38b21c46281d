//! In-process host.
//!
//! Instantiates a provider's handlers by type name and wires the provider's configured data
//! into each of them, the way the orchestration runtime does after loading the plugin. Used
//! by the CLI and by tests that exercise the full configure-then-call flow.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::framework::{
    DataSource, Diagnostics, ErrorKind, MetadataRequest, Provider, ProviderConfigureRequest,
    ProviderMetadata, Resource, Schema, Snapshot,
};

/// Schemas of a provider and everything it registers.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSchemas {
    pub provider: Schema,
    pub resource_schemas: BTreeMap<String, Schema>,
    pub data_source_schemas: BTreeMap<String, Schema>,
}

/// A provider together with its instantiated resources and data sources.
pub struct ProviderHost {
    provider: Box<dyn Provider>,
    metadata: ProviderMetadata,
    resources: BTreeMap<String, Box<dyn Resource>>,
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl ProviderHost {
    /// Instantiates every resource and data source the provider registers.
    ///
    /// # Arguments
    /// - `provider` - The provider root to host
    ///
    /// # Returns
    /// - `Ok(ProviderHost)` - All handlers instantiated under unique type names
    /// - `Err(Diagnostics)` - Two handlers of the same kind report the same type name
    pub fn new<P: Provider + 'static>(provider: P) -> Result<Self, Diagnostics> {
        let metadata = provider.metadata();
        let request = MetadataRequest {
            provider_type_name: metadata.type_name.clone(),
        };
        let mut diagnostics = Diagnostics::new();

        let mut resources = BTreeMap::new();
        for factory in provider.resources() {
            let resource = factory();
            let type_name = resource.metadata(&request).type_name;
            if resources.insert(type_name.clone(), resource).is_some() {
                diagnostics.add_error(
                    ErrorKind::Internal,
                    "Duplicate resource type",
                    format!("The resource type name \"{type_name}\" is registered more than once."),
                );
            }
        }

        let mut data_sources = BTreeMap::new();
        for factory in provider.data_sources() {
            let data_source = factory();
            let type_name = data_source.metadata(&request).type_name;
            if data_sources.insert(type_name.clone(), data_source).is_some() {
                diagnostics.add_error(
                    ErrorKind::Internal,
                    "Duplicate data source type",
                    format!(
                        "The data source type name \"{type_name}\" is registered more than once."
                    ),
                );
            }
        }

        if diagnostics.has_error() {
            return Err(diagnostics);
        }

        tracing::debug!(
            "Hosting provider {} {} with {} resources and {} data sources",
            metadata.type_name,
            metadata.version,
            resources.len(),
            data_sources.len()
        );

        Ok(Self {
            provider: Box::new(provider),
            metadata,
            resources,
            data_sources,
        })
    }

    pub fn metadata(&self) -> &ProviderMetadata {
        &self.metadata
    }

    /// Configures the provider and hands its data to every handler.
    ///
    /// The configuration is validated against the provider schema first; handlers are only
    /// configured when the provider reported no errors.
    pub fn configure(&mut self, config: Snapshot) -> Diagnostics {
        let mut diagnostics = self.provider.schema().validate_config(&config);
        if diagnostics.has_error() {
            return diagnostics;
        }

        let response = self
            .provider
            .configure(ProviderConfigureRequest { config });
        diagnostics.append(response.diagnostics);
        if diagnostics.has_error() {
            return diagnostics;
        }

        for resource in self.resources.values_mut() {
            diagnostics.append(resource.configure(response.resource_data.clone()));
        }

        for data_source in self.data_sources.values_mut() {
            diagnostics.append(data_source.configure(response.data_source_data.clone()));
        }

        diagnostics
    }

    pub fn resource(&self, type_name: &str) -> Option<&dyn Resource> {
        self.resources.get(type_name).map(|resource| resource.as_ref())
    }

    pub fn data_source(&self, type_name: &str) -> Option<&dyn DataSource> {
        self.data_sources
            .get(type_name)
            .map(|data_source| data_source.as_ref())
    }

    pub fn schemas(&self) -> ProviderSchemas {
        ProviderSchemas {
            provider: self.provider.schema(),
            resource_schemas: self
                .resources
                .iter()
                .map(|(name, resource)| (name.clone(), resource.schema()))
                .collect(),
            data_source_schemas: self
                .data_sources
                .iter()
                .map(|(name, data_source)| (name.clone(), data_source.schema()))
                .collect(),
        }
    }
}
