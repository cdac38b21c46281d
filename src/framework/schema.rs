//! Static schema declarations for providers, resources, and data sources.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    diagnostics::{AttributePath, Diagnostics, ErrorKind},
    snapshot::Snapshot,
};

/// Value type of an attribute. All attributes of this provider are strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
}

/// Planning behavior the host applies to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanModifier {
    /// Keep the prior state value when the plan leaves the attribute unknown.
    UseStateForUnknown,
    /// Changing the attribute destroys and recreates the resource.
    RequiresReplace,
}

/// Declaration of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

impl Attribute {
    fn string() -> Self {
        Self {
            attribute_type: AttributeType::String,
            description: String::new(),
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            plan_modifiers: Vec::new(),
        }
    }

    /// String the practitioner must set.
    pub fn required_string() -> Self {
        Self {
            required: true,
            ..Self::string()
        }
    }

    /// String the practitioner may set.
    pub fn optional_string() -> Self {
        Self {
            optional: true,
            ..Self::string()
        }
    }

    /// String set only by the provider.
    pub fn computed_string() -> Self {
        Self {
            computed: true,
            ..Self::string()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Hides the value from host output and logs.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn plan_modifier(mut self, modifier: PlanModifier) -> Self {
        self.plan_modifiers.push(modifier);
        self
    }

    /// Computed-only attributes cannot be set in configuration.
    fn is_computed_only(&self) -> bool {
        self.computed && !self.required && !self.optional
    }
}

/// Attribute set of a provider, resource, or data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute declaration.
    pub fn attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Validates declared configuration against the schema.
    ///
    /// Unknown values pass, since they are resolved later during apply. Null configuration
    /// is treated as an empty object.
    ///
    /// # Returns
    /// - Empty `Diagnostics` - Configuration is acceptable
    /// - One error per required attribute left null, computed-only attribute that was set,
    ///   undeclared attribute, or attribute value that is not a string
    pub fn validate_config(&self, config: &Snapshot) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        if let Some(object) = config.as_value().as_object() {
            for name in object.keys().filter(|name| !self.attributes.contains_key(*name)) {
                diagnostics.add_attribute_error(
                    AttributePath::root(name.as_str()),
                    ErrorKind::Conversion,
                    "Unsupported argument",
                    format!("An argument named \"{name}\" is not expected here."),
                );
            }
        }

        for (name, attribute) in &self.attributes {
            let value = match config.attribute(name) {
                Ok(value) => value,
                Err(diagnostic) => {
                    diagnostics.push(diagnostic);
                    continue;
                }
            };

            if attribute.required && value.is_null() {
                diagnostics.add_attribute_error(
                    AttributePath::root(name.as_str()),
                    ErrorKind::Configuration,
                    "Missing required argument",
                    format!("The argument \"{name}\" is required, but no definition was found."),
                );
            } else if attribute.is_computed_only() && !value.is_null() {
                diagnostics.add_attribute_error(
                    AttributePath::root(name.as_str()),
                    ErrorKind::Configuration,
                    "Invalid configuration for read-only attribute",
                    format!("Cannot set value for attribute \"{name}\", it is computed."),
                );
            }
        }

        diagnostics
    }
}
