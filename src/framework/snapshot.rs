//! Host-owned plan, state, and configuration snapshots.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    diagnostics::{AttributePath, Diagnostic, Diagnostics, ErrorKind},
    types::StringValue,
};

const CONVERSION_ERROR: &str = "Value Conversion Error";

/// Object-shaped snapshot of attribute values exchanged with the host.
///
/// The same type carries a resource's plan, its prior or new state, and a data source's or
/// provider's configuration. A null snapshot means there is no object at all, e.g. the state
/// of a resource that has not been created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Value);

impl Snapshot {
    /// Snapshot without an object.
    pub fn null() -> Self {
        Self(Value::Null)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Builds a snapshot from a typed model.
    ///
    /// # Returns
    /// - `Ok(Snapshot)` - Snapshot holding the model's attributes
    /// - `Err(Diagnostics)` - The model did not serialize to an object
    pub fn from_model<T: Serialize>(model: &T) -> Result<Self, Diagnostics> {
        let mut snapshot = Self::null();
        let diagnostics = snapshot.set(model);

        if diagnostics.has_error() {
            return Err(diagnostics);
        }

        Ok(snapshot)
    }

    /// Decodes the snapshot into a typed model.
    ///
    /// Attributes missing from the snapshot decode as [`StringValue::Null`] when the model's
    /// fields default.
    ///
    /// # Returns
    /// - `Ok(T)` - The decoded model
    /// - `Err(Diagnostics)` - The snapshot is null or does not match the model
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Diagnostics> {
        if self.is_null() {
            return Err(Diagnostic::new(
                ErrorKind::Conversion,
                CONVERSION_ERROR,
                "Received a null object where attribute values were expected.",
            )
            .into());
        }

        serde_json::from_value(self.0.clone()).map_err(|e| {
            Diagnostic::new(ErrorKind::Conversion, CONVERSION_ERROR, e.to_string()).into()
        })
    }

    /// Replaces the snapshot with the attributes of a typed model.
    ///
    /// The snapshot is left untouched when the model cannot be encoded as an object.
    pub fn set<T: Serialize>(&mut self, model: &T) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        match serde_json::to_value(model) {
            Ok(value @ Value::Object(_)) => self.0 = value,
            Ok(other) => diagnostics.add_error(
                ErrorKind::Conversion,
                CONVERSION_ERROR,
                format!("Expected an object of attributes, got: {other}"),
            ),
            Err(e) => diagnostics.add_error(ErrorKind::Conversion, CONVERSION_ERROR, e.to_string()),
        }

        diagnostics
    }

    /// Reads a single string attribute, treating absent attributes as null.
    ///
    /// # Returns
    /// - `Ok(StringValue)` - The attribute's value
    /// - `Err(Diagnostic)` - The attribute holds something other than a string value
    pub fn attribute(&self, name: &str) -> Result<StringValue, Diagnostic> {
        match self.0.get(name) {
            None => Ok(StringValue::Null),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                Diagnostic::new(ErrorKind::Conversion, CONVERSION_ERROR, e.to_string())
                    .with_attribute(AttributePath::root(name))
            }),
        }
    }

    /// Writes a single string attribute, turning a null snapshot into an object first.
    pub fn set_attribute(&mut self, name: &str, value: StringValue) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        if self.is_null() {
            self.0 = Value::Object(Map::new());
        }

        match (self.0.as_object_mut(), serde_json::to_value(value)) {
            (Some(object), Ok(encoded)) => {
                object.insert(name.to_string(), encoded);
            }
            (None, _) => diagnostics.push(
                Diagnostic::new(
                    ErrorKind::Conversion,
                    CONVERSION_ERROR,
                    "Cannot set an attribute on a non-object snapshot.",
                )
                .with_attribute(AttributePath::root(name)),
            ),
            (_, Err(e)) => diagnostics.push(
                Diagnostic::new(ErrorKind::Conversion, CONVERSION_ERROR, e.to_string())
                    .with_attribute(AttributePath::root(name)),
            ),
        }

        diagnostics
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Snapshot {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
