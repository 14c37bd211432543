//! Capability manifest served by the discovery endpoint
//!
//! The manifest is computed once from the operation descriptors and then
//! served unchanged for the lifetime of the process.

use once_cell::sync::Lazy;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use strum::IntoEnumIterator;

use super::registry::Operation;

pub const SERVICE_NAME: &str = "GitHub Assistant";
pub const SERVICE_DESCRIPTION: &str = "Interact with GitHub repositories, issues, and PRs";

static MANIFEST: Lazy<DiscoveryManifest> = Lazy::new(|| DiscoveryManifest {
    name: SERVICE_NAME,
    description: SERVICE_DESCRIPTION,
    endpoints: Operation::iter().map(Operation::descriptor).collect(),
});

/// Returns the static capability manifest
pub fn describe() -> &'static DiscoveryManifest {
    &MANIFEST
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryManifest {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<OperationDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub param_type: &'static str,
    pub description: &'static str,
    pub required: bool,
}

impl ParameterDescriptor {
    pub fn required_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            param_type: "string",
            description,
            required: true,
        }
    }
}

/// Name, description and ordered parameter list of one operation.
///
/// Serialized with the parameters rendered as a JSON-Schema-like object:
/// `{"type": "object", "properties": {...}, "required": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub operation: Operation,
    pub description: &'static str,
    pub parameters: Vec<ParameterDescriptor>,
}

impl Serialize for OperationDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OperationDescriptor", 3)?;
        state.serialize_field("name", self.operation.as_ref())?;
        state.serialize_field("description", self.description)?;
        state.serialize_field("parameters", &ParameterSchema(&self.parameters))?;
        state.end()
    }
}

struct ParameterSchema<'a>(&'a [ParameterDescriptor]);

impl Serialize for ParameterSchema<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let required: Vec<&str> = self
            .0
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name)
            .collect();

        let mut state = serializer.serialize_struct("ParameterSchema", 3)?;
        state.serialize_field("type", "object")?;
        state.serialize_field("properties", &ParameterProperties(self.0))?;
        state.serialize_field("required", &required)?;
        state.end()
    }
}

struct ParameterProperties<'a>(&'a [ParameterDescriptor]);

#[derive(Serialize)]
struct PropertySchema {
    #[serde(rename = "type")]
    param_type: &'static str,
    description: &'static str,
}

impl Serialize for ParameterProperties<'_> {
    // Declaration order is preserved on the wire
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|param| {
            (
                param.name,
                PropertySchema {
                    param_type: param.param_type,
                    description: param.description,
                },
            )
        }))
    }
}
