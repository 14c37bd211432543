use std::collections::HashMap;

use serde_json::{Map, Value};

use super::error::ToolError;

/// String parameters supplied with one operation invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBag(HashMap<String, String>);

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value of a required parameter.
    ///
    /// Absent and blank values are both rejected; there is no default fill.
    pub fn require(&self, key: &str) -> Result<&str, ToolError> {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ToolError::MissingParameter(key.to_string())),
        }
    }

    /// Builds a bag from a JSON object.
    ///
    /// Strings are kept, numbers and booleans become their JSON text and
    /// `null` counts as absent. Arrays and objects are rejected.
    pub fn from_json_map(map: &Map<String, Value>) -> Result<Self, ToolError> {
        let mut bag = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => bag.insert(key.as_str(), s.as_str()),
                Value::Number(n) => bag.insert(key.as_str(), n.to_string()),
                Value::Bool(b) => bag.insert(key.as_str(), b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ToolError::InvalidParameter(key.clone()));
                }
            }
        }
        Ok(bag)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
