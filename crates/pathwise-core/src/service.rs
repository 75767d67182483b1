//! Input collection for the assessment services.

use std::collections::HashMap;

use pathwise_types::error::ValidationError;
use pathwise_types::service::ServiceDescriptor;
use serde_json::{Map, Value};

/// Raw inputs of one assessment form, keyed by wire field name.
///
/// A missing key stands for an unanswered radio group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInputs {
    values: HashMap<String, String>,
}

impl ServiceInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ServiceInputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Build the request body from the descriptor's required fields.
///
/// Fails with the form's own message if any required field is missing or
/// empty. Inputs not named by the descriptor are ignored.
pub fn request_body(
    descriptor: &ServiceDescriptor,
    inputs: &ServiceInputs,
) -> Result<Map<String, Value>, ValidationError> {
    let mut body = Map::with_capacity(descriptor.fields.len());
    for field in descriptor.fields {
        match inputs.get(field.name) {
            Some(value) if !value.is_empty() => {
                body.insert(field.name.to_string(), Value::String(value.to_string()));
            }
            _ => return Err(ValidationError::MissingInput(descriptor.missing_input)),
        }
    }
    Ok(body)
}
