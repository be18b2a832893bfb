//! Allow-listed service binding records.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::env::errors::EnvError;
use crate::value::scalar_to_string;

/// A bound backing service as exposed to the application.
///
/// Only these fields are copied from a provider's binding object; everything
/// else is dropped. Values are copied verbatim. Absent and `null` fields are
/// `None` and are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// Grouping key of `VCAP_SERVICES`, so it must have a text form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_option: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_drain_url: Option<Value>,
}

impl ServiceBinding {
    /// Build a binding from a provider-supplied object.
    ///
    /// `index` is the binding's position in the request and only feeds error messages.
    pub fn from_raw(raw: &Map<String, Value>, index: usize) -> Result<Self, EnvError> {
        let copy = |key: &str| present(raw, key).cloned();

        let label = present(raw, "label")
            .map(scalar_to_string)
            .transpose()
            .map_err(|kind| EnvError::UnsupportedValueType {
                name: format!("services[{}].label", index),
                kind,
            })?;

        Ok(Self {
            name: copy("name"),
            label,
            tags: copy("tags"),
            plan: copy("plan"),
            plan_option: copy("plan_option"),
            credentials: copy("credentials"),
            syslog_drain_url: copy("syslog_drain_url"),
        })
    }

    /// The credentials `uri`, if it is a string.
    pub fn credentials_uri(&self) -> Option<&str> {
        self.credentials.as_ref()?.get("uri")?.as_str()
    }
}

fn present<'a>(raw: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|value| !value.is_null())
}
