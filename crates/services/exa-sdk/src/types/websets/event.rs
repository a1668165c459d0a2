//! Event types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::webhook::EventType;
use crate::types::common::Timestamp;

/// Something that happened to a websets resource
///
/// `data` holds the affected resource as raw JSON; decode it with
/// [`Event::data_as`] once `event_type` is known.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event id
    pub id: String,
    /// Object type (always `event`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Event type
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Affected resource
    #[serde(default)]
    pub data: Value,
    /// When the event happened
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Event {
    /// Decodes `data` into a typed resource
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExaError::Serde`] if `data` does not match `T`.
    pub fn data_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::ExaError> {
        T::deserialize(&self.data).map_err(|e| crate::ExaError::Serde(e.to_string()))
    }
}
