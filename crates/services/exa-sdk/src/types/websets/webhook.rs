//! Webhook types

use std::collections::HashMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::types::common::{Metadata, Timestamp};

/// Kinds of events emitted by the websets API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A webset was created
    #[serde(rename = "webset.created")]
    WebsetCreated,
    /// A webset was deleted
    #[serde(rename = "webset.deleted")]
    WebsetDeleted,
    /// A webset was paused
    #[serde(rename = "webset.paused")]
    WebsetPaused,
    /// A webset became idle
    #[serde(rename = "webset.idle")]
    WebsetIdle,
    /// A webset search was created
    #[serde(rename = "webset.search.created")]
    WebsetSearchCreated,
    /// A webset search was canceled
    #[serde(rename = "webset.search.canceled")]
    WebsetSearchCanceled,
    /// A webset search completed
    #[serde(rename = "webset.search.completed")]
    WebsetSearchCompleted,
    /// A webset search made progress
    #[serde(rename = "webset.search.updated")]
    WebsetSearchUpdated,
    /// An item was added to a webset
    #[serde(rename = "webset.item.created")]
    WebsetItemCreated,
    /// An item received enrichment results
    #[serde(rename = "webset.item.enriched")]
    WebsetItemEnriched,
    /// An import was created
    #[serde(rename = "import.created")]
    ImportCreated,
    /// An import completed
    #[serde(rename = "import.completed")]
    ImportCompleted,
    /// An import started processing
    #[serde(rename = "import.processing")]
    ImportProcessing,
    /// A monitor was created
    #[serde(rename = "monitor.created")]
    MonitorCreated,
    /// A monitor was updated
    #[serde(rename = "monitor.updated")]
    MonitorUpdated,
    /// A monitor was deleted
    #[serde(rename = "monitor.deleted")]
    MonitorDeleted,
    /// A monitor run was created
    #[serde(rename = "monitor.run.created")]
    MonitorRunCreated,
    /// A monitor run completed
    #[serde(rename = "monitor.run.completed")]
    MonitorRunCompleted,
    /// Event type not known to this client
    #[serde(other)]
    Unknown,
}

/// Server-reported webhook status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WebhookStatus {
    /// Receiving deliveries
    Active,
    /// Deliveries suspended
    Inactive,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// A URL receiving event deliveries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook id
    pub id: String,
    /// Object type (always `webhook`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Current status
    pub status: WebhookStatus,
    /// Subscribed event types
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub events: Vec<EventType>,
    /// Delivery URL
    pub url: String,
    /// Signing secret; only returned on creation
    #[serde(default)]
    pub secret: Option<String>,
    /// Caller metadata
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Request body for `POST /websets/v0/webhooks`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(validate = "Self::validate")
)]
pub struct CreateWebhookParams {
    /// Event types to deliver
    #[builder(setter(each(name = "event")))]
    pub events: Vec<EventType>,
    /// Delivery URL
    pub url: String,
    /// Caller metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateWebhookParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.events.as_ref().is_none_or(Vec::is_empty) {
            return Err("a webhook needs at least one event type".into());
        }
        if self.url.as_deref().is_none_or(|u| u.trim().is_empty()) {
            return Err("webhook url must not be empty".into());
        }
        Ok(())
    }
}

/// Request body for `PATCH /websets/v0/webhooks/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookParams {
    /// Replacement event types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventType>>,
    /// New delivery URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Replacement metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// One delivery attempt of an event to a webhook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAttempt {
    /// Attempt id
    pub id: String,
    /// Object type (always `webhook_attempt`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Event being delivered
    pub event_id: String,
    /// Type of the event
    pub event_type: EventType,
    /// Target webhook
    pub webhook_id: String,
    /// URL the event was sent to
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub url: String,
    /// Whether the receiver answered with a 2xx
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub successful: bool,
    /// Response headers
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub response_headers: HashMap<String, String>,
    /// Response body
    #[serde(default)]
    pub response_body: Option<String>,
    /// Response status code
    #[serde(default)]
    pub response_status_code: Option<u16>,
    /// Attempt number, starting at 1
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub attempt: u32,
    /// When the attempt was made
    #[serde(default)]
    pub attempted_at: Option<Timestamp>,
}

/// Query parameters for listing webhook attempts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListAttemptsParams {
    /// Cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only attempts for this event type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    /// Only successful or only failed attempts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful: Option<bool>,
}
