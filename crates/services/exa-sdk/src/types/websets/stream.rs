//! Stream types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::schedule::{Cadence, Run, ScheduleBehavior};
use crate::types::common::{Metadata, Timestamp};

/// Server-reported stream status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StreamStatus {
    /// Runs on schedule
    Enabled,
    /// Permanently stopped
    Closed,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// A scheduled feed of new items into a webset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebsetStream {
    /// Stream id
    pub id: String,
    /// Object type (always `stream`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Current status
    pub status: StreamStatus,
    /// Webset the stream feeds
    pub webset_id: String,
    /// Schedule
    pub cadence: Cadence,
    /// What each run does
    pub behavior: ScheduleBehavior,
    /// Most recent run
    #[serde(default)]
    pub last_run: Option<Run>,
    /// Next scheduled run
    #[serde(default)]
    pub next_run_at: Option<Timestamp>,
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

/// Request body for `POST /websets/v0/streams`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CreateStreamParams {
    /// Webset to feed
    pub webset_id: String,
    /// Schedule
    pub cadence: Cadence,
    /// What each run does
    pub behavior: ScheduleBehavior,
    /// Caller metadata
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateStreamParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        self.cadence.as_ref().map_or(Ok(()), Cadence::check)
    }
}

/// Request body for `PATCH /websets/v0/streams/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStreamParams {
    /// Close the stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StreamStatus>,
    /// New schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<Cadence>,
    /// Replacement metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Query parameters for listing streams
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListStreamsParams {
    /// Cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only streams of this webset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webset_id: Option<String>,
}
