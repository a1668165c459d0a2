//! Monitor types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::schedule::{Cadence, Run, ScheduleBehavior};
use crate::types::common::{Metadata, Timestamp};

/// Server-reported monitor status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MonitorStatus {
    /// Runs on schedule
    Enabled,
    /// Not running
    Disabled,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// A scheduled job keeping a webset up to date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Monitor {
    /// Monitor id
    pub id: String,
    /// Object type (always `monitor`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Current status
    pub status: MonitorStatus,
    /// Webset being monitored
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

/// Request body for `POST /websets/v0/monitors`
///
/// `webset_id`, `cadence` and `behavior` are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CreateMonitorParams {
    /// Webset to monitor
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

impl CreateMonitorParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        self.cadence.as_ref().map_or(Ok(()), Cadence::check)
    }
}

/// Request body for `PATCH /websets/v0/monitors/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMonitorParams {
    /// Enable or disable the monitor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MonitorStatus>,
    /// New schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<Cadence>,
    /// New behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<ScheduleBehavior>,
    /// Replacement metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Query parameters for listing monitors
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListMonitorsParams {
    /// Cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only monitors of this webset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webset_id: Option<String>,
}
