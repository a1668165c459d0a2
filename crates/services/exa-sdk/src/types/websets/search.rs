//! Webset search types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::entity::{Criterion, WebsetEntity};
use super::webset::SourceRef;
use crate::types::common::{Metadata, Timestamp};

/// Server-reported webset search status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WebsetSearchStatus {
    /// Accepted, not yet started
    Created,
    /// Searching
    Running,
    /// Finished
    Completed,
    /// Stopped before finishing
    Canceled,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// How a search's results combine with existing items
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchBehavior {
    /// Replace existing items
    Override,
    /// Add to existing items
    Append,
}

/// Search progress counters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchProgress {
    /// Matching items found so far
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub found: u32,
    /// Candidates analyzed so far
    #[serde(default)]
    pub analyzed: Option<u32>,
    /// Completion percentage
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub completion: f64,
}

/// A search populating a webset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebsetSearch {
    /// Search id
    pub id: String,
    /// Object type (always `webset_search`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Current status
    pub status: WebsetSearchStatus,
    /// Query being searched
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub query: String,
    /// Entity being searched for
    #[serde(default)]
    pub entity: Option<WebsetEntity>,
    /// Criteria items must meet
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub criteria: Vec<Criterion>,
    /// Target number of items
    #[serde(default)]
    pub count: Option<u32>,
    /// Progress counters
    #[serde(default)]
    pub progress: Option<SearchProgress>,
    /// Why the search was canceled
    #[serde(default)]
    pub canceled_reason: Option<String>,
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

/// Request body for creating a webset search
///
/// Also used as the `search` part of a webset creation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(validate = "Self::validate")
)]
pub struct CreateWebsetSearchParams {
    /// Natural-language query
    pub query: String,
    /// Target number of items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Entity to search for; inferred when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<WebsetEntity>,
    /// Criteria items must meet; inferred when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<Criterion>>,
    /// How results combine with existing items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<SearchBehavior>,
    /// Imports or websets whose items are excluded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<SourceRef>>,
    /// Caller metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateWebsetSearchParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.query.as_deref().is_none_or(|q| q.trim().is_empty()) {
            return Err("search query must not be empty".into());
        }
        if let Some(Some(0)) = self.count {
            return Err("search count must be greater than 0".into());
        }
        Ok(())
    }
}

/// Request body for canceling a search
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelSearchParams {
    /// Reason recorded on the search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
