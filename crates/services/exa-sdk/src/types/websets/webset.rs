//! Webset resource types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::enrichment::{CreateEnrichmentParams, EnrichmentFormat, WebsetEnrichment};
use super::entity::{Criterion, WebsetEntity};
use super::import::Import;
use super::item::WebsetItem;
use super::monitor::Monitor;
use super::search::{CreateWebsetSearchParams, WebsetSearch};
use crate::poll::{PollState, Pollable};
use crate::types::common::{Metadata, Timestamp};

/// Server-reported webset status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WebsetStatus {
    /// Nothing is running
    Idle,
    /// Work is queued
    Pending,
    /// Searches or enrichments are running
    Running,
    /// Processing was paused
    Paused,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

impl WebsetStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Unknown => "unknown",
        }
    }
}

/// A collection of verified web entities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Webset {
    /// Webset id
    pub id: String,
    /// Object type (always `webset`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Current status
    pub status: WebsetStatus,
    /// Caller-supplied external id
    #[serde(default)]
    pub external_id: Option<String>,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// Searches run against this webset
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub searches: Vec<WebsetSearch>,
    /// Imports feeding this webset
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub imports: Vec<Import>,
    /// Enrichments configured on this webset
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub enrichments: Vec<WebsetEnrichment>,
    /// Monitors attached to this webset
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub monitors: Vec<Monitor>,
    /// Caller metadata
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Items, present only when expanded
    #[serde(default)]
    pub items: Option<Vec<WebsetItem>>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Pollable for Webset {
    const RESOURCE: &'static str = "webset";

    fn poll_id(&self) -> &str {
        &self.id
    }

    fn poll_status(&self) -> String {
        self.status.as_str().to_string()
    }

    // A webset has no failure state; paused websets keep polling.
    fn poll_state(&self) -> PollState {
        match self.status {
            WebsetStatus::Idle => PollState::Succeeded,
            _ => PollState::Pending,
        }
    }
}

/// Kind of resource referenced by a [`SourceRef`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// An import
    Import,
    /// Another webset
    Webset,
}

/// Reference to an import or webset used as a source or exclusion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceRef {
    /// Kind of the referenced resource
    pub source: SourceKind,
    /// Id of the referenced resource
    pub id: String,
}

impl SourceRef {
    /// Reference to an import
    #[must_use]
    pub fn import(id: impl Into<String>) -> Self {
        Self {
            source: SourceKind::Import,
            id: id.into(),
        }
    }

    /// Reference to a webset
    #[must_use]
    pub fn webset(id: impl Into<String>) -> Self {
        Self {
            source: SourceKind::Webset,
            id: id.into(),
        }
    }
}

/// Request body for `POST /websets/v0/websets`
///
/// At least one of `search` or `import` must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(validate = "Self::validate")
)]
pub struct CreateWebsetParams {
    /// Initial search populating the webset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<CreateWebsetSearchParams>,
    /// Imports or websets to seed items from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<Vec<SourceRef>>,
    /// Enrichments to create alongside the webset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<CreateEnrichmentParams>>,
    /// Caller-supplied external id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Caller metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateWebsetParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        let has_search = matches!(self.search, Some(Some(_)));
        let has_import = matches!(&self.import, Some(Some(sources)) if !sources.is_empty());
        if has_search || has_import {
            Ok(())
        } else {
            Err("a webset needs a search or an import source".into())
        }
    }
}

/// Request body for `POST /websets/v0/websets/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsetParams {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New external id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Replacement metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Search part of a preview request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSearch {
    /// Natural-language query
    pub query: String,
    /// Target number of items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Entity override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<WebsetEntity>,
    /// Criteria override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<Criterion>>,
}

/// Request body for `POST /websets/v0/websets/preview`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreviewWebsetParams {
    /// Search to preview
    pub search: PreviewSearch,
}

impl PreviewWebsetParams {
    /// Preview for the given query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            search: PreviewSearch {
                query: query.into(),
                ..PreviewSearch::default()
            },
        }
    }
}

/// How the server would interpret a search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSearchResult {
    /// Detected entity
    pub entity: WebsetEntity,
    /// Generated criteria
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub criteria: Vec<Criterion>,
}

/// Enrichment the server suggests for a previewed query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedEnrichment {
    /// What the enrichment extracts
    pub description: String,
    /// Result format
    #[serde(default)]
    pub format: Option<EnrichmentFormat>,
}

/// Response from `POST /websets/v0/websets/preview`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewWebsetResponse {
    /// Interpreted search
    pub search: PreviewSearchResult,
    /// Suggested enrichments
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub enrichments: Vec<SuggestedEnrichment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_requires_search_or_import() {
        let err = CreateWebsetParamsBuilder::default()
            .title("empty")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("search or an import"));

        let ok = CreateWebsetParamsBuilder::default()
            .import(vec![SourceRef::import("imp_1")])
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(ok).unwrap(),
            json!({ "import": [{ "source": "import", "id": "imp_1" }] })
        );
    }

    #[test]
    fn empty_import_list_does_not_count() {
        assert!(
            CreateWebsetParamsBuilder::default()
                .import(Vec::<SourceRef>::new())
                .build()
                .is_err()
        );
    }

    #[test]
    fn paused_webset_is_not_terminal() {
        let ws: Webset = serde_json::from_value(json!({
            "id": "ws_1",
            "object": "webset",
            "status": "paused"
        }))
        .unwrap();
        assert_eq!(ws.poll_state(), PollState::Pending);
        assert_eq!(ws.poll_status(), "paused");
        assert!(ws.searches.is_empty());
    }

    #[test]
    fn unknown_status_parses() {
        let ws: Webset =
            serde_json::from_value(json!({ "id": "ws_1", "status": "archived" })).unwrap();
        assert_eq!(ws.status, WebsetStatus::Unknown);
        assert_eq!(ws.poll_state(), PollState::Pending);
    }

    #[test]
    fn null_collections_decode_as_empty() {
        let ws: Webset = serde_json::from_value(json!({
            "id": "ws_1",
            "object": null,
            "status": "running",
            "searches": [{ "id": "s_1", "status": "running", "query": null, "criteria": null }],
            "imports": null,
            "enrichments": null,
            "monitors": null
        }))
        .unwrap();
        assert!(ws.imports.is_empty());
        assert!(ws.enrichments.is_empty());
        assert!(ws.monitors.is_empty());
        assert!(ws.searches[0].criteria.is_empty());
        assert_eq!(ws.searches[0].query, "");
    }
}
