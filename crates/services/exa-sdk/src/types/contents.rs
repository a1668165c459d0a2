//! Types for the Exa `/contents` endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{ContentToggle, ContentsOptions, CostDollars, SearchResult, TextContentsOptions};

/// Request body for `POST /contents`
///
/// Unlike search, content options are sent at the top level of the body.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentsRequest {
    /// URLs (or result ids) to retrieve content for
    pub urls: Vec<String>,

    /// What content to include
    #[serde(flatten)]
    pub content: ContentsOptions,

    /// Filter out results with empty content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_empty_results: Option<bool>,

    /// Number of subpages to crawl per URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subpages: Option<u32>,

    /// Keywords used to pick subpages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subpage_target: Option<Vec<String>>,

    /// Additional top-level fields passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentsRequest {
    /// Create a new contents request for the given URLs
    #[must_use]
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Replace the whole content selection
    #[must_use]
    pub fn with_contents(mut self, contents: ContentsOptions) -> Self {
        self.content = contents;
        self
    }

    /// Request page text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<ContentToggle<TextContentsOptions>>) -> Self {
        self.content.text = Some(text.into());
        self
    }

    /// Drop results whose content came back empty
    #[must_use]
    pub const fn with_filter_empty_results(mut self, filter: bool) -> Self {
        self.filter_empty_results = Some(filter);
        self
    }
}

/// Per-URL retrieval status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentStatus {
    /// URL or id the status refers to
    pub id: String,
    /// `success` or `error`
    pub status: String,
    /// Error details when retrieval failed
    #[serde(default)]
    pub error: Option<Value>,
}

/// Response from `POST /contents`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentsResponse {
    /// Server-assigned request id
    #[serde(default)]
    pub request_id: Option<String>,

    /// Content results
    pub results: Vec<SearchResult>,

    /// Per-URL statuses
    #[serde(default)]
    pub statuses: Option<Vec<ContentStatus>>,

    /// Cost in dollars
    #[serde(default)]
    pub cost_dollars: Option<CostDollars>,
}
