//! Types for the Exa `/findSimilar` endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{
    Category, ContentToggle, ContentsOptions, CostDollars, HighlightsContentsOptions, SearchResult,
    SummaryContentsOptions, TextContentsOptions,
};

/// Request body for `POST /findSimilar`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FindSimilarRequest {
    /// URL to find similar pages for
    pub url: String,

    /// Number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u32>,

    /// Exclude results from the same domain as the source URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_source_domain: Option<bool>,

    /// Include domains filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,

    /// Exclude domains filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,

    /// Start date filter (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_published_date: Option<String>,

    /// End date filter (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_published_date: Option<String>,

    /// Category filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Content selection (sent nested under `contents`)
    #[serde(flatten)]
    pub content: ContentsOptions,

    /// `Some(false)` skips content retrieval entirely
    #[serde(rename = "contents", skip_serializing_if = "Option::is_none")]
    pub contents_enabled: Option<bool>,

    /// Additional top-level fields passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FindSimilarRequest {
    /// Create a new find-similar request for the given URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the number of results
    #[must_use]
    pub const fn with_num_results(mut self, n: u32) -> Self {
        self.num_results = Some(n);
        self
    }

    /// Exclude source domain from results
    #[must_use]
    pub const fn with_exclude_source_domain(mut self, exclude: bool) -> Self {
        self.exclude_source_domain = Some(exclude);
        self
    }

    /// Replace the whole content selection
    #[must_use]
    pub fn with_contents(mut self, contents: ContentsOptions) -> Self {
        self.content = contents;
        self
    }

    /// Skip content retrieval (sends no `contents` key)
    #[must_use]
    pub const fn without_contents(mut self) -> Self {
        self.contents_enabled = Some(false);
        self
    }

    /// Request page text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<ContentToggle<TextContentsOptions>>) -> Self {
        self.content.text = Some(text.into());
        self
    }

    /// Request highlights
    #[must_use]
    pub fn with_highlights(
        mut self,
        highlights: impl Into<ContentToggle<HighlightsContentsOptions>>,
    ) -> Self {
        self.content.highlights = Some(highlights.into());
        self
    }

    /// Request summaries
    #[must_use]
    pub fn with_summary(
        mut self,
        summary: impl Into<ContentToggle<SummaryContentsOptions>>,
    ) -> Self {
        self.content.summary = Some(summary.into());
        self
    }

    /// Pass an arbitrary top-level field through to the API
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Response from `POST /findSimilar`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FindSimilarResponse {
    /// Server-assigned request id
    #[serde(default)]
    pub request_id: Option<String>,

    /// Similar page results
    pub results: Vec<SearchResult>,

    /// Combined context string (if requested)
    #[serde(default)]
    pub context: Option<String>,

    /// Cost in dollars
    #[serde(default)]
    pub cost_dollars: Option<CostDollars>,
}
