//! Types for the Exa `/search` endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{
    Category, ContentToggle, ContentsOptions, ContextContentsOptions, CostDollars,
    HighlightsContentsOptions, LivecrawlOption, SearchResult, SearchType, SummaryContentsOptions,
    TextContentsOptions,
};

/// Request body for `POST /search`
///
/// Content options live flat on the request and are nested under `contents`
/// when sent. Leaving them all unset requests capped text.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// The search query
    pub query: String,

    /// Search type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,

    /// Category filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u32>,

    /// Only return results from these domains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,

    /// Never return results from these domains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,

    /// Crawled on or after this date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_crawl_date: Option<String>,

    /// Crawled on or before this date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_crawl_date: Option<String>,

    /// Published on or after this date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_published_date: Option<String>,

    /// Published on or before this date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_published_date: Option<String>,

    /// Strings that must appear in result text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_text: Option<Vec<String>>,

    /// Strings that must not appear in result text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_text: Option<Vec<String>>,

    /// Two-letter ISO country code of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,

    /// Filter unsafe content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderation: Option<bool>,

    /// Let the server rewrite the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_autoprompt: Option<bool>,

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

impl SearchRequest {
    /// Create a new search request with the given query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Set the number of results
    #[must_use]
    pub const fn with_num_results(mut self, n: u32) -> Self {
        self.num_results = Some(n);
        self
    }

    /// Set the search type
    #[must_use]
    pub const fn with_search_type(mut self, t: SearchType) -> Self {
        self.search_type = Some(t);
        self
    }

    /// Set the category filter
    #[must_use]
    pub const fn with_category(mut self, c: Category) -> Self {
        self.category = Some(c);
        self
    }

    /// Restrict results to these domains
    #[must_use]
    pub fn with_include_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Exclude results from these domains
    #[must_use]
    pub fn with_exclude_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Only include results published on or after `date`
    #[must_use]
    pub fn with_start_published_date(mut self, date: impl Into<String>) -> Self {
        self.start_published_date = Some(date.into());
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

    /// Request a combined context string
    #[must_use]
    pub fn with_context(
        mut self,
        context: impl Into<ContentToggle<ContextContentsOptions>>,
    ) -> Self {
        self.content.context = Some(context.into());
        self
    }

    /// Set the livecrawl policy
    #[must_use]
    pub const fn with_livecrawl(mut self, livecrawl: LivecrawlOption) -> Self {
        self.content.livecrawl = Some(livecrawl);
        self
    }

    /// Pass an arbitrary top-level field through to the API
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Response from `POST /search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Server-assigned request id
    #[serde(default)]
    pub request_id: Option<String>,

    /// Search results
    pub results: Vec<SearchResult>,

    /// Autoprompt rewrite of the query
    #[serde(default)]
    pub autoprompt_string: Option<String>,

    /// Search type the server actually used
    #[serde(default)]
    pub resolved_search_type: Option<String>,

    /// Combined context string (if requested)
    #[serde(default)]
    pub context: Option<String>,

    /// Cost in dollars
    #[serde(default)]
    pub cost_dollars: Option<CostDollars>,
}
