//! Shared types used across Exa API endpoints

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Free-form string metadata attached to server-side resources
pub type Metadata = HashMap<String, String>;

/// Server timestamp (ISO 8601, UTC)
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Reads an explicit `null` as the type's default
///
/// Pair with `#[serde(default)]` so a missing key and a `null` decode alike.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Search type for Exa queries
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Automatic selection (server default)
    #[default]
    Auto,
    /// Neural/semantic search
    Neural,
    /// Keyword-based search
    Keyword,
    /// Hybrid neural + keyword
    Hybrid,
    /// Low-latency search
    Fast,
}

/// Category filter for search-like endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Company homepages and profiles
    Company,
    /// Academic papers
    #[serde(rename = "research paper")]
    ResearchPaper,
    /// News articles
    News,
    /// PDF documents
    Pdf,
    /// GitHub repositories
    Github,
    /// Tweets
    Tweet,
    /// Personal websites
    #[serde(rename = "personal site")]
    PersonalSite,
    /// `LinkedIn` profiles
    #[serde(rename = "linkedin profile")]
    LinkedinProfile,
    /// Financial reports
    #[serde(rename = "financial report")]
    FinancialReport,
}

/// Livecrawl option for content retrieval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LivecrawlOption {
    /// Always livecrawl
    Always,
    /// Livecrawl if needed (fallback)
    Fallback,
    /// Never livecrawl
    Never,
    /// Automatically decide
    Auto,
    /// Prefer livecrawl, fall back to cache on failure
    Preferred,
}

/// A content option that is either a plain on/off switch or a detailed object
///
/// Serializes as `true`/`false` or as the options object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContentToggle<T> {
    /// Enable or disable with server defaults
    Enabled(bool),
    /// Enable with explicit options
    Options(T),
}

impl<T> From<bool> for ContentToggle<T> {
    fn from(on: bool) -> Self {
        Self::Enabled(on)
    }
}

/// Options for text content retrieval
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextContentsOptions {
    /// Maximum number of characters to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,
    /// Include HTML tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_html_tags: Option<bool>,
}

impl TextContentsOptions {
    /// Text capped at `n` characters
    #[must_use]
    pub const fn max_characters(n: u32) -> Self {
        Self {
            max_characters: Some(n),
            include_html_tags: None,
        }
    }
}

impl From<TextContentsOptions> for ContentToggle<TextContentsOptions> {
    fn from(o: TextContentsOptions) -> Self {
        Self::Options(o)
    }
}

/// Options for highlight content retrieval
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightsContentsOptions {
    /// Sentences per highlight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_sentences: Option<u32>,
    /// Number of highlights per result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights_per_url: Option<u32>,
    /// Query for highlights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl From<HighlightsContentsOptions> for ContentToggle<HighlightsContentsOptions> {
    fn from(o: HighlightsContentsOptions) -> Self {
        Self::Options(o)
    }
}

/// Options for summary content retrieval
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryContentsOptions {
    /// Custom query for summary generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// JSON schema the summary should follow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

impl From<SummaryContentsOptions> for ContentToggle<SummaryContentsOptions> {
    fn from(o: SummaryContentsOptions) -> Self {
        Self::Options(o)
    }
}

/// Options for the combined context string
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContextContentsOptions {
    /// Maximum characters in the context string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,
}

impl From<ContextContentsOptions> for ContentToggle<ContextContentsOptions> {
    fn from(o: ContextContentsOptions) -> Self {
        Self::Options(o)
    }
}

/// Content selection carried flat on search-like requests
///
/// When every field is unset, text is requested by default; see
/// [`crate::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentsOptions {
    /// Full text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ContentToggle<TextContentsOptions>>,
    /// Highlights/snippets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<ContentToggle<HighlightsContentsOptions>>,
    /// Summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ContentToggle<SummaryContentsOptions>>,
    /// Combined context string across results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContentToggle<ContextContentsOptions>>,
    /// Livecrawl policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livecrawl: Option<LivecrawlOption>,
    /// Livecrawl timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livecrawl_timeout: Option<u32>,
}

impl ContentsOptions {
    /// Whether no content option is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.highlights.is_none()
            && self.summary.is_none()
            && self.context.is_none()
            && self.livecrawl.is_none()
            && self.livecrawl_timeout.is_none()
    }
}

/// A single search result from the Exa API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// URL of the result
    pub url: String,
    /// Unique ID for the result
    #[serde(default)]
    pub id: Option<String>,
    /// Title of the page
    #[serde(default)]
    pub title: Option<String>,
    /// Relevance score
    #[serde(default)]
    pub score: Option<f64>,
    /// Date the page was published
    #[serde(default)]
    pub published_date: Option<String>,
    /// Author of the page
    #[serde(default)]
    pub author: Option<String>,
    /// Full text content (if requested)
    #[serde(default)]
    pub text: Option<String>,
    /// Summary (if requested)
    #[serde(default)]
    pub summary: Option<String>,
    /// Highlights (if requested)
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
    /// Highlight scores
    #[serde(default)]
    pub highlight_scores: Option<Vec<f64>>,
    /// Representative image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Site favicon URL
    #[serde(default)]
    pub favicon: Option<String>,
    /// Structured entities extracted from the page
    #[serde(default)]
    pub entities: Option<Vec<serde_json::Value>>,
    /// Crawled subpages (if requested)
    #[serde(default)]
    pub subpages: Option<Vec<Self>>,
}

/// Cost breakdown for search.
/// Fields are optional because only non-zero costs are included by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostDollarsSearch {
    /// The cost in dollars for neural search.
    #[serde(default)]
    pub neural: Option<f64>,
    /// The cost in dollars for keyword search.
    #[serde(default)]
    pub keyword: Option<f64>,
}

/// Cost breakdown for contents retrieval.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostDollarsContents {
    /// The cost in dollars for retrieving text.
    #[serde(default)]
    pub text: Option<f64>,
    /// The cost in dollars for retrieving highlights.
    #[serde(default)]
    pub highlights: Option<f64>,
    /// The cost in dollars for retrieving summary.
    #[serde(default)]
    pub summary: Option<f64>,
}

/// Total cost breakdown for a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostDollars {
    /// Total cost
    #[serde(default)]
    pub total: Option<f64>,
    /// Search cost component
    #[serde(default)]
    pub search: Option<CostDollarsSearch>,
    /// Contents cost component
    #[serde(default)]
    pub contents: Option<CostDollarsContents>,
}
