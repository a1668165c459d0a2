//! Webset item types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enrichment::{EnrichmentFormat, EnrichmentStatus};
use crate::types::common::Timestamp;

/// Where an item came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource {
    /// Found by a webset search
    Search,
    /// Loaded by an import
    Import,
    /// Source not known to this client
    #[serde(other)]
    Unknown,
}

/// Entity properties of an item
///
/// Entity-specific objects (`company`, `person`, `article`, ...) are kept in
/// `details` as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemProperties {
    /// Entity type
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Canonical URL
    #[serde(default)]
    pub url: Option<String>,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Page content
    #[serde(default)]
    pub content: Option<String>,
    /// Entity-specific fields
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Whether an item met a criterion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Satisfied {
    /// Criterion met
    Yes,
    /// Criterion not met
    No,
    /// Not enough evidence
    Unclear,
    /// Value not known to this client
    #[serde(other)]
    Unknown,
}

/// A source backing an evaluation or enrichment result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Source URL
    pub url: String,
    /// Source title
    #[serde(default)]
    pub title: Option<String>,
    /// Relevant snippet
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Outcome of checking one criterion against an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Criterion text
    pub criterion: String,
    /// Model reasoning
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub reasoning: String,
    /// Verdict
    pub satisfied: Satisfied,
    /// Supporting sources
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub references: Vec<Reference>,
}

/// Value an enrichment produced for an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    /// Enrichment that produced this result
    pub enrichment_id: String,
    /// Enrichment status for this item
    #[serde(default)]
    pub status: Option<EnrichmentStatus>,
    /// Result format
    #[serde(default)]
    pub format: Option<EnrichmentFormat>,
    /// Extracted values
    #[serde(default)]
    pub result: Option<Vec<String>>,
    /// Model reasoning
    #[serde(default)]
    pub reasoning: Option<String>,
    /// Supporting sources
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub references: Vec<Reference>,
}

/// An entity in a webset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebsetItem {
    /// Item id
    pub id: String,
    /// Object type (always `webset_item`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Kind of source that produced the item
    pub source: ItemSource,
    /// Id of the search or import that produced the item
    pub source_id: String,
    /// Owning webset
    pub webset_id: String,
    /// Entity properties
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub properties: ItemProperties,
    /// Criteria evaluations
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub evaluations: Vec<Evaluation>,
    /// Enrichment results
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub enrichments: Vec<EnrichmentResult>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Query parameters for listing items
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsParams {
    /// Cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only items produced by this search or import
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}
