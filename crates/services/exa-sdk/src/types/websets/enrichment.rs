//! Webset enrichment types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::types::common::{Metadata, Timestamp};

/// Server-reported enrichment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
    /// Still running over items
    Pending,
    /// Stopped before finishing
    Canceled,
    /// Finished
    Completed,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// Shape of the value an enrichment extracts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentFormat {
    /// Free text
    #[default]
    Text,
    /// A date
    Date,
    /// A number
    Number,
    /// One of a fixed set of labels
    Options,
    /// An email address
    Email,
    /// A phone number
    Phone,
    /// A URL
    Url,
    /// Format not known to this client
    #[serde(other)]
    Unknown,
}

/// One allowed label for an `options` enrichment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichmentOption {
    /// Label text
    pub label: String,
}

impl From<&str> for EnrichmentOption {
    fn from(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

/// An enrichment extracting extra data for every item of a webset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebsetEnrichment {
    /// Enrichment id
    pub id: String,
    /// Object type (always `webset_enrichment`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Current status
    pub status: EnrichmentStatus,
    /// Owning webset
    pub webset_id: String,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// What the enrichment extracts
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub description: String,
    /// Result format
    #[serde(default)]
    pub format: Option<EnrichmentFormat>,
    /// Allowed labels for `options` enrichments
    #[serde(default)]
    pub options: Option<Vec<EnrichmentOption>>,
    /// Instructions generated by the server
    #[serde(default)]
    pub instructions: Option<String>,
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

/// Request body for creating an enrichment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(validate = "Self::validate")
)]
pub struct CreateEnrichmentParams {
    /// What to extract
    pub description: String,
    /// Result format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<EnrichmentFormat>,
    /// Allowed labels; required for the `options` format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<EnrichmentOption>>,
    /// Caller metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateEnrichmentParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self
            .description
            .as_deref()
            .is_none_or(|d| d.trim().is_empty())
        {
            return Err("enrichment description must not be empty".into());
        }
        if let Some(Some(EnrichmentFormat::Options)) = self.format {
            let has_options = matches!(&self.options, Some(Some(opts)) if !opts.is_empty());
            if !has_options {
                return Err("the options format needs at least one option".into());
            }
        }
        Ok(())
    }
}

/// Request body for `PATCH /websets/v0/websets/{id}/enrichments/{enrichment}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnrichmentParams {
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<EnrichmentFormat>,
    /// New labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<EnrichmentOption>>,
    /// Replacement metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_format_needs_options() {
        let err = CreateEnrichmentParamsBuilder::default()
            .description("Company stage")
            .format(EnrichmentFormat::Options)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("at least one option"));

        let ok = CreateEnrichmentParamsBuilder::default()
            .description("Company stage")
            .format(EnrichmentFormat::Options)
            .options(vec![EnrichmentOption::from("seed"), EnrichmentOption::from("series a")])
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(ok).unwrap(),
            json!({
                "description": "Company stage",
                "format": "options",
                "options": [{ "label": "seed" }, { "label": "series a" }]
            })
        );
    }

    #[test]
    fn description_is_required() {
        assert!(CreateEnrichmentParamsBuilder::default().build().is_err());
    }
}
