//! Import types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::entity::WebsetEntity;
use crate::poll::{PollState, Pollable};
use crate::types::common::{Metadata, Timestamp};

/// Server-reported import status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    /// Waiting for the upload
    Pending,
    /// Upload received, rows being processed
    Processing,
    /// All rows processed
    Completed,
    /// Processing failed
    Failed,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

impl ImportStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

/// Format of imported data
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImportFormat {
    /// CSV file
    #[default]
    Csv,
    /// Another webset
    Webset,
    /// Format not known to this client
    #[serde(other)]
    Unknown,
}

/// CSV-specific import settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportConfig {
    /// Zero-based column holding the entity identifier (usually a URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<u32>,
}

/// Data loaded into websets from an external file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Import {
    /// Import id
    pub id: String,
    /// Object type (always `import`)
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Current status
    pub status: ImportStatus,
    /// Data format
    #[serde(default)]
    pub format: Option<ImportFormat>,
    /// Entity the rows describe
    #[serde(default)]
    pub entity: Option<WebsetEntity>,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// Number of rows
    #[serde(default)]
    pub count: Option<u64>,
    /// Machine-readable failure reason
    #[serde(default)]
    pub failed_reason: Option<String>,
    /// Human-readable failure message
    #[serde(default)]
    pub failed_message: Option<String>,
    /// When processing failed
    #[serde(default)]
    pub failed_at: Option<Timestamp>,
    /// Pre-signed URL to upload the file to
    #[serde(default)]
    pub upload_url: Option<String>,
    /// Expiry of `upload_url`
    #[serde(default)]
    pub upload_valid_until: Option<Timestamp>,
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

impl Pollable for Import {
    const RESOURCE: &'static str = "import";

    fn poll_id(&self) -> &str {
        &self.id
    }

    fn poll_status(&self) -> String {
        self.status.as_str().to_string()
    }

    fn poll_state(&self) -> PollState {
        match self.status {
            ImportStatus::Completed => PollState::Succeeded,
            ImportStatus::Failed => PollState::Failed(
                self.failed_message
                    .clone()
                    .or_else(|| self.failed_reason.clone())
                    .unwrap_or_else(|| "import failed".to_string()),
            ),
            _ => PollState::Pending,
        }
    }
}

/// Request body for `POST /websets/v0/imports`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(validate = "Self::validate")
)]
pub struct CreateImportParams {
    /// Data format
    pub format: ImportFormat,
    /// File size in bytes
    pub size: u64,
    /// Number of rows
    pub count: u64,
    /// Display title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entity the rows describe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<WebsetEntity>,
    /// CSV settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<CsvImportConfig>,
    /// Caller metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateImportParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.count.unwrap_or(0) == 0 {
            return Err("import count must be greater than 0".into());
        }
        if self.size.unwrap_or(0) == 0 {
            return Err("import size must be greater than 0".into());
        }
        Ok(())
    }
}

/// Request body for `PATCH /websets/v0/imports/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImportParams {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn import(body: serde_json::Value) -> Import {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn failure_prefers_message_over_reason() {
        let imp = import(json!({
            "id": "imp_1",
            "status": "failed",
            "failedReason": "invalid_format",
            "failedMessage": "row 3 has no URL"
        }));
        assert_eq!(imp.poll_state(), PollState::Failed("row 3 has no URL".into()));

        let imp = import(json!({
            "id": "imp_1",
            "status": "failed",
            "failedReason": "invalid_format"
        }));
        assert_eq!(imp.poll_state(), PollState::Failed("invalid_format".into()));
    }

    #[test]
    fn processing_is_pending() {
        let imp = import(json!({ "id": "imp_1", "status": "processing" }));
        assert_eq!(imp.poll_state(), PollState::Pending);
    }

    #[test]
    fn create_validates_count_and_size() {
        let err = CreateImportParamsBuilder::default()
            .size(1024_u64)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("count"));

        let err = CreateImportParamsBuilder::default()
            .count(10_u64)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("size"));

        let ok = CreateImportParamsBuilder::default()
            .count(10_u64)
            .size(1024_u64)
            .entity(WebsetEntity::Company)
            .csv(CsvImportConfig {
                identifier: Some(0),
            })
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(ok).unwrap(),
            json!({
                "format": "csv",
                "size": 1024,
                "count": 10,
                "entity": { "type": "company" },
                "csv": { "identifier": 0 }
            })
        );
    }
}
