//! Scheduling types shared by monitors and streams

use serde::{Deserialize, Serialize};

use super::entity::{Criterion, WebsetEntity};
use super::search::SearchBehavior;
use crate::types::common::Timestamp;

/// When a scheduled job runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cadence {
    /// Five-field cron expression
    pub cron: String,
    /// IANA timezone the expression is evaluated in (UTC when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Cadence {
    /// Cadence from a cron expression
    #[must_use]
    pub fn cron(expr: impl Into<String>) -> Self {
        Self {
            cron: expr.into(),
            timezone: None,
        }
    }

    /// Sets the timezone
    #[must_use]
    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Checks that the expression has five whitespace-separated fields
    pub(crate) fn check(&self) -> Result<(), String> {
        let fields = self.cron.split_whitespace().count();
        if fields == 5 {
            Ok(())
        } else {
            Err(format!(
                "cron expression must have 5 fields, got {fields}: {:?}",
                self.cron
            ))
        }
    }
}

/// Settings for a scheduled search
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSearchConfig {
    /// Query to run; defaults to the webset's last search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Criteria to apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<Criterion>>,
    /// Entity to search for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<WebsetEntity>,
    /// Items to find per run
    pub count: u32,
    /// How results combine with existing items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<SearchBehavior>,
}

/// What a refresh run updates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefreshTarget {
    /// Re-run enrichments
    Enrichments,
    /// Re-crawl item contents
    Contents,
    /// Target not known to this client
    #[serde(other)]
    Unknown,
}

/// Enrichments selected for a refresh
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichmentSelection {
    /// Enrichment ids; all enrichments when empty
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub ids: Vec<String>,
}

/// Settings for a scheduled refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshConfig {
    /// What to refresh
    pub target: RefreshTarget,
    /// Enrichments to refresh when `target` is `enrichments`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<EnrichmentSelection>,
}

/// What a scheduled job does on each run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum ScheduleBehavior {
    /// Search for new items
    Search(ScheduledSearchConfig),
    /// Refresh existing items
    Refresh(RefreshConfig),
}

impl ScheduleBehavior {
    /// Scheduled search finding `count` items per run
    #[must_use]
    pub fn search(count: u32) -> Self {
        Self::Search(ScheduledSearchConfig {
            count,
            ..ScheduledSearchConfig::default()
        })
    }
}

/// Server-reported run status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Scheduled, not started
    Created,
    /// In progress
    Running,
    /// Finished
    Completed,
    /// Stopped before finishing
    Canceled,
    /// Ended in error
    Failed,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// One execution of a monitor or stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// Run id
    pub id: String,
    /// Object type
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub object: String,
    /// Current status
    pub status: RunStatus,
    /// Owning monitor
    #[serde(default)]
    pub monitor_id: Option<String>,
    /// Owning stream
    #[serde(default)]
    pub stream_id: Option<String>,
    /// Behavior that ran (`search` or `refresh`)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Completion time
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    /// Failure time
    #[serde(default)]
    pub failed_at: Option<Timestamp>,
    /// Failure reason
    #[serde(default)]
    pub failed_reason: Option<String>,
    /// Cancellation time
    #[serde(default)]
    pub canceled_at: Option<Timestamp>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn behavior_is_adjacently_tagged() {
        assert_eq!(
            serde_json::to_value(ScheduleBehavior::search(10)).unwrap(),
            json!({ "type": "search", "config": { "count": 10 } })
        );

        let refresh: ScheduleBehavior = serde_json::from_value(json!({
            "type": "refresh",
            "config": { "target": "enrichments", "enrichments": { "ids": ["enr_1"] } }
        }))
        .unwrap();
        match refresh {
            ScheduleBehavior::Refresh(cfg) => {
                assert_eq!(cfg.target, RefreshTarget::Enrichments);
                assert_eq!(cfg.enrichments.unwrap().ids, vec!["enr_1"]);
            }
            ScheduleBehavior::Search(_) => panic!("expected refresh"),
        }
    }

    #[test]
    fn cron_needs_five_fields() {
        assert!(Cadence::cron("0 9 * * 1").check().is_ok());
        assert!(Cadence::cron("0 9 * *").check().is_err());
        assert!(Cadence::cron("").check().is_err());
        assert!(Cadence::cron("0 0 9 * * 1").check().is_err());
    }
}
