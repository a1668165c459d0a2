//! Types for the research API (`/research/v0/tasks`)

use std::collections::HashMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::ExaError;
use crate::poll::{PollState, Pollable};

/// Research model
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResearchModel {
    /// Standard model
    #[default]
    #[serde(rename = "exa-research")]
    ExaResearch,
    /// Higher-effort model
    #[serde(rename = "exa-research-pro")]
    ExaResearchPro,
}

/// Something that can describe the JSON Schema of a research result
///
/// Implemented for raw [`Value`] schemas and, with the `schemars` feature,
/// for [`SchemaOf<T>`].
pub trait OutputSchema {
    /// JSON Schema document
    fn to_json_schema(&self) -> Value;
}

impl OutputSchema for Value {
    fn to_json_schema(&self) -> Value {
        self.clone()
    }
}

/// Output schema derived from a type's `JsonSchema` impl
#[cfg(feature = "schemars")]
pub struct SchemaOf<T>(std::marker::PhantomData<fn() -> T>);

#[cfg(feature = "schemars")]
impl<T> SchemaOf<T> {
    /// Schema marker for `T`
    #[must_use]
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

#[cfg(feature = "schemars")]
impl<T> Default for SchemaOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "schemars")]
impl<T: schemars::JsonSchema> OutputSchema for SchemaOf<T> {
    fn to_json_schema(&self) -> Value {
        schemars::schema_for!(T).to_value()
    }
}

/// Output settings for a research task
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchOutput {
    /// JSON Schema the result must follow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    /// Let the server infer a schema from the instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infer_schema: Option<bool>,
}

/// Request body for `POST /research/v0/tasks`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(validate = "Self::validate")
)]
pub struct ResearchCreateRequest {
    /// What to research
    pub instructions: String,
    /// Model to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ResearchModel>,
    /// Output settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<ResearchOutput>,
}

impl ResearchCreateRequestBuilder {
    /// Requires the result to follow `schema`
    pub fn output_schema(&mut self, schema: &impl OutputSchema) -> &mut Self {
        self.output = Some(Some(ResearchOutput {
            schema: Some(schema.to_json_schema()),
            infer_schema: None,
        }));
        self
    }

    fn validate(&self) -> Result<(), String> {
        if self
            .instructions
            .as_deref()
            .is_none_or(|i| i.trim().is_empty())
        {
            return Err("research instructions must not be empty".into());
        }
        Ok(())
    }
}

/// Response from `POST /research/v0/tasks`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchCreateResponse {
    /// Id of the new task
    pub id: String,
}

/// Server-reported research task status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResearchStatus {
    /// Still researching
    #[serde(alias = "running", alias = "pending")]
    InProgress,
    /// Result available
    Completed,
    /// Ended in error
    Failed,
    /// Stopped by the caller
    Canceled,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

impl ResearchStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }
}

/// A source backing part of a research result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchCitation {
    /// Source id
    #[serde(default)]
    pub id: Option<String>,
    /// Source URL
    pub url: String,
    /// Source title
    #[serde(default)]
    pub title: Option<String>,
    /// Relevant snippet
    #[serde(default)]
    pub snippet: Option<String>,
}

/// A research task and, once completed, its result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchTask {
    /// Task id
    #[serde(alias = "taskId")]
    pub id: String,
    /// Current status
    pub status: ResearchStatus,
    /// Instructions the task was created with
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub instructions: String,
    /// Output schema in effect
    #[serde(default)]
    pub schema: Option<Value>,
    /// Result, present once completed
    #[serde(default)]
    pub data: Option<Value>,
    /// Citations keyed by result field
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub citations: HashMap<String, Vec<ResearchCitation>>,
    /// Failure reason
    #[serde(default)]
    pub error: Option<String>,
}

impl ResearchTask {
    /// Decodes the result into a caller type
    ///
    /// # Errors
    ///
    /// Returns [`ExaError::InvalidRequest`] if the task has no result yet and
    /// [`ExaError::Serde`] if the result does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, ExaError> {
        let data = self.data.as_ref().ok_or_else(|| {
            ExaError::InvalidRequest(format!("research task {} has no result yet", self.id))
        })?;
        T::deserialize(data).map_err(|e| ExaError::Serde(e.to_string()))
    }
}

impl Pollable for ResearchTask {
    const RESOURCE: &'static str = "research task";

    fn poll_id(&self) -> &str {
        &self.id
    }

    fn poll_status(&self) -> String {
        self.status.as_str().to_string()
    }

    fn poll_state(&self) -> PollState {
        match self.status {
            ResearchStatus::Completed => PollState::Succeeded,
            ResearchStatus::Failed | ResearchStatus::Canceled => PollState::Failed(
                self.error
                    .clone()
                    .unwrap_or_else(|| format!("research task {}", self.status.as_str())),
            ),
            ResearchStatus::InProgress | ResearchStatus::Unknown => PollState::Pending,
        }
    }
}
