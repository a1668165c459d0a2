//! Types for the Exa `/answer` endpoint

use serde::{Deserialize, Serialize};

use super::common::CostDollars;

/// Request body for `POST /answer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    /// The query to answer
    pub query: String,

    /// Model to use (`exa` or `exa-pro`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// System prompt to guide the answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Include full text of cited sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<bool>,
}

impl AnswerRequest {
    /// Create a new answer request with the given query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            model: None,
            system_prompt: None,
            text: None,
        }
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the system prompt
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Include the full text of cited sources
    #[must_use]
    pub const fn with_text(mut self, text: bool) -> Self {
        self.text = Some(text);
        self
    }
}

/// A citation in an answer response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// URL of the cited source
    pub url: String,
    /// Title of the cited source
    #[serde(default)]
    pub title: Option<String>,
    /// ID of the cited source
    #[serde(default)]
    pub id: Option<String>,
    /// Published date
    #[serde(default)]
    pub published_date: Option<String>,
    /// Author
    #[serde(default)]
    pub author: Option<String>,
    /// Full text (when `text` was requested)
    #[serde(default)]
    pub text: Option<String>,
}

/// Response from `POST /answer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    /// Server-assigned request id
    #[serde(default)]
    pub request_id: Option<String>,

    /// The generated answer
    pub answer: String,

    /// Citations used in the answer
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub citations: Vec<Citation>,

    /// Cost in dollars
    #[serde(default)]
    pub cost_dollars: Option<CostDollars>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_omits_unset_fields() {
        let req = AnswerRequest::new("who maintains tokio?").with_text(true);
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({ "query": "who maintains tokio?", "text": true })
        );
    }

    #[test]
    fn citations_default_to_empty() {
        let resp: AnswerResponse =
            serde_json::from_value(json!({ "answer": "It depends." })).unwrap();
        assert!(resp.citations.is_empty());
        assert!(resp.cost_dollars.is_none());
    }
}
