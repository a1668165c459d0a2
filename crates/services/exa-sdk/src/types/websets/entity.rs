//! Entity and criteria types shared by webset searches, imports and monitors

use serde::{Deserialize, Serialize};

/// Kind of entity a webset collects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WebsetEntity {
    /// Companies
    Company,
    /// People
    Person,
    /// Articles
    Article,
    /// Research papers
    ResearchPaper,
    /// Anything else, described in natural language
    Custom {
        /// What the entity is
        description: String,
    },
    /// Entity type not known to this client
    #[serde(other)]
    Unknown,
}

impl WebsetEntity {
    /// Custom entity with the given description
    #[must_use]
    pub fn custom(description: impl Into<String>) -> Self {
        Self::Custom {
            description: description.into(),
        }
    }
}

/// A criterion items must satisfy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    /// Natural-language description of the criterion
    pub description: String,
    /// Share of evaluated items that met the criterion (server-reported)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
}

impl Criterion {
    /// Criterion with the given description
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            success_rate: None,
        }
    }
}

impl From<&str> for Criterion {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}
