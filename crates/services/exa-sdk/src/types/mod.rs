//! Request and response types for the Exa API

/// Answer endpoint types
pub mod answer;
/// Shared types used across endpoints
pub mod common;
/// Contents endpoint types
pub mod contents;
/// Find-similar endpoint types
pub mod find_similar;
/// Research task types
pub mod research;
/// Search endpoint types
pub mod search;
/// Websets API types
pub mod websets;

pub use answer::{AnswerRequest, AnswerResponse, Citation};
pub use common::*;
pub use contents::{ContentStatus, ContentsRequest, ContentsResponse};
pub use find_similar::{FindSimilarRequest, FindSimilarResponse};
#[cfg(feature = "schemars")]
pub use research::SchemaOf;
pub use research::{
    OutputSchema, ResearchCitation, ResearchCreateRequest, ResearchCreateRequestBuilder,
    ResearchCreateRequestBuilderError, ResearchCreateResponse, ResearchModel, ResearchOutput,
    ResearchStatus, ResearchTask,
};
pub use search::{SearchRequest, SearchResponse};
pub use websets::*;
