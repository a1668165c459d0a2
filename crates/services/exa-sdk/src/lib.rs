#![deny(clippy::all)]
#![warn(missing_docs)]

//! # `exa-sdk`
//!
//! Async client for the Exa search API: search, find-similar, contents,
//! answers, websets and research tasks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use exa_sdk::{Client, types::SearchRequest};
//!
//! # async fn example() -> Result<(), exa_sdk::ExaError> {
//! let client = Client::new();
//!
//! // No content options set: results carry text capped at 10 000 characters
//! let resp = client
//!     .search()
//!     .create(SearchRequest::new("latest AI developments"))
//!     .await?;
//! for r in &resp.results {
//!     println!("{} {:?}", r.url, r.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Websets
//!
//! ```no_run
//! use exa_sdk::Client;
//! use exa_sdk::types::websets::{CreateWebsetParamsBuilder, CreateWebsetSearchParamsBuilder};
//!
//! # async fn example() -> Result<(), exa_sdk::ExaError> {
//! let client = Client::new();
//! let search = CreateWebsetSearchParamsBuilder::default()
//!     .query("AI startups in Europe")
//!     .count(20_u32)
//!     .build()?;
//! let webset = client
//!     .websets()
//!     .create(&CreateWebsetParamsBuilder::default().search(search).build()?)
//!     .await?;
//! let idle = client.websets().wait_until_idle(&webset.id).await?;
//! println!("{} searches", idle.searches.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! [`ExaConfig`] reads `EXA_API_KEY` and `EXA_BASE_URL` from the environment.
//! Implement [`config::Config`] to supply credentials another way.
//!
//! ## Retries
//!
//! Nothing is retried unless a backoff is installed with
//! [`Client::with_backoff`].

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// Content option normalization for search-like requests
pub mod normalize;
/// Cursor pagination
pub mod pagination;
/// Polling helpers for long-running resources
pub mod poll;
/// API resource implementations
pub mod resources;
/// Retry logic utilities
pub mod retry;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::ExaConfig;
pub use crate::error::{ApiErrorKind, ApiErrorObject, ExaError};
pub use crate::pagination::{ListParams, ListResponse};
pub use crate::poll::PollOptions;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, ExaConfig, ExaError, ListParams, PollOptions};
}
