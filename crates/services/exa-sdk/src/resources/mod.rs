//! API resource implementations for the Exa client

use std::borrow::Cow;

/// Answer API resource
pub mod answer;
/// Contents API resource
pub mod contents;
/// Find-similar API resource
pub mod find_similar;
/// Research tasks API resource
pub mod research;
/// Search API resource
pub mod search;
/// Websets API resources
pub mod websets;

pub use answer::Answer;
pub use contents::Contents;
pub use find_similar::FindSimilar;
pub use research::Research;
pub use search::Search;
pub use websets::{
    Enrichments, Events, Imports, Items, MonitorRuns, Monitors, Searches, StreamRuns, Streams,
    Webhooks, Websets,
};

/// Percent-encodes one path segment so ids cannot add segments, a query or a fragment
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}
