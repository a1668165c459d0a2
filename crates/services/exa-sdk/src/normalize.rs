//! Content-option normalization for search-like requests.
//!
//! Requests carry content options (`text`, `highlights`, ...) flat next to the
//! search options. Before sending, they are partitioned out and nested under a
//! `contents` key, or merged at the top level for `/contents`. When the caller
//! asked for no content at all, text is requested by default.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::ExaError;

/// Keys that select page content rather than search behavior
pub const CONTENT_KEYS: [&str; 6] = [
    "text",
    "highlights",
    "summary",
    "context",
    "livecrawl",
    "livecrawlTimeout",
];

/// Character cap used when text is requested by default
pub const DEFAULT_MAX_CHARACTERS: u32 = 10_000;

/// Content selection applied when a request names no content option
#[must_use]
pub fn default_contents() -> Map<String, Value> {
    let mut m = Map::new();
    m.insert(
        "text".into(),
        json!({ "maxCharacters": DEFAULT_MAX_CHARACTERS }),
    );
    m
}

/// Outcome of partitioning a request's options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentsDirective {
    /// The caller opted out with `contents: false`
    Omit,
    /// Content options to send
    Include(Map<String, Value>),
}

/// Splits content keys out of `options`.
///
/// Returns the remaining (pass-through) options and the content selection.
/// An explicit `contents` object is merged with the flat keys, flat keys
/// winning. `contents: false` drops every content key.
#[must_use]
pub fn partition(mut options: Map<String, Value>) -> (Map<String, Value>, ContentsDirective) {
    let explicit = options.remove("contents");

    let mut flat = Map::new();
    for key in CONTENT_KEYS {
        match options.remove(key) {
            None | Some(Value::Null) => {}
            Some(v) => {
                flat.insert(key.to_string(), v);
            }
        }
    }

    let mut merged = match explicit {
        Some(Value::Bool(false)) => return (options, ContentsDirective::Omit),
        Some(Value::Object(obj)) => obj,
        _ => Map::new(),
    };
    merged.extend(flat);

    if merged.is_empty() {
        merged = default_contents();
    }
    (options, ContentsDirective::Include(merged))
}

/// Nests content options under `contents` (`/search`, `/findSimilar`)
#[must_use]
pub fn nest_contents(options: Map<String, Value>) -> Map<String, Value> {
    let (mut rest, directive) = partition(options);
    if let ContentsDirective::Include(contents) = directive {
        rest.insert("contents".into(), Value::Object(contents));
    }
    rest
}

/// Places content options at the top level (`/contents`)
#[must_use]
pub fn inline_contents(options: Map<String, Value>) -> Map<String, Value> {
    let (mut rest, directive) = partition(options);
    if let ContentsDirective::Include(contents) = directive {
        rest.extend(contents);
    }
    rest
}

/// Serializes a request into a JSON object for normalization
pub(crate) fn to_object<T: Serialize>(req: &T) -> Result<Map<String, Value>, ExaError> {
    match serde_json::to_value(req).map_err(|e| ExaError::Serde(e.to_string()))? {
        Value::Object(m) => Ok(m),
        other => Err(ExaError::Serde(format!(
            "request did not serialize to an object: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn injects_default_when_no_content_key() {
        let out = nest_contents(obj(json!({ "query": "latest AI developments" })));
        assert_eq!(
            Value::Object(out),
            json!({
                "query": "latest AI developments",
                "contents": { "text": { "maxCharacters": 10000 } }
            })
        );
    }

    #[test]
    fn default_injection_is_idempotent() {
        let once = nest_contents(obj(json!({ "query": "q" })));
        let twice = nest_contents(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn contents_false_omits_key() {
        let out = nest_contents(obj(json!({
            "query": "q",
            "contents": false,
            "highlights": true
        })));
        assert_eq!(Value::Object(out), json!({ "query": "q" }));
    }

    #[test]
    fn contents_true_behaves_like_unset() {
        let out = nest_contents(obj(json!({ "query": "q", "contents": true })));
        assert_eq!(out["contents"], json!({ "text": { "maxCharacters": 10000 } }));
    }

    #[test]
    fn content_keys_are_nested_and_others_pass_through() {
        let out = nest_contents(obj(json!({
            "query": "q",
            "numResults": 7,
            "includeDomains": ["arxiv.org"],
            "summary": { "query": "main idea" },
            "livecrawl": "always",
            "livecrawlTimeout": 5000,
            "someFutureFlag": { "nested": [1, 2] }
        })));

        assert_eq!(out["numResults"], 7);
        assert_eq!(out["includeDomains"], json!(["arxiv.org"]));
        assert_eq!(out["someFutureFlag"], json!({ "nested": [1, 2] }));
        assert_eq!(
            out["contents"],
            json!({
                "summary": { "query": "main idea" },
                "livecrawl": "always",
                "livecrawlTimeout": 5000
            })
        );
        assert!(out.get("summary").is_none());
    }

    #[test]
    fn flat_keys_override_explicit_contents_object() {
        let out = nest_contents(obj(json!({
            "query": "q",
            "contents": { "text": true, "context": true },
            "text": { "maxCharacters": 50 }
        })));
        assert_eq!(
            out["contents"],
            json!({ "text": { "maxCharacters": 50 }, "context": true })
        );
    }

    #[test]
    fn null_content_values_count_as_absent() {
        let out = nest_contents(obj(json!({ "query": "q", "text": null })));
        assert_eq!(out["contents"], json!({ "text": { "maxCharacters": 10000 } }));
    }

    #[test]
    fn inline_places_contents_at_top_level() {
        let out = inline_contents(obj(json!({
            "urls": ["https://example.com"],
            "highlights": { "numSentences": 2 }
        })));
        assert_eq!(
            Value::Object(out),
            json!({
                "urls": ["https://example.com"],
                "highlights": { "numSentences": 2 }
            })
        );

        let defaulted = inline_contents(obj(json!({ "urls": ["https://example.com"] })));
        assert_eq!(defaulted["text"], json!({ "maxCharacters": 10000 }));
    }
}
