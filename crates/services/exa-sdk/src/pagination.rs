//! Cursor pagination over list endpoints.

use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};
use serde::{Deserialize, Serialize};

use crate::error::ExaError;

/// One page of a cursor-paginated list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Items on this page
    pub data: Vec<T>,
    /// Whether more pages follow
    #[serde(default, deserialize_with = "crate::types::common::null_as_default")]
    pub has_more: bool,
    /// Cursor for the next page
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> ListResponse<T> {
    /// Cursor to request next, if any
    #[must_use]
    pub fn next_page_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.next_cursor.as_deref()
        } else {
            None
        }
    }
}

/// Query parameters shared by list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Cursor returned by a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListParams {
    /// Sets the page size
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the cursor
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Walks every page of a list endpoint, yielding items in order.
///
/// `list` is called with `None` first, then with each `nextCursor` while
/// `hasMore` is set. The stream is lazy and forward-only; pages are fetched
/// as items are consumed. An error is yielded once and ends the stream.
pub fn paginate<T, F, Fut>(mut list: F) -> impl Stream<Item = Result<T, ExaError>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>, ExaError>>,
{
    let pages = stream::try_unfold(Cursor::Start, move |cursor| {
        let next = match cursor {
            Cursor::Start => Some(list(None)),
            Cursor::Next(c) => Some(list(Some(c))),
            Cursor::Done => None,
        };
        async move {
            let Some(fetch) = next else {
                return Ok::<_, ExaError>(None);
            };
            let page = fetch.await?;
            tracing::debug!(
                items = page.data.len(),
                has_more = page.has_more,
                "fetched list page"
            );
            let following = match page.next_page_cursor() {
                Some(c) => Cursor::Next(c.to_string()),
                None => Cursor::Done,
            };
            Ok::<_, ExaError>(Some((page.data, following)))
        }
    });

    pages
        .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
        .try_flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn page(data: Vec<u32>, has_more: bool, next: Option<&str>) -> ListResponse<u32> {
        ListResponse {
            data,
            has_more,
            next_cursor: next.map(String::from),
        }
    }

    #[tokio::test]
    async fn walks_all_pages_in_order() {
        let seen_cursors = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen_cursors);

        let items: Vec<u32> = paginate(move |cursor: Option<String>| {
            log.lock().unwrap().push(cursor.clone());
            let p = match cursor.as_deref() {
                None => page(vec![1, 2], true, Some("c1")),
                Some("c1") => page(vec![3], true, Some("c2")),
                _ => page(vec![4, 5, 6], false, None),
            };
            std::future::ready(Ok(p))
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            *seen_cursors.lock().unwrap(),
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );
    }

    #[tokio::test]
    async fn stops_when_cursor_missing_even_if_has_more() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);

        let items: Vec<u32> = paginate(move |_cursor| {
            *counter.lock().unwrap() += 1;
            std::future::ready(Ok(page(vec![9], true, None)))
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(items, vec![9]);
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn empty_pages_are_skipped() {
        let items: Vec<u32> = paginate(|cursor: Option<String>| {
            let p = match cursor.as_deref() {
                None => page(vec![], true, Some("next")),
                _ => page(vec![7], false, None),
            };
            std::future::ready(Ok(p))
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn error_ends_the_stream() {
        let result: Result<Vec<u32>, ExaError> = paginate(|cursor: Option<String>| {
            std::future::ready(match cursor {
                None => Ok(page(vec![1], true, Some("boom"))),
                Some(_) => Err(ExaError::Serde("bad page".into())),
            })
        })
        .try_collect()
        .await;

        assert!(matches!(result, Err(ExaError::Serde(_))));
    }

    #[test]
    fn list_params_serialize_camel_case() {
        let params = ListParams::default().with_limit(25).with_cursor("abc");
        let v = serde_json::to_value(params).unwrap();
        assert_eq!(v, serde_json::json!({ "cursor": "abc", "limit": 25 }));
        assert_eq!(
            serde_json::to_value(ListParams::default()).unwrap(),
            serde_json::json!({})
        );
    }
}
