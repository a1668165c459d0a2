//! Websets API resources (`/websets/v0`)

use futures::Stream;

use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    pagination::{ListParams, ListResponse, paginate},
    poll::{PollOptions, poll_until_terminal},
    resources::segment,
    types::websets::{
        CreateWebsetParams, PreviewWebsetParams, PreviewWebsetResponse, UpdateWebsetParams, Webset,
    },
};

/// Enrichments of a webset
pub mod enrichments;
/// Websets event log
pub mod events;
/// Imports
pub mod imports;
/// Items of a webset
pub mod items;
/// Monitors and their runs
pub mod monitors;
/// Searches of a webset
pub mod searches;
/// Streams and their runs
pub mod streams;
/// Webhooks and their delivery attempts
pub mod webhooks;

pub use enrichments::Enrichments;
pub use events::Events;
pub use imports::Imports;
pub use items::Items;
pub use monitors::{MonitorRuns, Monitors};
pub use searches::Searches;
pub use streams::{StreamRuns, Streams};
pub use webhooks::Webhooks;

pub(crate) const WEBSETS_PATH: &str = "/websets/v0/websets";

/// API resource for `/websets/v0/websets`
pub struct Websets<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Websets<'c, C> {
    /// Creates a new Websets resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Creates a webset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, params: &CreateWebsetParams) -> Result<Webset, ExaError> {
        self.client.post(WEBSETS_PATH, params).await
    }

    /// Fetches a webset by id or external id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, id: &str) -> Result<Webset, ExaError> {
        let id = segment(id);
        self.client.get(&format!("{WEBSETS_PATH}/{id}")).await
    }

    /// Fetches a webset with its items expanded
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get_with_items(&self, id: &str) -> Result<Webset, ExaError> {
        let id = segment(id);
        self.client
            .get_with_query(&format!("{WEBSETS_PATH}/{id}"), &[("expand", "items")])
            .await
    }

    /// Lists one page of websets
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Webset>, ExaError> {
        self.client.get_with_query(WEBSETS_PATH, params).await
    }

    /// Walks every webset, fetching pages of `limit` as items are consumed
    pub fn list_all(
        &self,
        limit: Option<u32>,
    ) -> impl Stream<Item = Result<Webset, ExaError>> + use<'c, C> {
        let client = self.client;
        paginate(move |cursor| {
            let params = ListParams { cursor, limit };
            async move {
                client
                    .get_with_query::<_, ListResponse<Webset>>(WEBSETS_PATH, &params)
                    .await
            }
        })
    }

    /// Updates a webset's title, external id or metadata
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn update(&self, id: &str, params: &UpdateWebsetParams) -> Result<Webset, ExaError> {
        let id = segment(id);
        self.client
            .post(&format!("{WEBSETS_PATH}/{id}"), params)
            .await
    }

    /// Deletes a webset and its items
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, id: &str) -> Result<Webset, ExaError> {
        let id = segment(id);
        self.client.delete(&format!("{WEBSETS_PATH}/{id}")).await
    }

    /// Cancels every running search and enrichment of a webset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn cancel(&self, id: &str) -> Result<Webset, ExaError> {
        let id = segment(id);
        self.client
            .post_empty(&format!("{WEBSETS_PATH}/{id}/cancel"))
            .await
    }

    /// Shows how a query would be interpreted without creating a webset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn preview(
        &self,
        params: &PreviewWebsetParams,
    ) -> Result<PreviewWebsetResponse, ExaError> {
        self.client
            .post(&format!("{WEBSETS_PATH}/preview"), params)
            .await
    }

    /// Polls a webset until it is idle, with default timing
    ///
    /// # Errors
    ///
    /// Returns [`ExaError::Timeout`] if the webset is still busy after the
    /// default timeout, or any request error.
    pub async fn wait_until_idle(&self, id: &str) -> Result<Webset, ExaError> {
        self.wait_until_idle_with(id, PollOptions::default(), |_| {})
            .await
    }

    /// Polls a webset until it is idle
    ///
    /// `on_poll` sees every fetched webset, including the final one. A paused
    /// webset is not terminal and keeps being polled.
    ///
    /// # Errors
    ///
    /// Returns [`ExaError::Timeout`] past `opts.timeout`, or any request error.
    pub async fn wait_until_idle_with<P>(
        &self,
        id: &str,
        opts: PollOptions,
        on_poll: P,
    ) -> Result<Webset, ExaError>
    where
        P: FnMut(&Webset),
    {
        poll_until_terminal(opts, || self.get(id), on_poll).await
    }

    /// Items of websets
    #[must_use]
    pub const fn items(&self) -> Items<'c, C> {
        Items::new(self.client)
    }

    /// Searches of websets
    #[must_use]
    pub const fn searches(&self) -> Searches<'c, C> {
        Searches::new(self.client)
    }

    /// Enrichments of websets
    #[must_use]
    pub const fn enrichments(&self) -> Enrichments<'c, C> {
        Enrichments::new(self.client)
    }

    /// Imports
    #[must_use]
    pub const fn imports(&self) -> Imports<'c, C> {
        Imports::new(self.client)
    }

    /// Monitors
    #[must_use]
    pub const fn monitors(&self) -> Monitors<'c, C> {
        Monitors::new(self.client)
    }

    /// Streams
    #[must_use]
    pub const fn streams(&self) -> Streams<'c, C> {
        Streams::new(self.client)
    }

    /// Webhooks
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'c, C> {
        Webhooks::new(self.client)
    }

    /// Event log
    #[must_use]
    pub const fn events(&self) -> Events<'c, C> {
        Events::new(self.client)
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Websets API resource
    #[must_use]
    pub const fn websets(&self) -> Websets<'_, C> {
        Websets::new(self)
    }
}
