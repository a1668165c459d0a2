use futures::Stream;

use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    pagination::{ListParams, ListResponse, paginate},
    resources::segment,
    types::websets::Event,
};

const EVENTS_PATH: &str = "/websets/v0/events";

/// API resource for `/websets/v0/events`
pub struct Events<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Events<'c, C> {
    /// Creates a new Events resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetches one event
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, id: &str) -> Result<Event, ExaError> {
        let id = segment(id);
        self.client.get(&format!("{EVENTS_PATH}/{id}")).await
    }

    /// Lists one page of events, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Event>, ExaError> {
        self.client.get_with_query(EVENTS_PATH, params).await
    }

    /// Walks the whole event log
    pub fn list_all(
        &self,
        limit: Option<u32>,
    ) -> impl Stream<Item = Result<Event, ExaError>> + use<'c, C> {
        let client = self.client;
        paginate(move |cursor| {
            let params = ListParams { cursor, limit };
            async move {
                client
                    .get_with_query::<_, ListResponse<Event>>(EVENTS_PATH, &params)
                    .await
            }
        })
    }
}
