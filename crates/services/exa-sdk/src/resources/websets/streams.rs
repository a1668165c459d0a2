use futures::Stream;

use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    pagination::{ListParams, ListResponse, paginate},
    resources::segment,
    types::websets::{CreateStreamParams, ListStreamsParams, Run, UpdateStreamParams, WebsetStream},
};

const STREAMS_PATH: &str = "/websets/v0/streams";

/// API resource for `/websets/v0/streams`
pub struct Streams<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Streams<'c, C> {
    /// Creates a new Streams resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Creates a stream
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, params: &CreateStreamParams) -> Result<WebsetStream, ExaError> {
        self.client.post(STREAMS_PATH, params).await
    }

    /// Fetches a stream
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, id: &str) -> Result<WebsetStream, ExaError> {
        let id = segment(id);
        self.client.get(&format!("{STREAMS_PATH}/{id}")).await
    }

    /// Lists one page of streams
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        params: &ListStreamsParams,
    ) -> Result<ListResponse<WebsetStream>, ExaError> {
        self.client.get_with_query(STREAMS_PATH, params).await
    }

    /// Walks every stream, optionally only those of one webset
    pub fn list_all(
        &self,
        webset_id: Option<String>,
    ) -> impl Stream<Item = Result<WebsetStream, ExaError>> + use<'c, C> {
        let client = self.client;
        paginate(move |cursor| {
            let params = ListStreamsParams {
                cursor,
                limit: None,
                webset_id: webset_id.clone(),
            };
            async move {
                client
                    .get_with_query::<_, ListResponse<WebsetStream>>(STREAMS_PATH, &params)
                    .await
            }
        })
    }

    /// Updates a stream
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateStreamParams,
    ) -> Result<WebsetStream, ExaError> {
        let id = segment(id);
        self.client
            .patch(&format!("{STREAMS_PATH}/{id}"), params)
            .await
    }

    /// Deletes a stream
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, id: &str) -> Result<WebsetStream, ExaError> {
        let id = segment(id);
        self.client.delete(&format!("{STREAMS_PATH}/{id}")).await
    }

    /// Runs of streams
    #[must_use]
    pub const fn runs(&self) -> StreamRuns<'c, C> {
        StreamRuns {
            client: self.client,
        }
    }
}

/// API resource for `/websets/v0/streams/{id}/runs`
pub struct StreamRuns<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> StreamRuns<'c, C> {
    /// Fetches one run
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, stream_id: &str, run_id: &str) -> Result<Run, ExaError> {
        let stream_id = segment(stream_id);
        let run_id = segment(run_id);
        self.client
            .get(&format!("{STREAMS_PATH}/{stream_id}/runs/{run_id}"))
            .await
    }

    /// Lists one page of a stream's runs
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        stream_id: &str,
        params: &ListParams,
    ) -> Result<ListResponse<Run>, ExaError> {
        let stream_id = segment(stream_id);
        self.client
            .get_with_query(&format!("{STREAMS_PATH}/{stream_id}/runs"), params)
            .await
    }

    /// Walks every run of a stream
    pub fn list_all(
        &self,
        stream_id: &str,
    ) -> impl Stream<Item = Result<Run, ExaError>> + use<'c, C> {
        let stream_id = segment(stream_id);
        let client = self.client;
        let path = format!("{STREAMS_PATH}/{stream_id}/runs");
        paginate(move |cursor| {
            let path = path.clone();
            let params = ListParams {
                cursor,
                limit: None,
            };
            async move {
                client
                    .get_with_query::<_, ListResponse<Run>>(&path, &params)
                    .await
            }
        })
    }
}
