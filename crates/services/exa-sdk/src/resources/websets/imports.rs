use futures::Stream;

use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    pagination::{ListParams, ListResponse, paginate},
    poll::{PollOptions, poll_until_terminal},
    resources::segment,
    types::websets::{CreateImportParams, Import, UpdateImportParams},
};

const IMPORTS_PATH: &str = "/websets/v0/imports";

/// API resource for `/websets/v0/imports`
pub struct Imports<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Imports<'c, C> {
    /// Creates a new Imports resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Creates an import
    ///
    /// The returned import carries an `upload_url` the file must be sent to
    /// before processing starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, params: &CreateImportParams) -> Result<Import, ExaError> {
        self.client.post(IMPORTS_PATH, params).await
    }

    /// Fetches an import
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, id: &str) -> Result<Import, ExaError> {
        let id = segment(id);
        self.client.get(&format!("{IMPORTS_PATH}/{id}")).await
    }

    /// Lists one page of imports
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Import>, ExaError> {
        self.client.get_with_query(IMPORTS_PATH, params).await
    }

    /// Walks every import
    pub fn list_all(
        &self,
        limit: Option<u32>,
    ) -> impl Stream<Item = Result<Import, ExaError>> + use<'c, C> {
        let client = self.client;
        paginate(move |cursor| {
            let params = ListParams { cursor, limit };
            async move {
                client
                    .get_with_query::<_, ListResponse<Import>>(IMPORTS_PATH, &params)
                    .await
            }
        })
    }

    /// Updates an import's title or metadata
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn update(&self, id: &str, params: &UpdateImportParams) -> Result<Import, ExaError> {
        let id = segment(id);
        self.client
            .patch(&format!("{IMPORTS_PATH}/{id}"), params)
            .await
    }

    /// Deletes an import
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, id: &str) -> Result<Import, ExaError> {
        let id = segment(id);
        self.client.delete(&format!("{IMPORTS_PATH}/{id}")).await
    }

    /// Polls an import until it completes, with default timing
    ///
    /// # Errors
    ///
    /// Returns [`ExaError::ResourceFailed`] if the import fails,
    /// [`ExaError::Timeout`] past the default timeout, or any request error.
    pub async fn wait_until_completed(&self, id: &str) -> Result<Import, ExaError> {
        self.wait_until_completed_with(id, PollOptions::default(), |_| {})
            .await
    }

    /// Polls an import until it completes
    ///
    /// # Errors
    ///
    /// Returns [`ExaError::ResourceFailed`] carrying the server's failure
    /// message if the import fails, [`ExaError::Timeout`] past
    /// `opts.timeout`, or any request error.
    pub async fn wait_until_completed_with<P>(
        &self,
        id: &str,
        opts: PollOptions,
        on_poll: P,
    ) -> Result<Import, ExaError>
    where
        P: FnMut(&Import),
    {
        poll_until_terminal(opts, || self.get(id), on_poll).await
    }
}
