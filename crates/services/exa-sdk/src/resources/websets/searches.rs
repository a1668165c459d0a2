use super::WEBSETS_PATH;
use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    resources::segment,
    types::websets::{CancelSearchParams, CreateWebsetSearchParams, WebsetSearch},
};

/// API resource for `/websets/v0/websets/{id}/searches`
pub struct Searches<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Searches<'c, C> {
    /// Creates a new Searches resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Starts a new search on a webset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(
        &self,
        webset_id: &str,
        params: &CreateWebsetSearchParams,
    ) -> Result<WebsetSearch, ExaError> {
        let webset_id = segment(webset_id);
        self.client
            .post(&format!("{WEBSETS_PATH}/{webset_id}/searches"), params)
            .await
    }

    /// Fetches a search
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, webset_id: &str, search_id: &str) -> Result<WebsetSearch, ExaError> {
        let webset_id = segment(webset_id);
        let search_id = segment(search_id);
        self.client
            .get(&format!("{WEBSETS_PATH}/{webset_id}/searches/{search_id}"))
            .await
    }

    /// Cancels a running search
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn cancel(&self, webset_id: &str, search_id: &str) -> Result<WebsetSearch, ExaError> {
        let webset_id = segment(webset_id);
        let search_id = segment(search_id);
        self.client
            .post_empty(&format!(
                "{WEBSETS_PATH}/{webset_id}/searches/{search_id}/cancel"
            ))
            .await
    }

    /// Cancels a running search, recording a reason
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn cancel_with_reason(
        &self,
        webset_id: &str,
        search_id: &str,
        reason: impl Into<String>,
    ) -> Result<WebsetSearch, ExaError> {
        let webset_id = segment(webset_id);
        let search_id = segment(search_id);
        let body = CancelSearchParams {
            reason: Some(reason.into()),
        };
        self.client
            .post(
                &format!("{WEBSETS_PATH}/{webset_id}/searches/{search_id}/cancel"),
                &body,
            )
            .await
    }
}
