use super::WEBSETS_PATH;
use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    resources::segment,
    types::websets::{CreateEnrichmentParams, UpdateEnrichmentParams, WebsetEnrichment},
};

/// API resource for `/websets/v0/websets/{id}/enrichments`
pub struct Enrichments<'c, C: Config> {
    client: &'c Client<C>,
}

fn enrichment_path(webset_id: &str, enrichment_id: &str) -> String {
    let webset_id = segment(webset_id);
    let enrichment_id = segment(enrichment_id);
    format!("{WEBSETS_PATH}/{webset_id}/enrichments/{enrichment_id}")
}

impl<'c, C: Config> Enrichments<'c, C> {
    /// Creates a new Enrichments resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Adds an enrichment to a webset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(
        &self,
        webset_id: &str,
        params: &CreateEnrichmentParams,
    ) -> Result<WebsetEnrichment, ExaError> {
        let webset_id = segment(webset_id);
        self.client
            .post(&format!("{WEBSETS_PATH}/{webset_id}/enrichments"), params)
            .await
    }

    /// Fetches an enrichment
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(
        &self,
        webset_id: &str,
        enrichment_id: &str,
    ) -> Result<WebsetEnrichment, ExaError> {
        self.client
            .get(&enrichment_path(webset_id, enrichment_id))
            .await
    }

    /// Updates an enrichment
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn update(
        &self,
        webset_id: &str,
        enrichment_id: &str,
        params: &UpdateEnrichmentParams,
    ) -> Result<WebsetEnrichment, ExaError> {
        self.client
            .patch(&enrichment_path(webset_id, enrichment_id), params)
            .await
    }

    /// Deletes an enrichment and its results
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(
        &self,
        webset_id: &str,
        enrichment_id: &str,
    ) -> Result<WebsetEnrichment, ExaError> {
        self.client
            .delete(&enrichment_path(webset_id, enrichment_id))
            .await
    }

    /// Cancels a running enrichment
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn cancel(
        &self,
        webset_id: &str,
        enrichment_id: &str,
    ) -> Result<WebsetEnrichment, ExaError> {
        self.client
            .post_empty(&format!(
                "{}/cancel",
                enrichment_path(webset_id, enrichment_id)
            ))
            .await
    }
}
