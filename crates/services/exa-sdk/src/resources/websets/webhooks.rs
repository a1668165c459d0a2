use futures::Stream;

use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    pagination::{ListParams, ListResponse, paginate},
    resources::segment,
    types::websets::{
        CreateWebhookParams, ListAttemptsParams, UpdateWebhookParams, Webhook, WebhookAttempt,
    },
};

const WEBHOOKS_PATH: &str = "/websets/v0/webhooks";

/// API resource for `/websets/v0/webhooks`
pub struct Webhooks<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Webhooks<'c, C> {
    /// Creates a new Webhooks resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Registers a webhook
    ///
    /// The signing secret is only present in this response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, params: &CreateWebhookParams) -> Result<Webhook, ExaError> {
        self.client.post(WEBHOOKS_PATH, params).await
    }

    /// Fetches a webhook
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, id: &str) -> Result<Webhook, ExaError> {
        let id = segment(id);
        self.client.get(&format!("{WEBHOOKS_PATH}/{id}")).await
    }

    /// Lists one page of webhooks
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Webhook>, ExaError> {
        self.client.get_with_query(WEBHOOKS_PATH, params).await
    }

    /// Walks every webhook
    pub fn list_all(
        &self,
        limit: Option<u32>,
    ) -> impl Stream<Item = Result<Webhook, ExaError>> + use<'c, C> {
        let client = self.client;
        paginate(move |cursor| {
            let params = ListParams { cursor, limit };
            async move {
                client
                    .get_with_query::<_, ListResponse<Webhook>>(WEBHOOKS_PATH, &params)
                    .await
            }
        })
    }

    /// Updates a webhook's events, URL or metadata
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateWebhookParams,
    ) -> Result<Webhook, ExaError> {
        let id = segment(id);
        self.client
            .patch(&format!("{WEBHOOKS_PATH}/{id}"), params)
            .await
    }

    /// Deletes a webhook
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, id: &str) -> Result<Webhook, ExaError> {
        let id = segment(id);
        self.client.delete(&format!("{WEBHOOKS_PATH}/{id}")).await
    }

    /// Lists one page of delivery attempts for a webhook
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list_attempts(
        &self,
        id: &str,
        params: &ListAttemptsParams,
    ) -> Result<ListResponse<WebhookAttempt>, ExaError> {
        let id = segment(id);
        self.client
            .get_with_query(&format!("{WEBHOOKS_PATH}/{id}/attempts"), params)
            .await
    }

    /// Walks every delivery attempt for a webhook
    ///
    /// Filters in `params` apply to every page; its cursor is ignored.
    pub fn list_all_attempts(
        &self,
        id: &str,
        params: ListAttemptsParams,
    ) -> impl Stream<Item = Result<WebhookAttempt, ExaError>> + use<'c, C> {
        let id = segment(id);
        let client = self.client;
        let path = format!("{WEBHOOKS_PATH}/{id}/attempts");
        paginate(move |cursor| {
            let path = path.clone();
            let params = ListAttemptsParams {
                cursor,
                ..params.clone()
            };
            async move {
                client
                    .get_with_query::<_, ListResponse<WebhookAttempt>>(&path, &params)
                    .await
            }
        })
    }
}
