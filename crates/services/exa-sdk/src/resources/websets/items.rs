use futures::Stream;

use super::WEBSETS_PATH;
use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    pagination::{ListResponse, paginate},
    resources::segment,
    types::websets::{ListItemsParams, WebsetItem},
};

/// API resource for `/websets/v0/websets/{id}/items`
pub struct Items<'c, C: Config> {
    client: &'c Client<C>,
}

fn items_path(webset_id: &str) -> String {
    let webset_id = segment(webset_id);
    format!("{WEBSETS_PATH}/{webset_id}/items")
}

impl<'c, C: Config> Items<'c, C> {
    /// Creates a new Items resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetches one item
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, webset_id: &str, item_id: &str) -> Result<WebsetItem, ExaError> {
        let item_id = segment(item_id);
        self.client
            .get(&format!("{}/{item_id}", items_path(webset_id)))
            .await
    }

    /// Lists one page of a webset's items
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        webset_id: &str,
        params: &ListItemsParams,
    ) -> Result<ListResponse<WebsetItem>, ExaError> {
        self.client
            .get_with_query(&items_path(webset_id), params)
            .await
    }

    /// Walks every item of a webset
    ///
    /// `params.cursor` is ignored; `limit` and `source_id` apply to every page.
    pub fn list_all(
        &self,
        webset_id: &str,
        params: ListItemsParams,
    ) -> impl Stream<Item = Result<WebsetItem, ExaError>> + use<'c, C> {
        let client = self.client;
        let path = items_path(webset_id);
        paginate(move |cursor| {
            let path = path.clone();
            let params = ListItemsParams {
                cursor,
                ..params.clone()
            };
            async move {
                client
                    .get_with_query::<_, ListResponse<WebsetItem>>(&path, &params)
                    .await
            }
        })
    }

    /// Removes an item from a webset
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, webset_id: &str, item_id: &str) -> Result<WebsetItem, ExaError> {
        let item_id = segment(item_id);
        self.client
            .delete(&format!("{}/{item_id}", items_path(webset_id)))
            .await
    }
}
