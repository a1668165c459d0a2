use futures::Stream;

use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    pagination::{ListParams, ListResponse, paginate},
    resources::segment,
    types::websets::{CreateMonitorParams, ListMonitorsParams, Monitor, Run, UpdateMonitorParams},
};

const MONITORS_PATH: &str = "/websets/v0/monitors";

/// API resource for `/websets/v0/monitors`
pub struct Monitors<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Monitors<'c, C> {
    /// Creates a new Monitors resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Creates a monitor
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, params: &CreateMonitorParams) -> Result<Monitor, ExaError> {
        self.client.post(MONITORS_PATH, params).await
    }

    /// Fetches a monitor
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, id: &str) -> Result<Monitor, ExaError> {
        let id = segment(id);
        self.client.get(&format!("{MONITORS_PATH}/{id}")).await
    }

    /// Lists one page of monitors
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        params: &ListMonitorsParams,
    ) -> Result<ListResponse<Monitor>, ExaError> {
        self.client.get_with_query(MONITORS_PATH, params).await
    }

    /// Walks every monitor, optionally only those of one webset
    pub fn list_all(
        &self,
        webset_id: Option<String>,
    ) -> impl Stream<Item = Result<Monitor, ExaError>> + use<'c, C> {
        let client = self.client;
        paginate(move |cursor| {
            let params = ListMonitorsParams {
                cursor,
                limit: None,
                webset_id: webset_id.clone(),
            };
            async move {
                client
                    .get_with_query::<_, ListResponse<Monitor>>(MONITORS_PATH, &params)
                    .await
            }
        })
    }

    /// Updates a monitor
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateMonitorParams,
    ) -> Result<Monitor, ExaError> {
        let id = segment(id);
        self.client
            .patch(&format!("{MONITORS_PATH}/{id}"), params)
            .await
    }

    /// Deletes a monitor
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, id: &str) -> Result<Monitor, ExaError> {
        let id = segment(id);
        self.client.delete(&format!("{MONITORS_PATH}/{id}")).await
    }

    /// Runs of monitors
    #[must_use]
    pub const fn runs(&self) -> MonitorRuns<'c, C> {
        MonitorRuns {
            client: self.client,
        }
    }
}

/// API resource for `/websets/v0/monitors/{id}/runs`
pub struct MonitorRuns<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> MonitorRuns<'c, C> {
    /// Fetches one run
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, monitor_id: &str, run_id: &str) -> Result<Run, ExaError> {
        let monitor_id = segment(monitor_id);
        let run_id = segment(run_id);
        self.client
            .get(&format!("{MONITORS_PATH}/{monitor_id}/runs/{run_id}"))
            .await
    }

    /// Lists one page of a monitor's runs
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        monitor_id: &str,
        params: &ListParams,
    ) -> Result<ListResponse<Run>, ExaError> {
        let monitor_id = segment(monitor_id);
        self.client
            .get_with_query(&format!("{MONITORS_PATH}/{monitor_id}/runs"), params)
            .await
    }

    /// Walks every run of a monitor
    pub fn list_all(
        &self,
        monitor_id: &str,
    ) -> impl Stream<Item = Result<Run, ExaError>> + use<'c, C> {
        let monitor_id = segment(monitor_id);
        let client = self.client;
        let path = format!("{MONITORS_PATH}/{monitor_id}/runs");
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
