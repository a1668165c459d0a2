use futures::Stream;

use crate::{
    client::Client,
    config::Config,
    error::ExaError,
    pagination::{ListParams, ListResponse, paginate},
    poll::{PollOptions, poll_until_terminal},
    resources::segment,
    types::research::{ResearchCreateRequest, ResearchCreateResponse, ResearchTask},
};

const TASKS_PATH: &str = "/research/v0/tasks";

/// API resource for `/research/v0/tasks`
pub struct Research<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Research<'c, C> {
    /// Creates a new Research resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Starts a research task
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(
        &self,
        req: &ResearchCreateRequest,
    ) -> Result<ResearchCreateResponse, ExaError> {
        self.client.post(TASKS_PATH, req).await
    }

    /// Fetches a research task
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get(&self, id: &str) -> Result<ResearchTask, ExaError> {
        let id = segment(id);
        self.client.get(&format!("{TASKS_PATH}/{id}")).await
    }

    /// Lists one page of research tasks
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ListResponse<ResearchTask>, ExaError> {
        self.client.get_with_query(TASKS_PATH, params).await
    }

    /// Walks every research task
    pub fn list_all(
        &self,
        limit: Option<u32>,
    ) -> impl Stream<Item = Result<ResearchTask, ExaError>> + use<'c, C> {
        let client = self.client;
        paginate(move |cursor| {
            let params = ListParams { cursor, limit };
            async move {
                client
                    .get_with_query::<_, ListResponse<ResearchTask>>(TASKS_PATH, &params)
                    .await
            }
        })
    }

    /// Polls a task until it finishes, with default timing
    ///
    /// # Errors
    ///
    /// Returns [`ExaError::ResourceFailed`] if the task fails or is canceled,
    /// [`ExaError::Timeout`] past the default timeout, or any request error.
    pub async fn poll_until_finished(&self, id: &str) -> Result<ResearchTask, ExaError> {
        self.poll_until_finished_with(id, PollOptions::default(), |_| {})
            .await
    }

    /// Polls a task until it finishes
    ///
    /// # Errors
    ///
    /// Returns [`ExaError::ResourceFailed`] carrying the task's error if it
    /// fails or is canceled, [`ExaError::Timeout`] past `opts.timeout`, or any
    /// request error.
    pub async fn poll_until_finished_with<P>(
        &self,
        id: &str,
        opts: PollOptions,
        on_poll: P,
    ) -> Result<ResearchTask, ExaError>
    where
        P: FnMut(&ResearchTask),
    {
        poll_until_terminal(opts, || self.get(id), on_poll).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Research API resource
    #[must_use]
    pub const fn research(&self) -> Research<'_, C> {
        Research::new(self)
    }
}
