use backon::{ExponentialBuilder, Retryable};
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::ExaError};

/// Exa API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and API configuration. It never retries on its own; install a backoff with
/// [`Client::with_backoff`] to retry retryable failures.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
    backoff: Option<ExponentialBuilder>,
}

impl Client<crate::config::ExaConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication:
    /// - `EXA_API_KEY` for API key authentication
    /// - `EXA_BASE_URL` for custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::ExaConfig::new())
    }

    /// Creates a client authenticated with the given API key
    #[must_use]
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self::with_config(crate::config::ExaConfig::new().with_api_key(key))
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("reqwest client"),
            config,
            backoff: None,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Enables retries of retryable errors with the given backoff
    ///
    /// See [`crate::retry::default_backoff_builder`] for a sensible default.
    #[must_use]
    pub const fn with_backoff(mut self, backoff: ExponentialBuilder) -> Self {
        self.backoff = Some(backoff);
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O, ExaError> {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .get(self.config.url(path))
                .headers(headers)
                .query(&self.config.query())
                .build()?)
        };
        self.execute(mk).await
    }

    pub(crate) async fn get_with_query<Q, O>(&self, path: &str, query: &Q) -> Result<O, ExaError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .get(self.config.url(path))
                .headers(headers)
                .query(&self.config.query())
                .query(query)
                .build()?)
        };
        self.execute(mk).await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: I) -> Result<O, ExaError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .post(self.config.url(path))
                .headers(headers)
                .query(&self.config.query())
                .json(&body)
                .build()?)
        };
        self.execute(mk).await
    }

    /// POST without a request body (cancel-style endpoints)
    pub(crate) async fn post_empty<O: DeserializeOwned>(&self, path: &str) -> Result<O, ExaError> {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .post(self.config.url(path))
                .headers(headers)
                .query(&self.config.query())
                .build()?)
        };
        self.execute(mk).await
    }

    pub(crate) async fn patch<I, O>(&self, path: &str, body: I) -> Result<O, ExaError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .patch(self.config.url(path))
                .headers(headers)
                .query(&self.config.query())
                .json(&body)
                .build()?)
        };
        self.execute(mk).await
    }

    pub(crate) async fn delete<O: DeserializeOwned>(&self, path: &str) -> Result<O, ExaError> {
        let mk = || async {
            let headers = self.config.headers()?;
            Ok(self
                .http
                .delete(self.config.url(path))
                .headers(headers)
                .query(&self.config.query())
                .build()?)
        };
        self.execute(mk).await
    }

    async fn execute<O, M, Fut>(&self, mk: M) -> Result<O, ExaError>
    where
        O: DeserializeOwned,
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, ExaError>> + Send,
    {
        // Validate auth before any request
        self.config.validate_auth()?;

        let bytes = self.execute_raw(mk).await?;
        // Some deletes answer with an empty body
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };
        let resp: O =
            serde_json::from_slice(body).map_err(|e| crate::error::map_deser(&e, &bytes))?;
        Ok(resp)
    }

    async fn execute_raw<M, Fut>(&self, mk: M) -> Result<bytes::Bytes, ExaError>
    where
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, ExaError>> + Send,
    {
        let http_client = self.http.clone();

        let attempt = || async {
            let request = mk().await?;
            let method = request.method().clone();
            let path = request.url().path().to_owned();
            tracing::debug!(%method, %path, "sending exa request");

            let response = http_client
                .execute(request)
                .await
                .map_err(ExaError::Reqwest)?;

            let status = response.status();
            let headers = response.headers().clone();
            let bytes = response.bytes().await.map_err(ExaError::Reqwest)?;

            if status.is_success() {
                tracing::debug!(%method, %path, status = status.as_u16(), "exa request succeeded");
                return Ok(bytes);
            }

            tracing::warn!(%method, %path, status = status.as_u16(), "exa request failed");
            Err(crate::error::deserialize_api_error(status, &headers, &bytes))
        };

        match self.backoff {
            Some(backoff) => {
                attempt
                    .retry(backoff)
                    .when(ExaError::is_retryable)
                    .notify(|err, dur| {
                        tracing::debug!(error = %err, delay = ?dur, "retrying exa request");
                    })
                    .await
            }
            None => attempt().await,
        }
    }
}
