use std::time::Duration;

use crate::server::{
    compute::model::{DeleteInstanceRequest, InsertInstanceRequest, Operation},
    error::compute::ComputeError,
};

/// Pause between wait calls that return a still-running operation.
///
/// The provider's wait endpoint long-polls, so consecutive not-done answers normally
/// arrive minutes apart; the delay only matters against an endpoint that answers
/// immediately.
pub const DEFAULT_WAIT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Maximum number of wait calls issued for a single operation.
pub const DEFAULT_WAIT_ATTEMPT_LIMIT: usize = 120;

/// Client for the provider's compute instance API.
///
/// Wraps a reqwest client with the provider base URL and bearer token. The client is
/// cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ComputeClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    wait_retry_delay: Duration,
    wait_attempt_limit: usize,
}

impl ComputeClient {
    /// Creates a builder for configuring a [`ComputeClient`]
    pub fn builder() -> ComputeClientBuilder {
        ComputeClientBuilder::default()
    }

    /// Create an instance in the project and zone named by the request.
    ///
    /// Posts the instance resource to the provider's insert endpoint and returns the
    /// zonal operation tracking the creation. The operation is usually still running
    /// when returned; pass it to [`ComputeClient::wait_for_operation`] to block until
    /// it finishes.
    pub async fn insert_instance(
        &self,
        request: &InsertInstanceRequest,
    ) -> Result<Operation, ComputeError> {
        let endpoint = format!(
            "/projects/{}/zones/{}/instances",
            request.project, request.zone
        );

        let http_request = self
            .http
            .post(format!("{}{}", self.base_url, endpoint))
            .json(&request.instance_resource);

        self.dispatch(http_request, &endpoint).await
    }

    /// Delete the instance named by the request.
    ///
    /// Issues a delete against the provider's instance endpoint and returns the zonal
    /// operation tracking the deletion.
    pub async fn delete_instance(
        &self,
        request: &DeleteInstanceRequest,
    ) -> Result<Operation, ComputeError> {
        let endpoint = format!(
            "/projects/{}/zones/{}/instances/{}",
            request.project, request.zone, request.instance
        );

        let http_request = self.http.delete(format!("{}{}", self.base_url, endpoint));

        self.dispatch(http_request, &endpoint).await
    }

    /// Block until the given zonal operation finishes.
    ///
    /// Repeatedly calls the provider's operation wait endpoint, which holds each request
    /// open until the operation progresses or the provider's long-poll window expires,
    /// until the operation reports `DONE`. A finished operation carrying an error is
    /// surfaced as [`ComputeError::OperationFailed`].
    ///
    /// Consecutive calls are spaced by the configured retry delay, and an operation that
    /// is still not done after the configured attempt limit fails with
    /// [`ComputeError::WaitTimedOut`].
    ///
    /// # Arguments
    /// - `project` - Project the operation belongs to
    /// - `zone` - Zone the operation belongs to
    /// - `operation` - The operation returned by an insert or delete call
    pub async fn wait_for_operation(
        &self,
        project: &str,
        zone: &str,
        operation: &Operation,
    ) -> Result<Operation, ComputeError> {
        let name = operation
            .name
            .as_deref()
            .ok_or(ComputeError::MissingOperationName)?;

        let endpoint = format!("/projects/{}/zones/{}/operations/{}/wait", project, zone, name);

        for attempt in 1..=self.wait_attempt_limit {
            let http_request = self.http.post(format!("{}{}", self.base_url, endpoint));
            let operation = self.dispatch(http_request, &endpoint).await?;

            if !operation.is_done() {
                if attempt < self.wait_attempt_limit {
                    tokio::time::sleep(self.wait_retry_delay).await;
                }
                continue;
            }

            if let Some(error) = &operation.error {
                return Err(ComputeError::OperationFailed {
                    operation: name.to_string(),
                    message: describe_operation_error(error),
                });
            }

            return Ok(operation);
        }

        Err(ComputeError::WaitTimedOut {
            operation: name.to_string(),
            attempts: self.wait_attempt_limit,
        })
    }

    /// Sends a prepared request with auth attached and parses the operation response.
    async fn dispatch(
        &self,
        http_request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<Operation, ComputeError> {
        let response = http_request.bearer_auth(&self.token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(ComputeError::Api {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message,
            });
        }

        Ok(response.json::<Operation>().await?)
    }
}

/// Joins the detail entries of a failed operation into a single message.
fn describe_operation_error(error: &crate::server::compute::model::OperationError) -> String {
    if error.errors.is_empty() {
        return "operation reported an error with no details".to_string();
    }

    error
        .errors
        .iter()
        .map(|detail| {
            match (&detail.code, &detail.message) {
                (Some(code), Some(message)) => format!("{}: {}", code, message),
                (Some(code), None) => code.clone(),
                (None, Some(message)) => message.clone(),
                (None, None) => "unknown error".to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builder for [`ComputeClient`]
#[derive(Default)]
pub struct ComputeClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    wait_retry_delay: Option<Duration>,
    wait_attempt_limit: Option<usize>,
}

impl ComputeClientBuilder {
    /// Set the provider API base URL, e.g. `https://compute.googleapis.com/compute/v1`
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Set the bearer token sent with every provider request
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Set the pause between wait calls, defaults to [`DEFAULT_WAIT_RETRY_DELAY`]
    pub fn wait_retry_delay(mut self, delay: Duration) -> Self {
        self.wait_retry_delay = Some(delay);
        self
    }

    /// Set the wait call limit per operation, defaults to [`DEFAULT_WAIT_ATTEMPT_LIMIT`]
    pub fn wait_attempt_limit(mut self, limit: usize) -> Self {
        self.wait_attempt_limit = Some(limit);
        self
    }

    /// Build the configured [`ComputeClient`]
    ///
    /// # Returns
    /// The client, or a [`ComputeError`] when the base URL or token is missing, the base
    /// URL does not parse as an HTTP URL, or the underlying HTTP client fails to build.
    pub fn build(self) -> Result<ComputeClient, ComputeError> {
        let base_url = self
            .base_url
            .ok_or(ComputeError::Misconfigured("base_url"))?;
        let token = self.token.ok_or(ComputeError::Misconfigured("token"))?;

        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|_| ComputeError::InvalidBaseUrl(base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ComputeError::InvalidBaseUrl(base_url));
        }

        let http = reqwest::Client::builder().build()?;

        Ok(ComputeClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            wait_retry_delay: self.wait_retry_delay.unwrap_or(DEFAULT_WAIT_RETRY_DELAY),
            wait_attempt_limit: self.wait_attempt_limit.unwrap_or(DEFAULT_WAIT_ATTEMPT_LIMIT),
        })
    }
}
