use {
    crate::{domain::ActivationToken, utils::error_chain_fmt},
    reqwest::{Client, StatusCode},
    std::time::Duration,
};

/// Client for the backend's account activation endpoint
pub struct ActivationClient {
    http_client: Client,
    base_url: String,
}

#[derive(thiserror::Error)]
pub enum ActivationError {
    #[error("The activation endpoint answered with {0}.")]
    Rejected(StatusCode),
    #[error("Failed to reach the activation endpoint.")]
    Transport(#[source] reqwest::Error),
}

impl std::fmt::Debug for ActivationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ActivationClient {
    /// Without a `timeout` requests wait as long as the connection does.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let builder = Client::builder();
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    /// Ask the backend to activate the account behind `token`.
    /// Any 2xx answer counts as success.
    #[tracing::instrument(name = "Activating account on the backend", skip_all)]
    pub async fn activate(&self, token: &ActivationToken) -> Result<(), ActivationError> {
        let url = format!(
            "{}/v1/users/activate/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(token.as_ref())
        );
        let response = self
            .http_client
            .put(&url)
            .send()
            .await
            .map_err(ActivationError::Transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ActivationError::Rejected(status))
        }
    }
}
