//! HTTP playground client.

use std::time::Duration;

use ureq::Agent;

use crate::{PublishError, Publisher};

/// Share endpoint of the public Go playground.
pub const DEFAULT_PLAYGROUND_URL: &str = "https://play.golang.org/share";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for a playground share endpoint.
pub struct PlaygroundClient {
    agent: Agent,
    url: String,
}

impl PlaygroundClient {
    /// Create a client posting to `url` with the given request timeout.
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            url: url.into(),
        }
    }

    /// Share endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Publisher for PlaygroundClient {
    fn share(&self, source: &str) -> Result<String, PublishError> {
        tracing::info!(url = %self.url, "Sending share request");

        let response = self
            .agent
            .post(&self.url)
            .header("Content-Type", "text/plain")
            .send(source.as_bytes())
            .map_err(|e| PublishError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(PublishError::Status { status, body });
        }

        let body = body
            .read_to_string()
            .map_err(|e| PublishError::Http(e.to_string()))?;
        parse_token(&body)
    }
}

/// Extract the share token from a response body.
fn parse_token(body: &str) -> Result<String, PublishError> {
    let token = body.trim();
    if token.is_empty() {
        return Err(PublishError::EmptyToken);
    }
    Ok(token.to_owned())
}
