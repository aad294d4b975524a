use crate::config::SwitchSettings;
use crate::domain::event::FspId;
use crate::domain::ports::SwitchTransport;
use crate::domain::request::CommitRequest;
use crate::error::{CommitError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Addressing headers carried on every switch call.
pub const FSPIOP_SOURCE: &str = "fspiop-source";
pub const FSPIOP_DESTINATION: &str = "fspiop-destination";

/// Switch adapter speaking HTTP to the hub's transfers endpoint.
///
/// Issues a single `POST {base_url}/transfers` per commit attempt; no retries
/// happen at this layer. Connection failures, timeouts, and non-2xx responses
/// all surface as `Transport` errors.
pub struct HttpSwitchTransport {
    client: Client,
    base_url: Url,
}

impl HttpSwitchTransport {
    pub fn new(settings: &SwitchSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| CommitError::Transport(format!("failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            CommitError::Transport(format!(
                "invalid switch base URL {}: {}",
                settings.base_url, e
            ))
        })?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl SwitchTransport for HttpSwitchTransport {
    async fn post_transfer_commit(
        &self,
        request: &CommitRequest,
        source: &FspId,
        destination: &FspId,
    ) -> Result<()> {
        let url = self
            .base_url
            .join("transfers")
            .map_err(|e| CommitError::Transport(format!("invalid transfers URL: {}", e)))?;

        debug!(transfer_id = %request.transfer_id, url = %url, "POST transfer commit");

        let response = self
            .client
            .post(url)
            .header(FSPIOP_SOURCE, source.id.as_str())
            .header(FSPIOP_DESTINATION, destination.id.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| CommitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CommitError::Transport(format!(
                "switch returned {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_from_settings() {
        let transport = HttpSwitchTransport::new(&SwitchSettings::default()).unwrap();
        assert_eq!(transport.base_url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let settings = SwitchSettings {
            base_url: "not a url".to_string(),
            ..SwitchSettings::default()
        };

        let result = HttpSwitchTransport::new(&settings);
        assert!(matches!(result, Err(CommitError::Transport(_))));
    }
}
