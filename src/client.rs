//! Submission client for the NiFi ListenHTTP processor.
//!
//! Mirrors the endpoint contract: an optional GET health check on the
//! health port, then a JSON POST of the payload to the listen port.
//! Both must answer 200; anything else is a submission failure.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;

use crate::error::{KlabNifiError, Result};
use crate::request::{ObservationRequest, WrappedObservationRequest};

const HEALTHCHECK_PATH: &str = "/healthcheck";
const DEFAULT_HOST: &str = "http://127.0.0.1";
const DEFAULT_PORT: &str = "3306";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the listener.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme + host, without a port (e.g. `"http://127.0.0.1"`).
    pub host: String,
    /// Listen port of the ListenHTTP processor.
    pub port: String,
    /// Health-check port, when the flow exposes one.
    pub healthport: Option<String>,
    /// Request timeout for both the health check and the POST.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            healthport: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for submitting observation payloads.
pub struct ListenHttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ListenHttpClient {
    /// Client with default connection settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// GET `<host>:<healthport>/healthcheck`, expecting 200.
    pub async fn health_check(&self) -> Result<()> {
        let healthport = self.config.healthport.as_ref().ok_or_else(|| {
            KlabNifiError::Submission(
                "health check requested but no health port is configured".to_string(),
            )
        })?;

        let url = format!("{}:{}{}", self.config.host, healthport, HEALTHCHECK_PATH);
        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(KlabNifiError::Submission(format!(
                "health check returned HTTP {}",
                response.status()
            )));
        }

        tracing::info!("listener health check passed");
        Ok(())
    }

    /// Submit a self-contained observation request.
    pub async fn submit_observation(&self, request: &ObservationRequest) -> Result<()> {
        self.post_payload(request).await
    }

    /// Submit a request wrapping a prebuilt observation.
    pub async fn submit_wrapped(&self, request: &WrappedObservationRequest) -> Result<()> {
        self.post_payload(request).await
    }

    async fn post_payload<T: Serialize>(&self, payload: &T) -> Result<()> {
        if self.config.healthport.is_some() {
            self.health_check().await?;
        } else {
            tracing::info!("health check port not configured, skipping");
        }

        let url = format!("{}:{}", self.config.host, self.config.port);
        tracing::debug!(%url, "posting observation payload");

        let response = self.client.post(&url).json(payload).send().await?;

        if response.status() != StatusCode::OK {
            return Err(KlabNifiError::Submission(format!(
                "submit returned HTTP {}",
                response.status()
            )));
        }

        tracing::info!("observation payload submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_listener_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "http://127.0.0.1");
        assert_eq!(config.port, "3306");
        assert!(config.healthport.is_none());
    }

    #[tokio::test]
    async fn health_check_without_a_port_is_an_error() {
        let client = ListenHttpClient::new().unwrap();
        let err = client.health_check().await.unwrap_err();
        assert!(matches!(err, KlabNifiError::Submission(_)));
    }
}
