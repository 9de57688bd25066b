use std::time::Duration;

use async_trait::async_trait;
use oshirase_core::config::FcmConfig;
use oshirase_core::push::entity::{TransportRequest, TransportResponse};
use oshirase_core::push::error::PushError;
use oshirase_core::push::port::HttpTransport;
use reqwest::Client;

/// # Summary
/// The production `HttpTransport` implementation, backed by `reqwest`.
///
/// # Invariants
/// * One `Client` per transport, reused for every request.
/// * The timeout and TLS flags come from `FcmConfig` and never change.
pub struct ReqwestTransport {
    /// The underlying HTTP client.
    client: Client,
}

impl ReqwestTransport {
    /// # Summary
    /// Builds a transport from the client configuration.
    ///
    /// # Logic
    /// 1. Applies the configured request timeout.
    /// 2. rustls has no host-name-only switch, so either verification flag
    ///    being off disables certificate validation as a whole.
    ///
    /// # Arguments
    /// * `config` - The FCM client configuration.
    ///
    /// # Returns
    /// * The transport, or `PushError::Config` if the client cannot be built.
    pub fn new(config: &FcmConfig) -> Result<Self, PushError> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if !config.verify_tls_peer || !config.verify_tls_host {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| PushError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    /// # Summary
    /// Executes one POST request and collects the response.
    ///
    /// # Logic
    /// 1. Writes the prepared headers and body onto a POST request.
    /// 2. Awaits the response or the configured timeout.
    /// 3. Reads the body text; any network-level failure maps to
    ///    `PushError::Transport` with the underlying cause.
    ///
    /// # Arguments
    /// * `request` - The outbound request to execute.
    ///
    /// # Returns
    /// * `Ok(TransportResponse)` whenever an HTTP response was received,
    ///   regardless of status code.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, PushError> {
        let mut outgoing = self.client.post(&request.url);
        for (name, value) in &request.headers {
            outgoing = outgoing.header(name.as_str(), value.as_str());
        }

        let response = outgoing
            .body(request.body)
            .send()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
