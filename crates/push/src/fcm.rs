use std::sync::Arc;

use async_trait::async_trait;
use oshirase_core::config::FcmConfig;
use oshirase_core::push::entity::{PushResponse, TransportRequest, TransportResponse};
use oshirase_core::push::error::PushError;
use oshirase_core::push::port::{HttpTransport, PushSender};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::transport::ReqwestTransport;

/// # Summary
/// A push client for the Firebase Cloud Messaging legacy HTTP API.
///
/// # Invariants
/// * The configuration is validated at construction and immutable afterwards.
/// * The transport handle is reused across calls; `FcmClient` is safe to
///   share between tasks.
pub struct FcmClient {
    /// The validated client configuration.
    config: FcmConfig,
    /// The HTTP transport performing the network call.
    transport: Arc<dyn HttpTransport>,
}

impl FcmClient {
    /// # Summary
    /// Creates a new `FcmClient` backed by a reqwest transport.
    ///
    /// # Logic
    /// 1. Validates the configuration (the server key must not be blank).
    /// 2. Builds the reusable HTTP transport from the timeout and TLS flags.
    ///
    /// # Arguments
    /// * `config` - The FCM client configuration.
    ///
    /// # Returns
    /// * A ready-to-use client, or `PushError::Config` if the configuration
    ///   is invalid. No network call is attempted here.
    pub fn new(config: FcmConfig) -> Result<Self, PushError> {
        config.validate()?;
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// # Summary
    /// Creates a new `FcmClient` with an injected transport.
    ///
    /// # Logic
    /// Validates the configuration, then adopts the given transport as-is.
    /// Used by callers that pool their own client or substitute a stub.
    ///
    /// # Arguments
    /// * `config` - The FCM client configuration.
    /// * `transport` - The transport to execute requests with.
    ///
    /// # Returns
    /// * A ready-to-use client, or `PushError::Config`.
    pub fn with_transport(
        config: FcmConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, PushError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// # Summary
    /// Sends a caller-built top-level request body to FCM.
    ///
    /// # Logic
    /// 1. Serializes `body` to JSON.
    /// 2. POSTs it with the `Authorization`, `Content-Type` and empty
    ///    `Expect` headers.
    /// 3. Classifies the HTTP response into a `PushResponse`.
    ///
    /// # Arguments
    /// * `body` - The complete top-level request mapping. Callers normally
    ///   go through `send_notification`; this is the escape hatch for
    ///   advanced payloads (`to`, `condition`, raw `data`-only messages).
    ///
    /// # Returns
    /// * `Ok(PushResponse)` for every received HTTP response.
    /// * `Err(PushError::Transport)` when no response was received.
    pub async fn send_body(&self, body: &Map<String, Value>) -> Result<PushResponse, PushError> {
        let payload = Value::Object(body.clone()).to_string();
        debug!(url = %self.config.api_url, bytes = payload.len(), "sending FCM request");

        let request = TransportRequest {
            url: self.config.api_url.clone(),
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("key={}", self.config.server_key),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
                // Empty value suppresses "100-continue" negotiation, which
                // some frontends mishandle
                ("Expect".to_string(), String::new()),
            ],
            body: payload,
        };

        let response = self.transport.execute(request).await?;
        Ok(classify(response))
    }
}

#[async_trait]
impl PushSender for FcmClient {
    /// # Summary
    /// Sends a notification to a set of registration tokens.
    ///
    /// # Logic
    /// 1. Builds the body as `{"registration_ids": tokens, "notification":
    ///    notification}`.
    /// 2. Shallow-merges `options` on top; same-named top-level keys are
    ///    overwritten, so options may replace `registration_ids` (e.g. with
    ///    `to`) or add `data`, `priority`, `collapse_key`, ...
    /// 3. Delegates to `send_body`.
    ///
    /// # Arguments
    /// * `tokens` - The destination registration ids.
    /// * `notification` - The notification payload (title / body / sound / ...).
    /// * `options` - Additional top-level fields, empty for plain sends.
    ///
    /// # Returns
    /// * `Ok(PushResponse)` with the normalized outcome.
    /// * `Err(PushError)` on transport failure.
    async fn send_notification(
        &self,
        tokens: &[String],
        notification: Map<String, Value>,
        options: Map<String, Value>,
    ) -> Result<PushResponse, PushError> {
        let mut body = Map::new();
        body.insert("registration_ids".to_string(), json!(tokens));
        body.insert("notification".to_string(), Value::Object(notification));

        for (key, value) in options {
            body.insert(key, value);
        }

        self.send_body(&body).await
    }
}

/// # Summary
/// Normalizes a received HTTP response into a `PushResponse`.
///
/// # Logic
/// 1. Non-2xx: the body is stripped of HTML markup and reported under the
///    original status code.
/// 2. 2xx with an `"Error"` marker in the body: reported as 400 with the
///    raw body.
/// 3. Anything else: success, the raw body is handed back in `result`.
fn classify(response: TransportResponse) -> PushResponse {
    if !response.is_ok() {
        warn!(status = response.status, "FCM request rejected");
        let cleaned = strip_tags(&response.body);
        return prepare_response(response.status, &cleaned, None);
    }

    // Offset 0 intentionally does not count: existing callers rely on a
    // body starting with "Error" passing through as success, and FCM error
    // bodies carry the marker inside a JSON object, never at the start.
    if matches!(response.body.find("Error"), Some(pos) if pos > 0) {
        warn!("FCM response body reports an error");
        return prepare_response(400, &response.body, None);
    }

    prepare_response(200, "Notification sent successfully", Some(response.body))
}

/// Builds a `PushResponse` with the standard reason phrase prefixed to the
/// message, e.g. `prepare_response(500, "lost connection", None)` yields
/// "Internal Server Error, lost connection".
fn prepare_response(code: u16, message: &str, result: Option<String>) -> PushResponse {
    PushResponse {
        code,
        message: format!("{}, {}", reason_phrase(code), message),
        result,
    }
}

/// Reason phrases for the status codes FCM is known to answer with.
/// Unknown codes map to an empty phrase.
fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    }
}

/// Removes `<...>` tag spans from an HTML error page, keeping the text.
fn strip_tags(input: &str) -> String {
    let mut stripped = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if in_tag => {}
            _ => stripped.push(ch),
        }
    }
    stripped
}
