//! Prompt Proxy
//!
//! Forwards a validated prompt to Gemini with the server-held key and maps
//! the upstream result back. One outbound call per request, no retries.

use crate::config::ProxyConfig;
use crate::error::{ProxyError, Result};
use crate::gemini::{generate_content_url, PromptRequest, UpstreamPayload};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, warn};

pub struct PromptProxy {
    client: Client,
    config: ProxyConfig,
}

impl PromptProxy {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// The API key, or [`ProxyError::MissingApiKey`] when none is configured.
    pub fn require_api_key(&self) -> Result<&str> {
        self.config.configured_api_key().ok_or_else(|| {
            error!("Rejecting request: GEMINI_API_KEY is not configured");
            ProxyError::MissingApiKey
        })
    }

    /// Handle one raw request body, returning the upstream JSON on success.
    pub async fn handle(&self, body: &[u8]) -> Result<Value> {
        let api_key = self.require_api_key()?;

        let request = PromptRequest::parse(body).inspect_err(|_| {
            warn!("Rejecting request: missing or malformed prompt");
        })?;

        let model = request.mode.model(&self.config);
        let payload = UpstreamPayload::for_request(&request, &self.config);
        debug!(
            "Forwarding prompt to {} ({:?}, {} chars)",
            model,
            request.mode,
            request.prompt.len()
        );

        let resp = self
            .client
            .post(generate_content_url(&self.config.api_base, model))
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await
            .map_err(|e| transport_error("Gemini request failed", e))?;

        let status = resp.status();
        if !status.is_success() {
            let details = resp
                .text()
                .await
                .map_err(|e| transport_error("Failed to read Gemini error body", e))?;
            warn!("Gemini returned {} for model {}", status, model);
            return Err(ProxyError::Upstream { status, details });
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| transport_error("Failed to parse Gemini response", e))?;

        info!("Gemini {} responded {}", model, status);
        Ok(data)
    }
}

/// The request URL carries the API key, so it is stripped before the error
/// is logged or returned.
fn transport_error(context: &str, err: reqwest::Error) -> ProxyError {
    let message = err.without_url().to_string();
    error!("{}: {}", context, message);
    ProxyError::Internal(message)
}
