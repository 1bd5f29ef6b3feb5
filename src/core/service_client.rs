// src/core/service_client.rs
//! HTTP transport shared by the provider clients - every provider call is a JSON POST

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{LookupError, Result};

/// Seam between the lookup clients and the network.
#[async_trait]
pub trait ProviderTransport: Send + Sync {
    /// POST `body` to `endpoint` with the given query pairs and return the parsed JSON body.
    /// Repeated keys (e.g. `organization_locations[]`) are sent in order.
    async fn post_json(&self, endpoint: &str, query: &[(String, String)], body: &Value)
        -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client for one provider; `headers` are attached to every request
    pub fn new(base_url: impl Into<String>, headers: HeaderMap, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| LookupError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ProviderTransport for ServiceClient {
    async fn post_json(
        &self,
        endpoint: &str,
        query: &[(String, String)],
        body: &Value,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {} ({} query params)", url, query.len());

        let response = self
            .client
            .post(&url)
            .query(query)
            .json(body)
            .send()
            .await
            .map_err(|e| LookupError::transport(endpoint, None, e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| LookupError::transport(endpoint, Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            error!("Provider error {} from {}: {}", status, url, response_text);
            return Err(LookupError::transport(
                endpoint,
                Some(status.as_u16()),
                format!("HTTP {}: {}", status, response_text),
            ));
        }

        serde_json::from_str(&response_text)
            .map_err(|e| LookupError::malformed(endpoint, format!("body is not JSON: {}", e)))
    }
}

/// Build a static header set; invalid names or values are configuration errors
pub fn header_map(pairs: &[(&str, &str)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| LookupError::Config(format!("Invalid header name: {}", name)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| LookupError::Config(format!("Invalid value for header {}", name)))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
