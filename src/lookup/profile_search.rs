// src/lookup/profile_search.rs
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::config::LookupConfig;
use crate::core::{header_map, ProviderTransport, ServiceClient};
use crate::error::{LookupError, Result};
use crate::types::response::optional_array;
use crate::types::ProfileSearchFilters;

pub const PROFILE_SEARCH_ENDPOINT: &str = "/google-full-profiles";

/// Free-text LinkedIn profile search. One call, no delay, records are passed through as-is.
#[derive(Clone)]
pub struct ProfileSearchClient {
    transport: Arc<dyn ProviderTransport>,
}

impl ProfileSearchClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let settings = &config.profile_search;
        if settings.api_key.trim().is_empty() {
            return Err(LookupError::Config(
                "Profile search API key is not configured (set RAPIDAPI_KEY)".to_string(),
            ));
        }

        let headers = header_map(&[
            ("x-rapidapi-key", settings.api_key.as_str()),
            ("x-rapidapi-host", settings.host.as_str()),
            ("Content-Type", "application/json"),
        ])?;
        let transport =
            ServiceClient::new(settings.resolved_base_url(), headers, config.timeout_seconds)?;

        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn with_transport(transport: Arc<dyn ProviderTransport>) -> Self {
        Self { transport }
    }

    pub async fn search_profiles(&self, filters: &ProfileSearchFilters) -> Result<Vec<Value>> {
        let filters = filters.clamped();
        let body = serde_json::to_value(&filters)
            .map_err(|e| LookupError::Config(format!("Failed to encode search filters: {}", e)))?;

        info!(
            "Searching profiles: name='{}' title='{}' location='{}' limit={}",
            filters.name, filters.job_title, filters.location, filters.limit
        );

        let response = self
            .transport
            .post_json(PROFILE_SEARCH_ENDPOINT, &[], &body)
            .await?;

        let profiles = extract_profiles(&response)?;
        info!("Profile search returned {} records", profiles.len());
        Ok(profiles)
    }
}

/// Accepts a bare array or an object carrying the array under `data`
fn extract_profiles(response: &Value) -> Result<Vec<Value>> {
    if let Value::Array(items) = response {
        return Ok(items.clone());
    }

    Ok(optional_array(response, "data", PROFILE_SEARCH_ENDPOINT)?
        .map(|items| items.to_vec())
        .unwrap_or_default())
}
