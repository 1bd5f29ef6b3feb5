// src/lookup/apollo_client.rs
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::{LookupConfig, DEFAULT_REQUEST_DELAY_MS};
use crate::core::{header_map, ProviderTransport, ServiceClient};
use crate::error::{LookupError, Result};
use crate::types::response::{optional_array, required_array};
use crate::types::{LookupRequest, PersonRecord, ResolvedCompany};

pub const COMPANY_SEARCH_ENDPOINT: &str = "/api/v1/mixed_companies/search";
pub const PEOPLE_SEARCH_ENDPOINT: &str = "/api/v1/mixed_people/search";

pub const PERSON_SENIORITIES: [&str; 4] = ["director", "vp", "CXO", "SVP"];
pub const PEOPLE_PAGE: u32 = 1;
pub const PEOPLE_PER_PAGE: u32 = 200;

/// Company -> employees lookup against the company/people search provider.
///
/// Every lookup is two dependent calls (company search, then people search)
/// separated by a fixed courtesy delay. The client holds no mutable state, so
/// one instance can serve any number of concurrent lookups.
#[derive(Clone)]
pub struct LookupClient {
    transport: Arc<dyn ProviderTransport>,
    request_delay: Duration,
}

impl LookupClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        if config.apollo.api_key.trim().is_empty() {
            return Err(LookupError::Config(
                "Apollo API key is not configured (set APOLLO_API_KEY)".to_string(),
            ));
        }

        let headers = header_map(&[
            ("Cache-Control", "no-cache"),
            ("Content-Type", "application/json"),
            ("accept", "application/json"),
            ("x-api-key", config.apollo.api_key.as_str()),
        ])?;
        let transport =
            ServiceClient::new(config.apollo.base_url.clone(), headers, config.timeout_seconds)?;

        Ok(Self::with_transport(Arc::new(transport), config.request_delay()))
    }

    /// `request_delay` below 2000 ms is raised to 2000 ms
    pub fn with_transport(transport: Arc<dyn ProviderTransport>, request_delay: Duration) -> Self {
        Self {
            transport,
            request_delay: request_delay.max(Duration::from_millis(DEFAULT_REQUEST_DELAY_MS)),
        }
    }

    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// Resolve the company, wait, then fetch its senior people in the requested regions.
    /// Records keep provider order.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<Vec<PersonRecord>> {
        let company_name = request.company_name();
        let started = Instant::now();
        info!("Starting search for {} employees", company_name);

        let result = self.run_lookup(&company_name, &request.regions).await;

        match &result {
            Ok(employees) => info!(
                "Found {} employees for {} in {:.2}s",
                employees.len(),
                company_name,
                started.elapsed().as_secs_f64()
            ),
            Err(e) => warn!("Lookup for {} failed: {}", company_name, e),
        }

        result
    }

    async fn run_lookup(&self, company_name: &str, regions: &[String]) -> Result<Vec<PersonRecord>> {
        let company = self.resolve_company(company_name, regions).await?;
        debug!(
            "Resolved {} to {} ({}, id {})",
            company_name, company.name, company.domain, company.id
        );

        info!("Waiting {}ms for rate limit", self.request_delay.as_millis());
        tokio::time::sleep(self.request_delay).await;

        let people = self.search_people(&company, regions).await?;

        Ok(people
            .iter()
            .map(|raw| PersonRecord::from_raw(raw, company_name))
            .collect())
    }

    /// First organization returned by the provider wins
    async fn resolve_company(&self, company_name: &str, regions: &[String]) -> Result<ResolvedCompany> {
        let mut query = vec![("q_organization_name".to_string(), company_name.to_string())];
        query.extend(location_params(regions));

        info!("Searching for company: {}", company_name);
        let started = Instant::now();

        let body = self
            .transport
            .post_json(COMPANY_SEARCH_ENDPOINT, &query, &json!({}))
            .await?;
        debug!(
            "Company search completed in {:.2}s",
            started.elapsed().as_secs_f64()
        );

        let candidate = optional_array(&body, "organizations", COMPANY_SEARCH_ENDPOINT)?
            .and_then(|organizations| organizations.first())
            .ok_or_else(|| LookupError::NotFound(company_name.to_string()))?;

        ResolvedCompany::from_raw(candidate).ok_or_else(|| {
            LookupError::malformed(COMPANY_SEARCH_ENDPOINT, "organization has no id")
        })
    }

    async fn search_people(&self, company: &ResolvedCompany, regions: &[String]) -> Result<Vec<Value>> {
        let mut query = vec![
            ("page".to_string(), PEOPLE_PAGE.to_string()),
            ("per_page".to_string(), PEOPLE_PER_PAGE.to_string()),
            ("organization_ids[]".to_string(), company.id.clone()),
        ];
        query.extend(
            PERSON_SENIORITIES
                .iter()
                .map(|seniority| ("person_seniorities[]".to_string(), seniority.to_string())),
        );
        query.extend(location_params(regions));

        info!("Searching for employees of {}", company.name);
        let started = Instant::now();

        let body = self
            .transport
            .post_json(PEOPLE_SEARCH_ENDPOINT, &query, &json!({}))
            .await?;
        debug!(
            "Employee search completed in {:.2}s",
            started.elapsed().as_secs_f64()
        );

        Ok(required_array(&body, "people", PEOPLE_SEARCH_ENDPOINT)?.to_vec())
    }
}

fn location_params(regions: &[String]) -> impl Iterator<Item = (String, String)> + '_ {
    regions
        .iter()
        .map(|region| ("organization_locations[]".to_string(), region.clone()))
}
