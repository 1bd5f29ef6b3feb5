// src/lookup/batch.rs
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::LookupClient;
use crate::types::{LookupRequest, PersonRecord};

/// Most companies accepted in one batch
pub const MAX_COMPANIES: usize = 5;

/// Outcome of one company inside a batch; a failure only affects its own entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResult {
    pub company_url: String,
    pub regions: Vec<String>,
    pub employees: Vec<PersonRecord>,
    pub error: Option<String>,
}

impl CompanyResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Look up every company concurrently with the same regions. Results follow input order.
/// Companies past [`MAX_COMPANIES`] are not looked up and come back as failed entries.
pub async fn lookup_companies(
    client: &LookupClient,
    companies: &[String],
    regions: &[String],
) -> Vec<CompanyResult> {
    info!(
        "Looking up {} companies in regions {:?}",
        companies.len(),
        regions
    );

    let (accepted, rejected) = companies.split_at(companies.len().min(MAX_COMPANIES));
    if !rejected.is_empty() {
        warn!(
            "Skipping {} companies over the batch limit of {}",
            rejected.len(),
            MAX_COMPANIES
        );
    }

    let lookups = accepted.iter().map(|company_url| async move {
        let request = LookupRequest::new(company_url.clone(), regions.to_vec());
        match client.lookup(&request).await {
            Ok(employees) => CompanyResult {
                company_url: company_url.clone(),
                regions: regions.to_vec(),
                employees,
                error: None,
            },
            Err(e) => CompanyResult {
                company_url: company_url.clone(),
                regions: regions.to_vec(),
                employees: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    });

    let mut results = join_all(lookups).await;
    results.extend(rejected.iter().map(|company_url| CompanyResult {
        company_url: company_url.clone(),
        regions: regions.to_vec(),
        employees: Vec::new(),
        error: Some(format!(
            "At most {} companies can be searched at once",
            MAX_COMPANIES
        )),
    }));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::lookup::apollo_client::{COMPANY_SEARCH_ENDPOINT, PEOPLE_SEARCH_ENDPOINT};
    use crate::lookup::testing::FakeTransport;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_isolated() {
        let transport = Arc::new(FakeTransport::new(|call| {
            match (call.endpoint.as_str(), call.query_values("q_organization_name").first()) {
                (COMPANY_SEARCH_ENDPOINT, Some(&"broken")) => Err(LookupError::transport(
                    COMPANY_SEARCH_ENDPOINT,
                    Some(500),
                    "HTTP 500",
                )),
                (COMPANY_SEARCH_ENDPOINT, Some(&"ghost")) => Ok(json!({ "organizations": [] })),
                (COMPANY_SEARCH_ENDPOINT, _) => Ok(json!({ "organizations": [{ "id": "ok" }] })),
                (PEOPLE_SEARCH_ENDPOINT, _) => {
                    Ok(json!({ "people": [{ "first_name": "Ann" }, { "first_name": "Ben" }] }))
                }
                (other, _) => panic!("unexpected endpoint {}", other),
            }
        }));
        let client = LookupClient::with_transport(transport.clone(), Duration::from_millis(2000));

        let companies = vec![
            "https://www.linkedin.com/company/broken".to_string(),
            "https://www.linkedin.com/company/acme".to_string(),
            "https://www.linkedin.com/company/ghost".to_string(),
        ];
        let regions = vec!["us".to_string(), "gb".to_string()];
        let results = lookup_companies(&client, &companies, &regions).await;

        assert_eq!(results.len(), 3);
        assert!(results[0].error.as_deref().unwrap().contains("HTTP 500"));
        assert!(results[0].employees.is_empty());

        assert!(results[1].is_success());
        assert_eq!(results[1].employees.len(), 2);
        assert_eq!(results[1].employees[0].company, "acme");
        assert_eq!(results[1].regions, regions);

        assert_eq!(
            results[2].error.as_deref(),
            Some("Company ghost not found")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookups_run_concurrently() {
        let transport = Arc::new(FakeTransport::new(|call| match call.endpoint.as_str() {
            COMPANY_SEARCH_ENDPOINT => Ok(json!({ "organizations": [{ "id": "1" }] })),
            _ => Ok(json!({ "people": [] })),
        }));
        let client = LookupClient::with_transport(transport.clone(), Duration::from_millis(2000));

        let companies: Vec<String> = (0..3).map(|i| format!("company-{}", i)).collect();
        let started = tokio::time::Instant::now();
        lookup_companies(&client, &companies, &["us".to_string()]).await;

        // The delays overlap instead of adding up.
        assert!(started.elapsed() < Duration::from_millis(4000));
        assert_eq!(transport.calls().len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_companies_over_limit_are_not_looked_up() {
        let transport = Arc::new(FakeTransport::new(|call| match call.endpoint.as_str() {
            COMPANY_SEARCH_ENDPOINT => Ok(json!({ "organizations": [{ "id": "1" }] })),
            _ => Ok(json!({ "people": [] })),
        }));
        let client = LookupClient::with_transport(transport.clone(), Duration::from_millis(2000));

        let companies: Vec<String> = (0..MAX_COMPANIES + 1)
            .map(|i| format!("https://www.linkedin.com/company/company-{}", i))
            .collect();
        let results = lookup_companies(&client, &companies, &["us".to_string()]).await;

        assert_eq!(results.len(), MAX_COMPANIES + 1);
        assert!(results[..MAX_COMPANIES].iter().all(|r| r.is_success()));

        let skipped = &results[MAX_COMPANIES];
        assert_eq!(skipped.company_url, companies[MAX_COMPANIES]);
        assert!(skipped.error.as_deref().unwrap().contains("At most 5 companies"));
        assert_eq!(transport.calls().len(), MAX_COMPANIES * 2);
    }
}
