// src/types/request.rs
use serde::{Deserialize, Serialize};

use crate::utils::company_name_from_identifier;

/// Upper bound on profile search results accepted by the provider
pub const MAX_PROFILE_LIMIT: u32 = 50;
pub const DEFAULT_PROFILE_LIMIT: u32 = 10;

/// Company employee lookup input. `regions` is expected to be non-empty;
/// codes are forwarded to the provider as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub company_identifier: String,
    pub regions: Vec<String>,
}

impl LookupRequest {
    pub fn new(company_identifier: impl Into<String>, regions: Vec<String>) -> Self {
        Self {
            company_identifier: company_identifier.into(),
            regions,
        }
    }

    /// Name sent to the company search (last path segment for URLs)
    pub fn company_name(&self) -> String {
        company_name_from_identifier(&self.company_identifier)
    }
}

/// Free-text profile search filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSearchFilters {
    pub name: String,
    pub company_name: String,
    pub job_title: String,
    pub location: String,
    pub keywords: String,
    pub limit: u32,
}

impl Default for ProfileSearchFilters {
    fn default() -> Self {
        Self {
            name: String::new(),
            company_name: String::new(),
            job_title: String::new(),
            location: String::new(),
            keywords: String::new(),
            limit: DEFAULT_PROFILE_LIMIT,
        }
    }
}

impl ProfileSearchFilters {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Copy with `limit` clamped to 1..=50
    pub fn clamped(&self) -> Self {
        Self {
            limit: self.limit.clamp(1, MAX_PROFILE_LIMIT),
            ..self.clone()
        }
    }
}
