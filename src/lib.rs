//! Company leadership lookup over people-search APIs.
//!
//! [`LookupClient`] resolves a company (name or LinkedIn URL) to a provider
//! organization and fetches its senior people in the requested regions.
//! [`ProfileSearchClient`] runs a free-text LinkedIn profile search.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod history;
pub mod lookup;
pub mod report;
pub mod types;
pub mod utils;

pub use config::LookupConfig;
pub use error::{LookupError, Result};
pub use lookup::{lookup_companies, CompanyResult, LookupClient, ProfileSearchClient};
pub use types::{LookupRequest, PersonRecord, ProfileSearchFilters};
