// src/lookup/mod.rs
pub mod apollo_client;
pub mod batch;
pub mod profile_search;

#[cfg(test)]
pub(crate) mod testing;

pub use apollo_client::LookupClient;
pub use batch::{lookup_companies, CompanyResult, MAX_COMPANIES};
pub use profile_search::ProfileSearchClient;
