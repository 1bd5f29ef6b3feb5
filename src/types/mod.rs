pub mod person;
pub mod request;
pub mod response;

pub use person::{PersonRecord, ResolvedCompany};
pub use request::{LookupRequest, ProfileSearchFilters};
