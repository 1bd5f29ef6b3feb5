// src/core/mod.rs
//! Core services shared by the provider clients

pub mod service_client;

pub use service_client::{header_map, ProviderTransport, ServiceClient};
