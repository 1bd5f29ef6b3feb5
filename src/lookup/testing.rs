// src/lookup/testing.rs
//! In-memory transport used by the lookup tests

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use tokio::time::Instant;

use crate::core::ProviderTransport;
use crate::error::Result;

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub body: Value,
    pub at: Instant,
}

impl RecordedCall {
    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

type Handler = dyn Fn(&RecordedCall) -> Result<Value> + Send + Sync;

/// Answers every call through `handler` and keeps a log of calls
pub(crate) struct FakeTransport {
    handler: Box<Handler>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&RecordedCall) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderTransport for FakeTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        query: &[(String, String)],
        body: &Value,
    ) -> Result<Value> {
        let call = RecordedCall {
            endpoint: endpoint.to_string(),
            query: query.to_vec(),
            body: body.clone(),
            at: Instant::now(),
        };
        self.calls.lock().unwrap().push(call.clone());
        (self.handler)(&call)
    }
}
