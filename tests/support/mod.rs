#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`
use truthguard_rs::serper::Searcher;
use truthguard_rs::ProxyError;

/// Canned searcher that remembers every `(query, num)` it was asked for.
pub struct FakeSearcher {
    pub reply: Box<dyn Fn() -> Result<Value, ProxyError> + Send + Sync>,
    pub calls: Arc<Mutex<Vec<(String, u64)>>>,
}

impl FakeSearcher {
    pub fn new(reply: impl Fn() -> Result<Value, ProxyError> + Send + Sync + 'static) -> Self {
        Self { reply: Box::new(reply), calls: Arc::new(Mutex::new(Vec::new())) }
    }
}

#[async_trait::async_trait]
impl Searcher for FakeSearcher {
    async fn search(&self, query: &str, num: u64) -> Result<Value, ProxyError> {
        self.calls.lock().unwrap().push((query.to_string(), num));
        (self.reply)()
    }
}

pub async fn post_search(app: Router, body: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(
            Request::post("/api/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let v: Value = serde_json::from_slice(&bytes).unwrap();
    (status, v)
}
