// src/server.rs
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ProxyConfig, DEFAULT_NUM};
use crate::error::ProxyError;
use crate::serper::{Searcher, Serper};

pub const SEARCH_ROUTE: &str = "/api/search";

#[derive(Clone)]
pub struct ProxyState {
    /// `None` when the server was started without a credential.
    pub searcher: Option<Arc<dyn Searcher>>,
}

impl ProxyState {
    pub fn new(searcher: Option<Arc<dyn Searcher>>) -> Self { Self { searcher } }
}

/// `{ query, num? }` pulled leniently out of the request body.
#[derive(Debug, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub num: u64,
}

impl SearchRequest {
    /// `None` when there is no usable query: empty body, non-JSON body,
    /// missing, non-string or empty `query`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        let v: Value = serde_json::from_slice(body).ok()?;
        let query = v.get("query")?.as_str()?;
        if query.is_empty() {
            return None;
        }
        let num = v.get("num").and_then(parse_num).unwrap_or(DEFAULT_NUM);
        Some(Self { query: query.to_string(), num })
    }
}

/// `num` as a JSON integer or a string holding one.
fn parse_num(v: &Value) -> Option<u64> {
    match v {
        Value::String(s) => s.trim().parse().ok(),
        other => other.as_u64(),
    }
}

pub async fn search(
    State(state): State<Arc<ProxyState>>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let Some(searcher) = state.searcher.as_ref() else {
        tracing::warn!("search rejected: no upstream credential configured");
        return Err(ProxyError::Config);
    };
    let req = SearchRequest::parse(&body).ok_or_else(ProxyError::missing_query)?;

    match searcher.search(&req.query, req.num).await {
        Ok(data) => Ok(Json(data)),
        Err(err) => {
            match &err {
                ProxyError::Upstream { status, .. } => tracing::warn!(%status, "upstream search failed"),
                other => tracing::error!(error = %other, "proxy error"),
            }
            Err(err)
        }
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route(SEARCH_ROUTE, post(search))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn run_server(cfg: ProxyConfig) -> anyhow::Result<()> {
    let searcher = Serper::from_config(&cfg)?.map(|s| Arc::new(s) as Arc<dyn Searcher>);
    if searcher.is_none() {
        tracing::warn!("SERPER_API_KEY not set. {SEARCH_ROUTE} will return an error.");
    }
    let app = router(ProxyState::new(searcher));

    let listener = tokio::net::TcpListener::bind(cfg.addr()?).await?;
    tracing::info!(addr = %listener.local_addr()?, "API proxy running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
