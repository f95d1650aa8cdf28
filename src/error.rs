//! Errors surfaced by the search relay.
//!
//! Every variant is reported to the HTTP caller as `{ "error": <message> }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub const MISSING_QUERY_MESSAGE: &str = "Missing query";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("SERPER_API_KEY not configured on server.")]
    Config,

    #[error("{0}")]
    BadRequest(String),

    /// Non-success upstream reply; status and body are relayed as-is.
    #[error("{body}")]
    Upstream { status: StatusCode, body: String },

    #[error("{0}")]
    Transport(String),
}

impl ProxyError {
    pub fn missing_query() -> Self { ProxyError::BadRequest(MISSING_QUERY_MESSAGE.into()) }

    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Config | ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => *status,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self { ProxyError::Transport(err.to_string()) }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ProxyError::Config.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ProxyError::missing_query().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ProxyError::Transport("boom".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        let up = ProxyError::Upstream { status: StatusCode::TOO_MANY_REQUESTS, body: "slow down".into() };
        assert_eq!(up.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(up.to_string(), "slow down");
    }

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(ProxyError::Config.to_string(), "SERPER_API_KEY not configured on server.");
        assert_eq!(ProxyError::missing_query().to_string(), "Missing query");
    }
}
