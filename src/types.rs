use serde::Deserialize;
use std::time::Duration;

/// Validated `search` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArguments {
    pub query: String,
    pub max_results: u64,
}

/// One outbound GET against the actor endpoint.
#[derive(Clone)]
pub struct UpstreamRequest {
    pub url: String,
    pub authorization: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for UpstreamRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamRequest")
            .field("url", &self.url)
            .field("authorization", &"Bearer <redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Apify error body, e.g. `{"error": {"type": "...", "message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorBody {
    pub error: Option<UpstreamErrorInfo>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorInfo {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
}
