use crate::client::RagWebBrowserClient;
use crate::config::{ApiToken, RuntimeConfig};
use crate::constants::TOOL_SEARCH;
use crate::error::AppError;
use crate::types::CallArguments;
use crate::validation::validate_call;
use serde_json::Value;
use std::time::Instant;

#[derive(Debug)]
pub struct SearchService {
    client: RagWebBrowserClient,
    server_version: String,
}

impl SearchService {
    pub fn new(config: RuntimeConfig, api_token: ApiToken) -> Result<Self, AppError> {
        let client = RagWebBrowserClient::new(config, api_token)?;

        Ok(Self {
            client,
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    #[must_use]
    pub fn server_version(&self) -> &str {
        &self.server_version
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        self.client.config()
    }

    /// Validates the call and runs it against the actor. Validation failures
    /// return before any network I/O.
    pub async fn execute(&self, name: &str, arguments: &Value) -> Result<String, AppError> {
        let args = validate_call(name, arguments)?;
        self.client.search(&args).await
    }

    /// Runs the `search` prompt: same validation and upstream call as the
    /// tool, but errors are returned rather than rendered as text.
    pub async fn search_prompt(
        &self,
        arguments: &Value,
    ) -> Result<(CallArguments, String), AppError> {
        let args = validate_call(TOOL_SEARCH, arguments)?;
        let body = self.client.search(&args).await?;
        Ok((args, body))
    }

    /// Same as [`Self::execute`], with every failure folded into the in-band
    /// `"Error: ..."` text. Always yields exactly one text payload.
    pub async fn call_tool(&self, name: &str, arguments: &Value, trace_id: &str) -> String {
        let started = Instant::now();
        match self.execute(name, arguments).await {
            Ok(body) => {
                tracing::info!(
                    trace_id,
                    bytes = body.len(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "tool call succeeded"
                );
                body
            }
            Err(error) => {
                if error.is_validation() {
                    tracing::warn!(trace_id, code = error.code(), "tool call rejected: {error}");
                } else {
                    tracing::error!(
                        trace_id,
                        code = error.code(),
                        duration_ms = started.elapsed().as_millis() as u64,
                        "tool call failed: {error}"
                    );
                }
                error.tool_text()
            }
        }
    }
}
