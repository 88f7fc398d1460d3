use crate::config::{ApiToken, RuntimeConfig};
use crate::constants::{ARG_MAX_RESULTS, ARG_QUERY};
use crate::error::AppError;
use crate::parsing::parse_upstream_error_message;
use crate::types::{CallArguments, UpstreamRequest};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

#[derive(Debug)]
pub struct RagWebBrowserClient {
    http: reqwest::Client,
    config: RuntimeConfig,
    api_token: ApiToken,
}

impl RagWebBrowserClient {
    pub fn new(config: RuntimeConfig, api_token: ApiToken) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("rag-web-browser-mcp/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| {
                AppError::Internal(format!("Failed to create HTTP client: {error}"))
            })?;

        Ok(Self {
            http,
            config,
            api_token,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn build_request(&self, args: &CallArguments) -> Result<UpstreamRequest, AppError> {
        Ok(UpstreamRequest {
            url: build_request_url(&self.config.endpoint, args)?,
            authorization: self.api_token.bearer(),
            timeout: self.config.request_timeout(),
        })
    }

    /// Performs the single upstream attempt and returns the body re-encoded
    /// as compact JSON.
    pub async fn search(&self, args: &CallArguments) -> Result<String, AppError> {
        let request = self.build_request(args)?;
        tracing::info!(url = %request.url, "Calling RAG Web Browser");

        match tokio::time::timeout(request.timeout, self.execute(&request)).await {
            Ok(result) => result,
            Err(elapsed) => Err(AppError::UpstreamTimeout(format!(
                "{elapsed} after {} ms",
                request.timeout.as_millis()
            ))),
        }
    }

    async fn execute(&self, request: &UpstreamRequest) -> Result<String, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let authorization = HeaderValue::from_str(&request.authorization).map_err(|error| {
            AppError::UpstreamCallFailed(format!("Invalid authorization header: {error}"))
        })?;
        headers.insert(AUTHORIZATION, authorization);

        let response = self
            .http
            .get(request.url.as_str())
            .headers(headers)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let raw_body = self.read_response_body(response).await?;
        tracing::debug!(
            status = status.as_u16(),
            bytes = raw_body.len(),
            "Received response from RAG Web Browser"
        );

        if !status.is_success() {
            let fallback = status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string();
            let detail = parse_upstream_error_message(&raw_body, &fallback);
            return Err(AppError::UpstreamCallFailed(format!(
                "HTTP {}: {detail}",
                status.as_u16()
            )));
        }

        let parsed = serde_json::from_str::<Value>(&raw_body).map_err(|error| {
            AppError::UpstreamCallFailed(format!("Invalid JSON response: {error}"))
        })?;

        serde_json::to_string(&parsed).map_err(|error| {
            AppError::UpstreamCallFailed(format!("Failed to encode response: {error}"))
        })
    }

    async fn read_response_body(&self, response: reqwest::Response) -> Result<String, AppError> {
        let mut stream = response.bytes_stream();
        let mut bytes = Vec::<u8>::new();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(map_transport_error)?;

            if bytes.len() + chunk.len() > self.config.max_response_bytes {
                let max_bytes = self.config.max_response_bytes;
                let max_mebibytes = max_bytes as f64 / 1_048_576.0;
                return Err(AppError::UpstreamCallFailed(format!(
                    "Response body exceeded {max_bytes} byte limit ({max_mebibytes:.2} MiB)",
                )));
            }

            bytes.extend_from_slice(&chunk);
        }

        String::from_utf8(bytes).map_err(|error| {
            AppError::UpstreamCallFailed(format!("Response body was not valid UTF-8: {error}"))
        })
    }
}

/// Appends `query` and `maxResults` to the endpoint, url-encoded once.
pub fn build_request_url(endpoint: &str, args: &CallArguments) -> Result<String, AppError> {
    let mut url = url::Url::parse(endpoint).map_err(|error| {
        AppError::UpstreamCallFailed(format!("Invalid endpoint URL '{endpoint}': {error}"))
    })?;

    url.query_pairs_mut()
        .append_pair(ARG_QUERY, &args.query)
        .append_pair(ARG_MAX_RESULTS, &args.max_results.to_string());

    Ok(url.to_string())
}

fn map_transport_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::UpstreamTimeout(error.to_string())
    } else {
        AppError::UpstreamCallFailed(error.to_string())
    }
}
