use crate::catalog;
use crate::constants::{PROMPT_DESCRIPTION_PREFIX, SERVER_NAME, TOOL_SEARCH};
use crate::error::AppError;
use crate::service::SearchService;
use crate::validation::prompt_arguments;
use mcpkit::capability::{ServerCapabilities, ServerInfo};
use mcpkit::error::McpError;
use mcpkit::types::content::Content;
use mcpkit::types::prompt::{GetPromptResult, Prompt};
use mcpkit::types::tool::{CallToolResult, Tool, ToolOutput};
use mcpkit::{Context, PromptHandler, ServerHandler, ToolHandler};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RagWebBrowserMcpServer {
    service: Arc<SearchService>,
}

impl RagWebBrowserMcpServer {
    #[must_use]
    pub fn new(service: SearchService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl ServerHandler for RagWebBrowserMcpServer {
    fn server_info(&self) -> ServerInfo {
        ServerInfo::new(SERVER_NAME, self.service.server_version())
    }

    fn capabilities(&self) -> ServerCapabilities {
        ServerCapabilities::new().with_tools().with_prompts()
    }

    fn instructions(&self) -> Option<String> {
        Some(
            "Use search with a Google Search phrase or a URL to get crawled web pages as text or Markdown. Results are returned as raw JSON; a result starting with \"Error: \" means the call failed. The search prompt runs the same query and returns the content as a user message.".to_string(),
        )
    }
}

impl ToolHandler for RagWebBrowserMcpServer {
    async fn list_tools(&self, _ctx: &Context<'_>) -> Result<Vec<Tool>, McpError> {
        Ok(catalog::list_tools())
    }

    // Failures travel in-band as "Error: ..." text, so this never returns Err.
    async fn call_tool(
        &self,
        name: &str,
        args: Value,
        _ctx: &Context<'_>,
    ) -> Result<ToolOutput, McpError> {
        let trace_id = Uuid::new_v4().to_string();
        let text = self.service.call_tool(name, &args, &trace_id).await;
        Ok(text_tool_output(text))
    }
}

impl PromptHandler for RagWebBrowserMcpServer {
    async fn list_prompts(&self, _ctx: &Context<'_>) -> Result<Vec<Prompt>, McpError> {
        Ok(catalog::list_prompts())
    }

    // Unlike tool calls, prompt failures are protocol errors.
    async fn get_prompt(
        &self,
        name: &str,
        args: Option<Map<String, Value>>,
        _ctx: &Context<'_>,
    ) -> Result<GetPromptResult, McpError> {
        if name != TOOL_SEARCH {
            return Err(McpError::invalid_params(
                "prompts/get",
                format!("Unknown prompt: {name}"),
            ));
        }

        let trace_id = Uuid::new_v4().to_string();
        let (parsed, content) = self
            .service
            .search_prompt(&prompt_arguments(args))
            .await
            .map_err(|error| {
                tracing::warn!(trace_id, code = error.code(), "prompt failed: {error}");
                prompt_error(&error)
            })?;

        Ok(GetPromptResult::user(content)
            .description(format!("{PROMPT_DESCRIPTION_PREFIX}{}", parsed.query)))
    }
}

fn prompt_error(error: &AppError) -> McpError {
    if error.is_validation() {
        McpError::invalid_params("prompts/get", error.to_string())
    } else {
        McpError::internal(error.to_string())
    }
}

fn text_tool_output(text: String) -> ToolOutput {
    ToolOutput::Success(CallToolResult {
        content: vec![Content::text(text)],
        is_error: None,
    })
}
