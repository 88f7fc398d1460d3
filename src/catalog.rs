use crate::constants::{
    ARG_MAX_RESULTS, ARG_QUERY, DEFAULT_MAX_RESULTS, MAX_RESULTS_DESCRIPTION,
    MAX_RESULTS_PROMPT_DESCRIPTION, QUERY_DESCRIPTION, TOOL_SEARCH, TOOL_SEARCH_DESCRIPTION,
};
use mcpkit::types::prompt::Prompt;
use mcpkit::types::tool::{Tool, ToolAnnotations};
use once_cell::sync::Lazy;

static SEARCH_TOOL: Lazy<Tool> = Lazy::new(search_tool_schema);
static SEARCH_PROMPT: Lazy<Prompt> = Lazy::new(search_prompt_schema);

/// The tools this server offers: only `search`.
#[must_use]
pub fn list_tools() -> Vec<Tool> {
    tracing::info!("List available tools");
    vec![SEARCH_TOOL.clone()]
}

/// The same `search` capability, offered as a prompt.
#[must_use]
pub fn list_prompts() -> Vec<Prompt> {
    tracing::info!("List available prompts");
    vec![SEARCH_PROMPT.clone()]
}

fn search_tool_schema() -> Tool {
    Tool::new(TOOL_SEARCH)
        .description(TOOL_SEARCH_DESCRIPTION)
        .input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": QUERY_DESCRIPTION
                },
                "maxResults": {
                    "type": "number",
                    "description": MAX_RESULTS_DESCRIPTION,
                    "default": DEFAULT_MAX_RESULTS
                }
            },
            "required": ["query"]
        }))
        .annotations(ToolAnnotations::read_only())
}

fn search_prompt_schema() -> Prompt {
    Prompt::new(TOOL_SEARCH)
        .description(TOOL_SEARCH_DESCRIPTION)
        .required_arg(ARG_QUERY, QUERY_DESCRIPTION)
        .optional_arg(ARG_MAX_RESULTS, MAX_RESULTS_PROMPT_DESCRIPTION)
}
