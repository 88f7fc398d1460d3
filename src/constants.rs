pub const SERVER_NAME: &str = "rag-web-browser";

pub const TOOL_SEARCH: &str = "search";
pub const TOOL_SEARCH_DESCRIPTION: &str =
    "Search phrase or a URL at Google and return crawled web pages as text or Markdown";
pub const QUERY_DESCRIPTION: &str = "Google Search keywords or a URL of a specific web page";
pub const MAX_RESULTS_DESCRIPTION: &str =
    "The maximum number of top organic Google Search results whose web pages will be extracted";
pub const MAX_RESULTS_PROMPT_DESCRIPTION: &str =
    "The maximum number of top organic Google Search results whose web pages will be extracted (default: 1)";
pub const PROMPT_DESCRIPTION_PREFIX: &str = "Markdown content for search query: ";

pub const ARG_QUERY: &str = "query";
pub const ARG_MAX_RESULTS: &str = "maxResults";

pub const DEFAULT_MAX_RESULTS: u64 = 1;

pub const ACTOR_BASE_URL: &str = "https://rag-web-browser.apify.actor/search";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 45_000;
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 10 * 1_048_576;
pub const MIN_MAX_RESPONSE_BYTES: usize = 1_024;

pub const ERROR_PREFIX: &str = "Error: ";

pub const ERROR_UNSUPPORTED_TOOL: &str = "UNSUPPORTED_TOOL";
pub const ERROR_MISSING_ARGUMENTS: &str = "MISSING_ARGUMENTS";
pub const ERROR_INVALID_ARGUMENTS_TYPE: &str = "INVALID_ARGUMENTS_TYPE";
pub const ERROR_MISSING_QUERY: &str = "MISSING_QUERY";
pub const ERROR_INVALID_MAX_RESULTS: &str = "INVALID_MAX_RESULTS";
pub const ERROR_UPSTREAM_TIMEOUT: &str = "UPSTREAM_TIMEOUT";
pub const ERROR_UPSTREAM_CALL_FAILED: &str = "UPSTREAM_CALL_FAILED";
pub const ERROR_MISSING_API_TOKEN: &str = "MISSING_API_TOKEN";
pub const ERROR_INVALID_API_TOKEN: &str = "INVALID_API_TOKEN";
pub const ERROR_INTERNAL: &str = "INTERNAL_ERROR";

pub const ENV_APIFY_API_TOKEN: &str = "APIFY_API_TOKEN";
pub const ENV_ENDPOINT: &str = "RAG_WEB_BROWSER_ENDPOINT";
pub const ENV_MAX_RESPONSE_BYTES: &str = "RAG_WEB_BROWSER_MAX_RESPONSE_BYTES";
pub const ENV_LOG: &str = "RAG_WEB_BROWSER_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn,rag_web_browser_mcp=info";
