use mcpkit::ServerBuilder;
use mcpkit::error::McpError;
use mcpkit::transport::stdio::StdioTransport;
use rag_web_browser_mcp::config::{ApiToken, RuntimeConfig};
use rag_web_browser_mcp::mcp_server::RagWebBrowserMcpServer;
use rag_web_browser_mcp::service::SearchService;

#[tokio::main]
async fn main() -> Result<(), McpError> {
    dotenvy::dotenv().ok();

    let config = RuntimeConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.clone())
        .with_writer(std::io::stderr)
        .init();

    let api_token = ApiToken::resolve(std::env::args().skip(1)).map_err(|error| {
        tracing::error!("{error}");
        McpError::internal(format!("startup: {error}"))
    })?;

    tracing::info!(source = ?api_token.source(), "Loaded Apify API token");

    let service = SearchService::new(config, api_token)
        .map_err(|error| McpError::internal(format!("startup: {error}")))?;

    tracing::info!("Starting RAG Web Browser server");
    let handler = RagWebBrowserMcpServer::new(service);
    let server = ServerBuilder::new(handler.clone())
        .with_tools(handler.clone())
        .with_prompts(handler)
        .build();
    server.serve(StdioTransport::new()).await
}
