use rag_web_browser_mcp::config::{ApiToken, RuntimeConfig};
use rag_web_browser_mcp::service::SearchService;
use serial_test::serial;

fn live_service() -> SearchService {
    let token = ApiToken::resolve(std::iter::empty::<String>())
        .expect("Live tests require APIFY_API_TOKEN");
    SearchService::new(RuntimeConfig::from_env(), token).expect("service init")
}

#[tokio::test]
#[serial]
#[ignore = "calls the real RAG Web Browser actor; needs APIFY_API_TOKEN"]
async fn live_smoke_search() {
    let service = live_service();
    let body = service
        .execute(
            "search",
            &serde_json::json!({"query": "web browser for Anthropic", "maxResults": 1}),
        )
        .await
        .expect("live search should succeed");
    let parsed: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert!(parsed.is_array() || parsed.is_object());
}
