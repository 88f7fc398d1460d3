#![no_main]

use libfuzzer_sys::fuzz_target;
use rag_web_browser_mcp::client::build_request_url;
use rag_web_browser_mcp::validation::validate_call;

fuzz_target!(|data: &[u8]| {
    let Ok(arguments) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    match validate_call("search", &arguments) {
        Ok(args) => {
            assert!(!args.query.is_empty());
            assert!(args.max_results >= 1);
            let _ = build_request_url("https://rag-web-browser.apify.actor/search", &args);
        }
        Err(error) => assert!(error.tool_text().starts_with("Error: ")),
    }
});
