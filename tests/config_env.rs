use rag_web_browser_mcp::config::{ApiToken, RuntimeConfig, TokenSource};
use rag_web_browser_mcp::error::AppError;
use serial_test::serial;

const NO_ARGS: [&str; 0] = [];

#[test]
#[serial]
fn token_from_environment_wins_over_arguments() {
    temp_env::with_var("APIFY_API_TOKEN", Some(" env-token "), || {
        let token = ApiToken::resolve(["APIFY_API_TOKEN=arg-token"]).expect("token");
        assert_eq!(token.source(), TokenSource::Environment);
        assert_eq!(token.bearer(), "Bearer env-token");
    });
}

#[test]
#[serial]
fn token_falls_back_to_command_line_argument() {
    temp_env::with_var("APIFY_API_TOKEN", None::<&str>, || {
        let token =
            ApiToken::resolve(["--verbose", "APIFY_API_TOKEN=arg-token"]).expect("token");
        assert_eq!(token.source(), TokenSource::CommandLine);
        assert_eq!(token.bearer(), "Bearer arg-token");
    });
}

#[test]
#[serial]
fn missing_or_blank_token_is_a_startup_error() {
    temp_env::with_var("APIFY_API_TOKEN", None::<&str>, || {
        assert!(matches!(
            ApiToken::resolve(NO_ARGS),
            Err(AppError::MissingApiToken)
        ));
    });
    temp_env::with_var("APIFY_API_TOKEN", Some("   "), || {
        assert!(matches!(
            ApiToken::resolve(["APIFY_API_TOKEN="]),
            Err(AppError::MissingApiToken)
        ));
    });
    assert!(matches!(ApiToken::new(""), Err(AppError::MissingApiToken)));
}

#[test]
#[serial]
fn token_unusable_as_header_is_a_startup_error() {
    assert!(matches!(
        ApiToken::new("abc\ndef"),
        Err(AppError::InvalidApiToken(_))
    ));
    temp_env::with_var("APIFY_API_TOKEN", Some("env\u{7f}token"), || {
        assert!(matches!(
            ApiToken::resolve(NO_ARGS),
            Err(AppError::InvalidApiToken(_))
        ));
    });
    temp_env::with_var("APIFY_API_TOKEN", None::<&str>, || {
        assert!(matches!(
            ApiToken::resolve(["APIFY_API_TOKEN=arg\rtoken"]),
            Err(AppError::InvalidApiToken(_))
        ));
    });
}

#[test]
#[serial]
fn token_debug_output_is_redacted() {
    let token = ApiToken::new("very-secret").expect("token");
    let debug = format!("{token:?}");
    assert!(!debug.contains("very-secret"));
    assert!(debug.contains("redacted"));
}

#[test]
#[serial]
fn runtime_config_defaults() {
    temp_env::with_vars(
        [
            ("RAG_WEB_BROWSER_ENDPOINT", None::<&str>),
            ("RAG_WEB_BROWSER_MAX_RESPONSE_BYTES", None),
            ("RAG_WEB_BROWSER_LOG", None),
        ],
        || {
            let config = RuntimeConfig::from_env();
            assert_eq!(config.endpoint, "https://rag-web-browser.apify.actor/search");
            assert_eq!(config.request_timeout_ms, 45_000);
            assert_eq!(config.max_response_bytes, 10 * 1_048_576);
            assert_eq!(config.log_filter, "warn,rag_web_browser_mcp=info");
        },
    );
}

#[test]
#[serial]
fn runtime_config_reads_overrides_and_clamps_size() {
    temp_env::with_vars(
        [
            ("RAG_WEB_BROWSER_ENDPOINT", Some("http://localhost:8080/search")),
            ("RAG_WEB_BROWSER_MAX_RESPONSE_BYTES", Some("10")),
            ("RAG_WEB_BROWSER_LOG", Some("debug")),
        ],
        || {
            let config = RuntimeConfig::from_env();
            assert_eq!(config.endpoint, "http://localhost:8080/search");
            assert_eq!(config.max_response_bytes, 1_024);
            assert_eq!(config.log_filter, "debug");
            assert_eq!(config.request_timeout_ms, 45_000);
        },
    );
}
