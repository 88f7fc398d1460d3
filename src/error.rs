use crate::constants::{
    ERROR_INTERNAL, ERROR_INVALID_API_TOKEN, ERROR_INVALID_ARGUMENTS_TYPE,
    ERROR_INVALID_MAX_RESULTS, ERROR_MISSING_API_TOKEN, ERROR_MISSING_ARGUMENTS,
    ERROR_MISSING_QUERY, ERROR_PREFIX, ERROR_UNSUPPORTED_TOOL, ERROR_UPSTREAM_CALL_FAILED,
    ERROR_UPSTREAM_TIMEOUT,
};

/// Failures of the server. The `Display` text is the message callers see
/// after the `"Error: "` prefix, so keep it stable.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unsupported tool requested: '{0}'. Only search is supported.")]
    UnsupportedTool(String),
    #[error("No arguments provided. Expected 'query' argument.")]
    MissingArguments,
    #[error("Invalid arguments. Expected a dictionary.")]
    InvalidArgumentsType,
    #[error("Missing 'query' argument.")]
    MissingQuery,
    #[error("Invalid 'maxResults' argument. Expected a positive integer.")]
    InvalidMaxResults,
    #[error("RAG Web Browser request timed out: {0}")]
    UpstreamTimeout(String),
    #[error("Failed to call RAG Web Browser: {0}")]
    UpstreamCallFailed(String),
    #[error("APIFY_API_TOKEN environment variable required; set it in the environment or a .env file")]
    MissingApiToken,
    #[error("APIFY_API_TOKEN is not a valid header value: {0}")]
    InvalidApiToken(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedTool(_) => ERROR_UNSUPPORTED_TOOL,
            Self::MissingArguments => ERROR_MISSING_ARGUMENTS,
            Self::InvalidArgumentsType => ERROR_INVALID_ARGUMENTS_TYPE,
            Self::MissingQuery => ERROR_MISSING_QUERY,
            Self::InvalidMaxResults => ERROR_INVALID_MAX_RESULTS,
            Self::UpstreamTimeout(_) => ERROR_UPSTREAM_TIMEOUT,
            Self::UpstreamCallFailed(_) => ERROR_UPSTREAM_CALL_FAILED,
            Self::MissingApiToken => ERROR_MISSING_API_TOKEN,
            Self::InvalidApiToken(_) => ERROR_INVALID_API_TOKEN,
            Self::Internal(_) => ERROR_INTERNAL,
        }
    }

    /// Argument problems the caller can fix, as opposed to upstream trouble.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedTool(_)
                | Self::MissingArguments
                | Self::InvalidArgumentsType
                | Self::MissingQuery
                | Self::InvalidMaxResults
        )
    }

    /// In-band tool result text: `"Error: "` followed by the message.
    #[must_use]
    pub fn tool_text(&self) -> String {
        format!("{ERROR_PREFIX}{self}")
    }
}
