//! Turning Gemini error bodies into messages safe to show a user
//!
//! Gemini reports failures as `google.rpc` statuses. The raw message can echo
//! the key or request details, so only known statuses map to fixed text and
//! anything else is passed through truncated.

/// Longest raw error message passed through
const MAX_DETAIL_BYTES: usize = 300;

/// What went wrong, as far as the user is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiFailure {
    /// Missing, invalid or unauthorized key
    Credentials,
    /// Quota or rate limit
    Quota,
    /// Configured model does not exist for this key
    UnknownModel,
    /// The API is not offered for this account or region
    Unavailable,
    /// Google-side failure
    Server,
    /// Anything else; the message is kept
    Other,
}

impl ApiFailure {
    /// Classify a `google.rpc` status plus its message.
    ///
    /// A bad key arrives as `INVALID_ARGUMENT` with "API key not valid",
    /// so the message is checked before the status.
    pub(crate) fn classify(status: &str, message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("api key") || lower.contains("api_key") {
            return Self::Credentials;
        }
        match status {
            "UNAUTHENTICATED" | "PERMISSION_DENIED" => Self::Credentials,
            "RESOURCE_EXHAUSTED" => Self::Quota,
            "NOT_FOUND" => Self::UnknownModel,
            "FAILED_PRECONDITION" => Self::Unavailable,
            "INTERNAL" | "UNAVAILABLE" | "DEADLINE_EXCEEDED" => Self::Server,
            _ => Self::Other,
        }
    }

    fn user_text(self) -> Option<&'static str> {
        match self {
            Self::Credentials => {
                Some("API authentication error. Please check GEMINI_API_KEY.")
            }
            Self::Quota => Some("API rate limit exceeded. Please try again later."),
            Self::UnknownModel => {
                Some("Model not found. Please check the configured Gemini model.")
            }
            Self::Unavailable => {
                Some("Gemini API is not available for this account or region.")
            }
            Self::Server => Some("API server error. Please try again later."),
            Self::Other => None,
        }
    }
}

/// Message for a Gemini error body with the given status and message
pub(crate) fn sanitize_api_error(status: &str, message: &str) -> String {
    if let Some(text) = ApiFailure::classify(status, message).user_text() {
        return text.to_string();
    }

    let detail = format!("{}: {}", status, message);
    if detail.len() > MAX_DETAIL_BYTES {
        format!(
            "{}...(truncated)",
            crate::util::truncate_safe(&detail, MAX_DETAIL_BYTES)
        )
    } else {
        detail
    }
}
