use serde::Deserialize;
use thiserror::Error;

/// Fallback message when a 400 response carries no usable detail.
pub const GENERIC_BAD_REQUEST: &str = "Request failed with status code 400";

/// Top-level error type for the `geocat-api` crate.
///
/// Covers transport failures, backend validation rejections, and
/// everything else the REST surface can produce. `geocat-core` maps
/// these into its user-facing taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Backend ─────────────────────────────────────────────────────
    /// HTTP-400-class rejection. The message follows the backend's
    /// precedence: `message`, else `errors[0].msg`, else a generic string.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Any other non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the backend rejected the payload (HTTP 400-class).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }
}

/// Wire shape of a 400 response body: `{message?, errors?: [{msg}, ...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidationBody {
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ValidationItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidationItem {
    pub msg: String,
}

impl ValidationBody {
    /// Resolve the display message with the backend's precedence chain.
    pub(crate) fn into_message(self) -> String {
        self.message
            .or_else(|| self.errors.into_iter().next().map(|e| e.msg))
            .unwrap_or_else(|| GENERIC_BAD_REQUEST.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_prefers_top_level_message() {
        let body: ValidationBody =
            serde_json::from_str(r#"{"message":"Name is required","errors":[{"msg":"other"}]}"#)
                .unwrap();
        assert_eq!(body.into_message(), "Name is required");
    }

    #[test]
    fn validation_message_falls_back_to_first_structured_error() {
        let body: ValidationBody =
            serde_json::from_str(r#"{"errors":[{"msg":"Code is required"},{"msg":"second"}]}"#)
                .unwrap();
        assert_eq!(body.into_message(), "Code is required");
    }

    #[test]
    fn validation_message_generic_fallback() {
        let body: ValidationBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message(), GENERIC_BAD_REQUEST);
    }
}
