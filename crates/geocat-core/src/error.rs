// ── Core error types ──
//
// User-facing errors from geocat-core. Consumers never see raw HTTP
// statuses or JSON parse failures; the `From<geocat_api::Error>` impl
// translates transport-layer errors into the three-way taxonomy the UI
// surfaces: fetch failure, validation rejection, unexpected failure.

use thiserror::Error;

/// Generic message for mutation failures that aren't validation rejections.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The primary collection load failed. Rendered inline in place of
    /// the grid; any cached snapshot already painted stays visible.
    #[error("{message}")]
    FetchFailed { message: String },

    /// The backend rejected a mutation (HTTP 400-class). Surfaced
    /// verbatim on the open form without closing it.
    #[error("{message}")]
    Validation { message: String },

    /// Any other mutation failure. Surfaced as a generic message.
    #[error("{message}")]
    Unexpected { message: String },

    /// Client-side pre-submit rejection; no network call was issued.
    #[error("{message}")]
    Invalid { message: String },

    /// No verified session; the caller must sign in first.
    #[error("Not signed in.")]
    Unauthenticated,

    /// Configuration problem (bad base URL, unusable cache dir).
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Build the inline fetch-failure message for an entity collection.
    pub fn fetch_failed(plural_noun: &str) -> Self {
        Self::FetchFailed {
            message: format!("Failed to fetch {plural_noun}."),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Returns `true` when the message belongs on the open form dialog
    /// (validation or client-side rejection) rather than the grid.
    pub fn is_form_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Invalid { .. })
    }
}

// Mutation-path mapping. Collection loads don't go through this --
// the controller folds those into `FetchFailed` with the entity noun.
impl From<geocat_api::Error> for CoreError {
    fn from(err: geocat_api::Error) -> Self {
        match err {
            geocat_api::Error::Validation { message } => Self::Validation { message },
            other => {
                tracing::debug!("mutation failed: {other}");
                Self::Unexpected {
                    message: UNEXPECTED_ERROR.to_owned(),
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn api_validation_keeps_the_server_message() {
        let err: CoreError = geocat_api::Error::Validation {
            message: "Slug already in use".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Slug already in use");
        assert!(err.is_form_error());
    }

    #[test]
    fn other_api_errors_become_generic() {
        let err: CoreError = geocat_api::Error::Api {
            status: 500,
            message: "internal".into(),
        }
        .into();
        assert_eq!(err.to_string(), UNEXPECTED_ERROR);
        assert!(!err.is_form_error());
    }

    #[test]
    fn fetch_failed_message_names_the_collection() {
        assert_eq!(
            CoreError::fetch_failed("cities").to_string(),
            "Failed to fetch cities."
        );
    }
}
