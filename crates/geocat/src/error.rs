//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and transport errors into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use geocat_core::CoreError;

/// Exit codes for scripting.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const VALIDATION: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Session ──────────────────────────────────────────────────────

    #[error("Not signed in")]
    #[diagnostic(
        code(geocat::not_signed_in),
        help(
            "Sign in first: geocat login --email you@example.com\n\
             Or set GEOCAT_EMAIL and run geocat login."
        )
    )]
    NotSignedIn,

    #[error("Session check failed for '{email}'")]
    #[diagnostic(
        code(geocat::auth_failed),
        help("The backend did not report a valid, verified session for this email.")
    )]
    AuthFailed { email: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(geocat::not_found),
        help("Run: geocat {list_command} to see available ids")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(code(geocat::validation))]
    Validation { message: String },

    // ── Backend ──────────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(code(geocat::backend))]
    Backend { message: String },

    #[error("Could not reach the backend: {message}")]
    #[diagnostic(
        code(geocat::connection),
        help("Check that the backend is running and --backend points at it.")
    )]
    Connection { message: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration error: {message}")]
    #[diagnostic(code(geocat::config), help("Inspect with: geocat config show"))]
    Config { message: String },

    // ── Export ───────────────────────────────────────────────────────

    #[error("Export failed: {message}")]
    #[diagnostic(
        code(geocat::export),
        help(
            "PDF export needs a TrueType font family on disk.\n\
             Point GEOCAT_FONT_DIR at a directory containing\n\
             <Family>-Regular.ttf / -Bold.ttf / -Italic.ttf / -BoldItalic.ttf."
        )
    )]
    Export { message: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(geocat::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotSignedIn | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::VALIDATION,
            Self::Connection { .. } => exit_code::CONNECTION,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Error mappings ───────────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unauthenticated => Self::NotSignedIn,
            CoreError::Validation { message } | CoreError::Invalid { message } => {
                Self::Validation { message }
            }
            CoreError::FetchFailed { message } | CoreError::Unexpected { message } => {
                Self::Backend { message }
            }
            CoreError::Config { message } => Self::Config { message },
        }
    }
}

impl From<geocat_api::Error> for CliError {
    fn from(err: geocat_api::Error) -> Self {
        match err {
            geocat_api::Error::Transport(e) => Self::Connection {
                message: e.to_string(),
            },
            geocat_api::Error::Validation { message } => Self::Validation { message },
            other => Self::Backend {
                message: other.to_string(),
            },
        }
    }
}

impl From<geocat_config::ConfigError> for CliError {
    fn from(err: geocat_config::ConfigError) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
