//! Typed error handling for parkview
//!
//! Errors are split by the layer that raises them so callers can react
//! precisely instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`ViewError`]: invalid view configuration (rejected before computing)
//! - [`ApiError`]: failures reported by, or while talking to, the backend API
//! - [`ConfigError`]: configuration loading and validation
//! - [`QueryError`]: malformed query-string criteria
//!
//! # Example
//!
//! ```rust,ignore
//! match screen.refresh(&service).await {
//!     Ok(()) => {}
//!     Err(ParkError::Api(ApiError::Rejected { message, .. })) => show_banner(&message),
//!     Err(e) => tracing::error!(code = e.error_code(), "refresh failed: {}", e),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The main error type for parkview
#[derive(Debug)]
pub enum ParkError {
    /// View configuration errors
    View(ViewError),

    /// Backend API errors
    Api(ApiError),

    /// Configuration errors
    Config(ConfigError),

    /// Query parsing errors
    Query(QueryError),
}

impl fmt::Display for ParkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkError::View(e) => write!(f, "{}", e),
            ParkError::Api(e) => write!(f, "{}", e),
            ParkError::Config(e) => write!(f, "{}", e),
            ParkError::Query(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParkError::View(e) => Some(e),
            ParkError::Api(e) => Some(e),
            ParkError::Config(e) => Some(e),
            ParkError::Query(e) => Some(e),
        }
    }
}

impl ParkError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ParkError::View(e) => e.error_code(),
            ParkError::Api(e) => e.error_code(),
            ParkError::Config(_) => "CONFIG_ERROR",
            ParkError::Query(_) => "QUERY_ERROR",
        }
    }

    /// Message suitable for showing to the portal user
    ///
    /// Backend rejections carry their own message; everything else is
    /// rendered through `Display`.
    pub fn user_message(&self) -> String {
        match self {
            ParkError::Api(ApiError::Rejected { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// View Errors
// =============================================================================

/// Invalid view configuration
///
/// These are programming errors on the caller's side. The pipeline rejects
/// them before touching the items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("page size must be at least 1 (got {page_size})")]
    InvalidPageSize { page_size: usize },

    #[error("unknown sort key '{key}'")]
    UnknownSortKey { key: String },

    #[error("unknown filter '{name}'")]
    UnknownFilter { name: String },

    #[error("unknown grouping '{name}'")]
    UnknownGrouping { name: String },
}

impl ViewError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::InvalidPageSize { .. } => "INVALID_PAGE_SIZE",
            ViewError::UnknownSortKey { .. } => "UNKNOWN_SORT_KEY",
            ViewError::UnknownFilter { .. } => "UNKNOWN_FILTER",
            ViewError::UnknownGrouping { .. } => "UNKNOWN_GROUPING",
        }
    }
}

impl From<ViewError> for ParkError {
    fn from(err: ViewError) -> Self {
        ParkError::View(err)
    }
}

// =============================================================================
// API Errors
// =============================================================================

/// Errors surfaced by the backend API layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered `success: false`
    #[error("{resource}: {message}")]
    Rejected { resource: String, message: String },

    /// The envelope reported success but carried no data
    #[error("{resource}: response contained no data")]
    MissingData { resource: String },

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    /// Non-2xx HTTP status without a usable envelope
    #[error("{resource}: HTTP {status}: {message}")]
    Status {
        resource: String,
        status: u16,
        message: String,
    },

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("failed to decode {resource} response: {message}")]
    Decode { resource: String, message: String },
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Rejected { .. } => "API_REJECTED",
            ApiError::MissingData { .. } => "API_MISSING_DATA",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Status { .. } => "API_STATUS",
            ApiError::Transport { .. } => "API_TRANSPORT",
            ApiError::Decode { .. } => "API_DECODE",
        }
    }
}

impl From<ApiError> for ParkError {
    fn from(err: ApiError) -> Self {
        ParkError::Api(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config{}: {message}", file_suffix(.file))]
    Parse {
        file: Option<String>,
        message: String,
    },

    #[error("invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_deref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl From<ConfigError> for ParkError {
    fn from(err: ConfigError) -> Self {
        ParkError::Config(err)
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised while turning query parameters into view criteria
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("filter must be a JSON object: {message}")]
    InvalidFilter { message: String },

    #[error("invalid date '{value}' for filter '{field}'")]
    InvalidDate { field: String, value: String },

    #[error("invalid sort expression '{value}'")]
    InvalidSort { value: String },
}

impl From<QueryError> for ParkError {
    fn from(err: QueryError) -> Self {
        ParkError::Query(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_error_codes() {
        let err: ParkError = ViewError::InvalidPageSize { page_size: 0 }.into();
        assert_eq!(err.error_code(), "INVALID_PAGE_SIZE");
        assert_eq!(err.to_string(), "page size must be at least 1 (got 0)");
    }

    #[test]
    fn test_rejected_user_message_is_backend_message() {
        let err: ParkError = ApiError::Rejected {
            resource: "payments".into(),
            message: "Tenant not found".into(),
        }
        .into();
        assert_eq!(err.user_message(), "Tenant not found");
        assert_eq!(err.error_code(), "API_REJECTED");
    }

    #[test]
    fn test_config_parse_display_with_and_without_file() {
        let with_file = ConfigError::Parse {
            file: Some("portal.yaml".into()),
            message: "bad indent".into(),
        };
        assert_eq!(
            with_file.to_string(),
            "failed to parse config file 'portal.yaml': bad indent"
        );

        let without = ConfigError::Parse {
            file: None,
            message: "bad indent".into(),
        };
        assert_eq!(without.to_string(), "failed to parse config: bad indent");
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error;
        let err: ParkError = QueryError::InvalidSort { value: ":".into() }.into();
        assert!(err.source().is_some());
    }
}
