//! Centralized Error Handling Module
//!
//! Every failure carries a unique code so that operator logs can be filtered
//! by category.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - FETCH_xxx: remote resource errors
//! - API_xxx: API errors
//! - CFG_xxx: Configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Fetch Errors
    // ============================================
    /// Network unreachable or request rejected before a response
    FetchTransportFailed,
    /// Response received with a non-success status
    FetchHttpStatus,
    /// Body is not valid JSON
    FetchParseFailed,

    // ============================================
    // API Errors
    // ============================================
    /// Resource not found
    ApiNotFound,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchTransportFailed => "FETCH_TRANSPORT_FAILED",
            Self::FetchHttpStatus => "FETCH_HTTP_STATUS",
            Self::FetchParseFailed => "FETCH_PARSE_FAILED",

            Self::ApiNotFound => "API_NOT_FOUND",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ConfigInvalidValue => 400,
            Self::ApiNotFound => 404,
            Self::FetchTransportFailed | Self::FetchHttpStatus | Self::FetchParseFailed => 502,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Non-2xx response from a remote resource
    pub fn http_status(status: u16) -> Self {
        Self::new(ErrorCode::FetchHttpStatus, format!("Failed to fetch: {}", status))
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }

    /// API resource not found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiNotFound, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        match err.status() {
            Some(status) if err.is_status() => Self::http_status(status.as_u16()),
            _ if err.is_decode() => Self::with_source(ErrorCode::FetchParseFailed, message, err),
            _ => Self::with_source(ErrorCode::FetchTransportFailed, message, err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        Self::with_source(ErrorCode::FetchParseFailed, message, err)
    }
}
