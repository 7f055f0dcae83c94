//! API Request/Response Types

use serde::Serialize;

use crate::core::{FetchState, Resource};
use crate::models::{AppError, ExperienceRecord};

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: None,
        }
    }
}

// ============================================
// Health
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

// ============================================
// Experience lists
// ============================================

/// Settled fetch state for one resource, after its fallback policy
#[derive(Debug, Serialize)]
pub struct ExperienceListData {
    pub resource: Resource,
    pub experiences: Vec<ExperienceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// True when `experiences` is the embedded substitute
    pub fallback: bool,
}

impl ExperienceListData {
    pub fn new(resource: Resource, state: FetchState) -> Self {
        let fallback = state.error.is_some() && !state.items.is_empty();
        Self {
            resource,
            experiences: state.items,
            error: state.error,
            fallback,
        }
    }
}
