//! API Request Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::types::*;
use crate::core::{PageSession, RemoteListFetcher, Resource};
use crate::models::{AppError, SiteConfig};
use crate::providers::RemoteListClient;
use crate::view::render_page;

type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

/// Shared application state
pub struct AppState {
    pub config: SiteConfig,
    pub client: RemoteListClient,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            client: RemoteListClient::new(),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

fn error_response(err: &AppError, start: Instant) -> ErrorResponse {
    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ApiResponse::error(
            ApiError::from(err),
            start.elapsed().as_secs_f64() * 1000.0,
        )),
    )
}

// ============================================
// Page
// ============================================

/// Mount a session, wait for both lists to settle and render the page.
/// The session is torn down when the response is built.
///
/// The response is only sent once both fetches have settled, so a browser
/// never sees the loading lines, and the overlay it receives has already
/// used up the fetch latency of its 3000 ms schedule. The overlay markup
/// carries the remaining delay so the fade still lands on time.
pub async fn render_index(State(state): State<Arc<AppState>>) -> Html<String> {
    let session = PageSession::mount(&state.config, &state.client);
    session.settle_all().await;

    let snapshot = session.snapshot();
    info!(
        session = %snapshot.session_id,
        overlay = snapshot.overlay.as_str(),
        elapsed_ms = snapshot.elapsed.as_millis() as u64,
        "Page rendered"
    );

    Html(render_page(&state.config.profile, &snapshot))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

// ============================================
// Experience lists
// ============================================

pub async fn get_experiences(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ExperienceListData>>, ErrorResponse> {
    let start = Instant::now();

    let resource = Resource::from_slug(&slug).ok_or_else(|| {
        error_response(
            &AppError::not_found(format!("Unknown resource: {}", slug)),
            start,
        )
    })?;

    let fetcher = RemoteListFetcher::for_resource(state.client.clone(), resource, &state.config);
    let fetched = fetcher.load().await;

    Ok(Json(ApiResponse::success(
        ExperienceListData::new(resource, fetched),
        start.elapsed().as_secs_f64() * 1000.0,
    )))
}

// ============================================
// Fallback
// ============================================

pub async fn not_found() -> ErrorResponse {
    error_response(&AppError::not_found("Route not found"), Instant::now())
}
