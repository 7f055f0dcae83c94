//! Portfolio Page Library
//!
//! Server-rendered personal portfolio page:
//! - Profile header and about-me text
//! - Work experience and volunteering timelines read from remote JSON
//! - Embedded fallback for the work experience timeline
//! - Timed splash overlay (Showing -> Fading -> Removed)

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;
pub mod view;

pub use crate::core::{
    FallbackPolicy, FetchState, OverlayPhase, OverlaySchedule, PageSession, PageSnapshot,
    RemoteListFetcher, Resource, TimedOverlay,
};
pub use models::{
    AppError, AppResult, Description, ErrorCode, ExperienceRecord, OverlayConfig, Profile,
    ServerConfig, SiteConfig,
};
pub use providers::RemoteListClient;
pub use view::render_page;
