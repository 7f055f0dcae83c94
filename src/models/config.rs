//! Configuration module for the portfolio page
//!
//! Values come from `utils/constants.rs`; only the server bind address is
//! read from the environment.

use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    ABOUT_ME, CURRENT_POSITION, DEFAULT_HOST, DEFAULT_PORT, OVERLAY_DISPLAY_MS, OVERLAY_FADE_MS,
    PROFILE_NAME, SHOW_LOADING_OVERLAY, VOLUNTEERING_URL, WORK_EXPERIENCE_URL,
};

/// Static profile text rendered at the top of the page
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub current_position: String,
    pub about_me: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: PROFILE_NAME.to_string(),
            current_position: CURRENT_POSITION.to_string(),
            about_me: ABOUT_ME.to_string(),
        }
    }
}

/// Splash overlay settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConfig {
    /// When false the overlay never renders and no timer starts
    pub enabled: bool,
    /// Time spent fully opaque before fading
    pub display: Duration,
    /// Fade-out duration before removal
    pub fade: Duration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: SHOW_LOADING_OVERLAY,
            display: Duration::from_millis(OVERLAY_DISPLAY_MS),
            fade: Duration::from_millis(OVERLAY_FADE_MS),
        }
    }
}

impl OverlayConfig {
    /// Same schedule with the overlay switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Everything a page mount needs
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub profile: Profile,
    pub work_experience_url: String,
    pub volunteering_url: String,
    pub overlay: OverlayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            work_experience_url: WORK_EXPERIENCE_URL.to_string(),
            volunteering_url: VOLUNTEERING_URL.to_string(),
            overlay: OverlayConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Point both resources at another origin (mock servers, mirrors)
    pub fn with_endpoints(
        mut self,
        work_experience_url: impl Into<String>,
        volunteering_url: impl Into<String>,
    ) -> Self {
        self.work_experience_url = work_experience_url.into();
        self.volunteering_url = volunteering_url.into();
        self
    }

    pub fn with_overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }
}

/// API server bind settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `PORTFOLIO_HOST` and `PORT` / `PORTFOLIO_PORT`, falling back to defaults.
    /// Hosting platforms set `PORT`; `PORTFOLIO_PORT` is for local runs.
    pub fn from_env() -> AppResult<Self> {
        let host = std::env::var("PORTFOLIO_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT").or_else(|_| std::env::var("PORTFOLIO_PORT")) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::invalid_config(format!("Invalid port: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        info!(host = %host, port, "Server configuration loaded");
        Ok(Self { host, port })
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                AppError::invalid_config(format!("Invalid bind address: {}:{}", self.host, self.port))
            })
    }
}
