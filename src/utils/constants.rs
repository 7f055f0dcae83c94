//! Constants Module - Single Source of Truth
//!
//! Every fixed value the page depends on lives here: profile text, the
//! remote resource endpoints and the splash overlay schedule.
//! Other modules read these through `SiteConfig` instead of hardcoding them.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// User-Agent for outgoing HTTP requests
pub const USER_AGENT: &str = concat!("PortfolioPage/", env!("CARGO_PKG_VERSION"));

// ============================================
// PROFILE
// ============================================

/// Display name, shown in the header and on the splash overlay
pub const PROFILE_NAME: &str = "Jenul Ferdinand";

/// Current position subtitle
pub const CURRENT_POSITION: &str = "Computer Science Student at Monash University";

/// About-me paragraph
pub const ABOUT_ME: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint \
occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

// ============================================
// REMOTE RESOURCES
// ============================================

/// Work experience timeline (raw GitHub content)
pub const WORK_EXPERIENCE_URL: &str =
    "https://raw.githubusercontent.com/jenul-ferdinand/resume/refs/heads/main/data/work_experience.json";

/// Volunteering timeline (raw GitHub content)
pub const VOLUNTEERING_URL: &str =
    "https://raw.githubusercontent.com/jenul-ferdinand/resume/refs/heads/main/data/volunteering.json";

/// Placeholder logo used by the embedded fallback dataset
pub const PLACEHOLDER_LOGO_URL: &str = "https://placehold.co/48x48";

// ============================================
// SPLASH OVERLAY
// ============================================

/// Set to false to disable the splash overlay (e.g. while testing layouts)
pub const SHOW_LOADING_OVERLAY: bool = true;

/// How long the overlay stays fully opaque after mount
pub const OVERLAY_DISPLAY_MS: u64 = 2500;

/// Duration of the fade-out before the overlay is removed
pub const OVERLAY_FADE_MS: u64 = 500;

// ============================================
// SERVER
// ============================================

/// Default bind host for the API server
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port for the API server
pub const DEFAULT_PORT: u16 = 8080;
