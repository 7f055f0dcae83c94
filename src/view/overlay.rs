//! Splash overlay markup
//!
//! The overlay is emitted with a CSS animation whose delay is the time left
//! until the fade starts, measured from session mount. A negative delay
//! resumes a fade that is already in progress, so the browser-side opacity
//! transition follows the same schedule as the server-side state machine.

use std::time::Duration;

use super::escape;
use crate::core::{OverlayPhase, OverlaySchedule};

/// Keyframes referenced by the overlay's inline animation
pub const OVERLAY_KEYFRAMES: &str = "@keyframes overlay-fade { \
from { opacity: 1; } to { opacity: 0; visibility: hidden; } }";

/// Render the overlay for a phase; `Removed` renders nothing
pub fn render_overlay(
    name: &str,
    phase: OverlayPhase,
    schedule: &OverlaySchedule,
    elapsed: Duration,
) -> String {
    if !phase.is_visible() {
        return String::new();
    }

    let fade_starts_at = schedule
        .enters_at(OverlayPhase::Fading)
        .unwrap_or(Duration::ZERO);
    let delay_ms = fade_starts_at.as_millis() as i64 - elapsed.as_millis() as i64;
    let fade_ms = schedule.fade_duration().as_millis();

    format!(
        "<div class=\"loading-overlay\" data-phase=\"{}\" \
style=\"animation: overlay-fade {}ms ease-in-out {}ms forwards;\">\n  \
<h1 class=\"overlay-name\">{}</h1>\n</div>\n",
        phase.as_str(),
        fade_ms,
        delay_ms,
        escape(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OverlayConfig;

    fn schedule() -> OverlaySchedule {
        OverlaySchedule::new(OverlayConfig::default())
    }

    #[test]
    fn test_showing_overlay_waits_for_fade() {
        let html = render_overlay("Jane", OverlayPhase::Showing, &schedule(), Duration::ZERO);
        assert!(html.contains("data-phase=\"showing\""));
        assert!(html.contains("overlay-fade 500ms ease-in-out 2500ms forwards"));
        assert!(html.contains("Jane"));
    }

    #[test]
    fn test_delay_accounts_for_elapsed_time() {
        let html = render_overlay(
            "Jane",
            OverlayPhase::Showing,
            &schedule(),
            Duration::from_millis(1200),
        );
        assert!(html.contains("ease-in-out 1300ms forwards"));
    }

    #[test]
    fn test_fading_overlay_resumes_mid_fade() {
        let html = render_overlay(
            "Jane",
            OverlayPhase::Fading,
            &schedule(),
            Duration::from_millis(2700),
        );
        assert!(html.contains("data-phase=\"fading\""));
        assert!(html.contains("ease-in-out -200ms forwards"));
    }

    #[test]
    fn test_removed_overlay_renders_nothing() {
        let html = render_overlay(
            "Jane",
            OverlayPhase::Removed,
            &schedule(),
            Duration::from_millis(3001),
        );
        assert!(html.is_empty());
    }
}
