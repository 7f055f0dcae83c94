//! Timed splash overlay
//!
//! Three phases driven by a fixed transition table measured from mount:
//!
//! ```text
//! Showing --(display, 2500ms)--> Fading --(fade, 500ms)--> Removed
//! ```
//!
//! `Removed` is terminal. A disabled overlay starts in `Removed` and never
//! schedules a timer. Fetch completion has no influence on the schedule.

use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::models::OverlayConfig;

/// Lifecycle of the splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPhase {
    /// Fully opaque, covering the page
    Showing,
    /// Same content, transitioning to transparent
    Fading,
    /// Not rendered; never comes back
    Removed,
}

impl OverlayPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayPhase::Showing => "showing",
            OverlayPhase::Fading => "fading",
            OverlayPhase::Removed => "removed",
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, OverlayPhase::Removed)
    }
}

/// One scheduled edge of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: OverlayPhase,
    pub to: OverlayPhase,
    /// Delay after entering `from`
    pub after: Duration,
}

/// Transition table derived from an `OverlayConfig`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySchedule {
    enabled: bool,
    transitions: [Transition; 2],
}

impl OverlaySchedule {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            enabled: config.enabled,
            transitions: [
                Transition {
                    from: OverlayPhase::Showing,
                    to: OverlayPhase::Fading,
                    after: config.display,
                },
                Transition {
                    from: OverlayPhase::Fading,
                    to: OverlayPhase::Removed,
                    after: config.fade,
                },
            ],
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn initial_phase(&self) -> OverlayPhase {
        if self.enabled {
            OverlayPhase::Showing
        } else {
            OverlayPhase::Removed
        }
    }

    /// Outgoing edge of `phase`, if any
    pub fn next(&self, phase: OverlayPhase) -> Option<Transition> {
        self.transitions.iter().copied().find(|t| t.from == phase)
    }

    /// Offset from mount at which `phase` is entered
    pub fn enters_at(&self, phase: OverlayPhase) -> Option<Duration> {
        let mut current = self.initial_phase();
        let mut offset = Duration::ZERO;
        loop {
            if current == phase {
                return Some(offset);
            }
            let transition = self.next(current)?;
            offset += transition.after;
            current = transition.to;
        }
    }

    /// Phase at `elapsed` time since mount
    pub fn phase_at(&self, elapsed: Duration) -> OverlayPhase {
        let mut current = self.initial_phase();
        let mut offset = Duration::ZERO;
        while let Some(transition) = self.next(current) {
            offset += transition.after;
            if elapsed < offset {
                break;
            }
            current = transition.to;
        }
        current
    }

    /// Time left until `phase` is entered, zero if already reached
    pub fn remaining_until(&self, phase: OverlayPhase, elapsed: Duration) -> Option<Duration> {
        self.enters_at(phase)
            .map(|at| at.saturating_sub(elapsed))
    }

    /// Length of the fade, used for the continuous opacity transition
    pub fn fade_duration(&self) -> Duration {
        self.next(OverlayPhase::Fading)
            .map(|t| t.after)
            .unwrap_or(Duration::ZERO)
    }
}

/// Live overlay for one mount.
///
/// A single timer task walks the transition table and publishes each phase
/// through a watch channel. Dropping the overlay aborts any pending
/// transition.
#[derive(Debug)]
pub struct TimedOverlay {
    schedule: OverlaySchedule,
    mounted_at: Instant,
    phase_rx: watch::Receiver<OverlayPhase>,
    timer: Option<JoinHandle<()>>,
}

impl TimedOverlay {
    /// Start the overlay clock. Must be called inside a tokio runtime when
    /// the overlay is enabled.
    pub fn mount(config: OverlayConfig) -> Self {
        let schedule = OverlaySchedule::new(config);
        let initial = schedule.initial_phase();
        let (phase_tx, phase_rx) = watch::channel(initial);

        let timer = schedule
            .is_enabled()
            .then(|| tokio::spawn(run_schedule(schedule, initial, phase_tx)));

        Self {
            schedule,
            mounted_at: Instant::now(),
            phase_rx,
            timer,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        *self.phase_rx.borrow()
    }

    pub fn schedule(&self) -> &OverlaySchedule {
        &self.schedule
    }

    pub fn elapsed(&self) -> Duration {
        self.mounted_at.elapsed()
    }

    /// Receiver that observes every phase change
    pub fn subscribe(&self) -> watch::Receiver<OverlayPhase> {
        self.phase_rx.clone()
    }

    /// Cancel pending transitions. The phase stays where it is.
    pub fn teardown(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for TimedOverlay {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn run_schedule(
    schedule: OverlaySchedule,
    initial: OverlayPhase,
    phase_tx: watch::Sender<OverlayPhase>,
) {
    let mut current = initial;
    while let Some(transition) = schedule.next(current) {
        tokio::time::sleep(transition.after).await;
        current = transition.to;
        debug!(phase = current.as_str(), "Overlay transition");
        phase_tx.send_replace(current);
    }
}
