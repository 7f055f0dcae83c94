//! Page Session - per-mount state owner
//!
//! A session is created for every page load. Mounting starts the overlay
//! clock and spawns one fetch task per resource; each task owns its
//! `FetchState` and publishes it as a whole-value replacement through a watch
//! channel. Dropping the session tears it down: pending overlay transitions
//! are cancelled and late fetch results are discarded.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use super::fetch::{FetchState, RemoteListFetcher, Resource};
use super::overlay::{OverlayPhase, OverlaySchedule, TimedOverlay};
use crate::models::SiteConfig;
use crate::providers::RemoteListClient;

/// Read-only view of a session at one instant
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub session_id: Uuid,
    pub work_experience: FetchState,
    pub volunteering: FetchState,
    pub overlay: OverlayPhase,
    /// Time since mount when the snapshot was taken
    #[serde(skip)]
    pub elapsed: Duration,
    #[serde(skip)]
    pub schedule: OverlaySchedule,
}

impl PageSnapshot {
    pub fn state(&self, resource: Resource) -> &FetchState {
        match resource {
            Resource::WorkExperience => &self.work_experience,
            Resource::Volunteering => &self.volunteering,
        }
    }
}

/// Live state for one mounted page
#[derive(Debug)]
pub struct PageSession {
    id: Uuid,
    mounted: Arc<AtomicBool>,
    work_experience: watch::Receiver<FetchState>,
    volunteering: watch::Receiver<FetchState>,
    overlay: TimedOverlay,
}

impl PageSession {
    /// Mount a fresh session: start the overlay and both fetch tasks
    pub fn mount(config: &SiteConfig, client: &RemoteListClient) -> Self {
        let id = Uuid::new_v4();
        let mounted = Arc::new(AtomicBool::new(true));

        let overlay = TimedOverlay::mount(config.overlay);
        let work_experience = spawn_fetch(
            id,
            RemoteListFetcher::for_resource(client.clone(), Resource::WorkExperience, config),
            mounted.clone(),
        );
        let volunteering = spawn_fetch(
            id,
            RemoteListFetcher::for_resource(client.clone(), Resource::Volunteering, config),
            mounted.clone(),
        );

        info!(session = %id, overlay = overlay.phase().as_str(), "📄 Page session mounted");

        Self {
            id,
            mounted,
            work_experience,
            volunteering,
            overlay,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn state(&self, resource: Resource) -> FetchState {
        self.receiver(resource).borrow().clone()
    }

    pub fn overlay(&self) -> &TimedOverlay {
        &self.overlay
    }

    /// Wait until `resource` has settled
    pub async fn settled(&self, resource: Resource) -> FetchState {
        let mut rx = self.receiver(resource).clone();
        // An error here means the fetch task is gone; the last value stands
        let result = rx.wait_for(FetchState::is_settled).await.map(|s| (*s).clone());
        result.unwrap_or_else(|_| rx.borrow().clone())
    }

    /// Wait for both resources to settle, in any order
    pub async fn settle_all(&self) {
        tokio::join!(
            self.settled(Resource::WorkExperience),
            self.settled(Resource::Volunteering)
        );
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            session_id: self.id,
            work_experience: self.state(Resource::WorkExperience),
            volunteering: self.state(Resource::Volunteering),
            overlay: self.overlay.phase(),
            elapsed: self.overlay.elapsed(),
            schedule: *self.overlay.schedule(),
        }
    }

    /// Tear the session down. Also runs on drop.
    pub fn unmount(&mut self) {
        if self.mounted.swap(false, Ordering::AcqRel) {
            self.overlay.teardown();
            debug!(session = %self.id, "Page session unmounted");
        }
    }

    fn receiver(&self, resource: Resource) -> &watch::Receiver<FetchState> {
        match resource {
            Resource::WorkExperience => &self.work_experience,
            Resource::Volunteering => &self.volunteering,
        }
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// One-shot fetch task; the result is applied only while still mounted
fn spawn_fetch(
    session: Uuid,
    fetcher: RemoteListFetcher,
    mounted: Arc<AtomicBool>,
) -> watch::Receiver<FetchState> {
    let (tx, rx) = watch::channel(FetchState::pending());

    tokio::spawn(async move {
        let state = fetcher.load().await;
        let resource = fetcher.resource().label();

        if !mounted.load(Ordering::Acquire) {
            debug!(session = %session, resource, "Discarding fetch result for unmounted page");
            return;
        }

        debug!(
            session = %session,
            resource,
            items = state.items.len(),
            failed = state.error.is_some(),
            "Fetch settled"
        );
        tx.send_replace(state);
    });

    rx
}
