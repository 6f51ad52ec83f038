//! Tri-state status of the Discord-username sync action.

use std::time::{Duration, Instant};

/// How long a terminal outcome keeps the control disabled before the
/// status drops back to idle. Long enough to show the confirmation icon
/// and to throttle repeated manual retries.
pub const SYNC_RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
    Success,
}

impl SyncStatus {
    pub fn is_idle(self) -> bool {
        self == SyncStatus::Idle
    }
}

/// Owner of the sync status and its delayed reset.
///
/// Transitions are only Idle -> Syncing -> {Success | Idle}. Failures are
/// never stored here; the alert dialog carries them, and the status still
/// resolves to Idle once the reset delay elapses. The deadline is plain
/// data owned by the view and driven by its tick, so tearing the view
/// down cancels the reset with it.
#[derive(Debug, Default)]
pub struct DiscordSync {
    status: SyncStatus,
    reset_at: Option<Instant>,
}

impl DiscordSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    /// Idle -> Syncing. Returns false without effect when a sync is
    /// already underway or the success indicator is still showing.
    pub fn begin(&mut self) -> bool {
        if self.status != SyncStatus::Idle {
            return false;
        }
        self.status = SyncStatus::Syncing;
        self.reset_at = None;
        true
    }

    /// Record the terminal outcome of the request and schedule the reset.
    /// Failure intentionally leaves the status at Syncing: the control
    /// stays disabled for the full delay window.
    pub fn finish(&mut self, now: Instant, success: bool) {
        if self.status != SyncStatus::Syncing {
            return;
        }
        if success {
            self.status = SyncStatus::Success;
        }
        self.reset_at = Some(now + SYNC_RESET_DELAY);
    }

    /// Drive the delayed reset; called on every UI tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.reset_at {
            if now >= deadline {
                self.status = SyncStatus::Idle;
                self.reset_at = None;
            }
        }
    }

    /// Drop the pending reset and return to idle; used on teardown.
    pub fn cancel(&mut self) {
        self.status = SyncStatus::Idle;
        self.reset_at = None;
    }
}
