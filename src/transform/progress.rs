//! Progress events
//!
//! The project pipeline narrates through a broadcast channel instead of
//! printing. Renderers subscribe; with no subscriber, events are dropped.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use tokio::sync::broadcast;

use crate::constants::transform::PROGRESS_CHANNEL_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Transform,
    Write,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transform => "Transforming",
            Self::Write => "Writing",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub enum ProgressEvent {
    PhaseStarted {
        phase: Phase,
        total_items: usize,
    },
    ItemProgress {
        completed: usize,
        total: usize,
        current_item: String,
    },
    /// A single item failed; the batch continues
    Error { item: String, error: String },
    Finished {
        success: bool,
        duration_ms: u64,
        summary: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ProgressState {
    pub phase: Option<Phase>,
    pub completed: usize,
    pub total: usize,
    pub current_item: String,
    pub errors: usize,
    pub is_running: bool,
}

/// Shared progress state plus event fan-out
#[derive(Clone)]
pub struct ProgressTracker {
    state: Arc<RwLock<ProgressState>>,
    sender: broadcast::Sender<ProgressEvent>,
    start_time: Arc<RwLock<Option<Instant>>>,
    active: Arc<AtomicBool>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(PROGRESS_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(ProgressState::default())),
            sender,
            start_time: Arc::new(RwLock::new(None)),
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    #[inline]
    fn emit(&self, event: ProgressEvent) {
        // No receivers is normal when nothing renders progress
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.sender.subscribe()
    }

    pub fn state(&self) -> ProgressState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn start(&self) {
        self.active.store(true, Ordering::SeqCst);
        *self
            .start_time
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Instant::now());
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *state = ProgressState {
            is_running: true,
            ..ProgressState::default()
        };
    }

    pub fn start_phase(&self, phase: Phase, total_items: usize) {
        {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            state.phase = Some(phase);
            state.completed = 0;
            state.total = total_items;
            state.current_item.clear();
        }
        self.emit(ProgressEvent::PhaseStarted { phase, total_items });
    }

    /// Record one finished item in the current phase
    pub fn advance(&self, current_item: &str) {
        let (completed, total) = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            state.completed += 1;
            state.current_item = current_item.to_string();
            (state.completed, state.total)
        };
        self.emit(ProgressEvent::ItemProgress {
            completed,
            total,
            current_item: current_item.to_string(),
        });
    }

    pub fn report_error(&self, item: &str, error: &str) {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .errors += 1;
        self.emit(ProgressEvent::Error {
            item: item.to_string(),
            error: error.to_string(),
        });
    }

    pub fn finish(&self, success: bool, summary: &str) {
        let duration_ms = self
            .start_time
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .map(|s| s.elapsed().as_millis() as u64)
            .unwrap_or(0);

        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_running = false;
        self.active.store(false, Ordering::SeqCst);

        self.emit(ProgressEvent::Finished {
            success,
            duration_ms,
            summary: summary.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_and_advance() {
        let tracker = ProgressTracker::new();
        tracker.start();
        tracker.start_phase(Phase::Transform, 3);
        tracker.advance("a.tsx");
        tracker.advance("b.tsx");

        let state = tracker.state();
        assert_eq!(state.phase, Some(Phase::Transform));
        assert_eq!(state.completed, 2);
        assert_eq!(state.total, 3);
        assert_eq!(state.current_item, "b.tsx");
    }

    #[tokio::test]
    async fn test_subscriber_receives_events() {
        let tracker = ProgressTracker::new();
        let mut rx = tracker.subscribe();
        tracker.start();
        tracker.start_phase(Phase::Write, 1);
        tracker.report_error("x.vue", "conflict");
        tracker.finish(false, "done");

        assert!(matches!(
            rx.recv().await.unwrap(),
            ProgressEvent::PhaseStarted { phase: Phase::Write, total_items: 1 }
        ));
        assert!(matches!(rx.recv().await.unwrap(), ProgressEvent::Error { .. }));
        assert!(matches!(
            rx.recv().await.unwrap(),
            ProgressEvent::Finished { success: false, .. }
        ));
        assert!(!tracker.is_active());
        assert_eq!(tracker.state().errors, 1);
    }
}
