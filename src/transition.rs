//! Timed hand-off between stages.
//!
//! A request raises the overlay immediately, commits the new stage through
//! the state machine after `COMMIT_DELAY`, and drops the overlay once
//! `OVERLAY_DURATION` has passed since the request. The stage swap is always
//! hidden behind the overlay.
//!
//! Only one request is pending at a time: a newer request replaces an
//! uncommitted one, and its timing starts over.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use crate::machine::StageMachine;
use crate::models::Stage;
use crate::storage::KeyValueStore;

/// Delay between the request and the stage change
pub const COMMIT_DELAY: Duration = Duration::from_millis(250);

/// Total time the overlay stays up
pub const OVERLAY_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("no transition from {from} to {to}")]
    Illegal { from: Stage, to: Stage },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// Overlay up, stage not yet changed
    Pending { target: Stage, started: Instant },
    /// Stage changed, overlay still fading
    Committed { started: Instant },
}

#[derive(Debug, Default)]
pub struct TransitionController {
    phase: TransitionPhase,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    pub fn pending_target(&self) -> Option<Stage> {
        match self.phase {
            TransitionPhase::Pending { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Schedule a move to `next`. Legal targets are the successor of the
    /// current stage, or `Welcome` (restart) from anywhere.
    pub fn request<S: KeyValueStore>(
        &mut self,
        machine: &StageMachine<S>,
        next: Stage,
        now: Instant,
    ) -> Result<(), TransitionError> {
        let from = machine.current();
        if next != Stage::Welcome && from.next() != Some(next) {
            return Err(TransitionError::Illegal { from, to: next });
        }

        if let TransitionPhase::Pending { target, .. } = self.phase {
            debug!("Transition to {} superseded by {}", target, next);
        }
        self.phase = TransitionPhase::Pending {
            target: next,
            started: now,
        };
        Ok(())
    }

    /// Perform whatever is due at `now`. Returns the stage committed during
    /// this call, if any.
    pub fn tick<S: KeyValueStore>(
        &mut self,
        machine: &mut StageMachine<S>,
        now: Instant,
    ) -> Option<Stage> {
        let mut committed = None;

        if let TransitionPhase::Pending { target, started } = self.phase {
            if now.saturating_duration_since(started) < COMMIT_DELAY {
                return None;
            }
            committed = Some(Self::commit(machine, target));
            self.phase = TransitionPhase::Committed { started };
        }

        if let TransitionPhase::Committed { started } = self.phase {
            if now.saturating_duration_since(started) >= OVERLAY_DURATION {
                self.phase = TransitionPhase::Idle;
            }
        }

        committed
    }

    fn commit<S: KeyValueStore>(machine: &mut StageMachine<S>, target: Stage) -> Stage {
        if target == Stage::Welcome {
            return machine.restart();
        }
        if machine.current().next() == Some(target) {
            machine.advance()
        } else {
            warn!(
                "Dropping stale transition to {} (current stage {})",
                target,
                machine.current()
            );
            machine.current()
        }
    }
}
