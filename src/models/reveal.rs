//! Timed phases of the final reveal.

use std::time::{Duration, Instant};

pub const GIFT_DELAY: Duration = Duration::from_secs(1);
pub const MESSAGE_DELAY: Duration = Duration::from_secs(3);
pub const RESTART_DELAY: Duration = Duration::from_secs(5);

/// How much of the reveal is visible, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealPhase {
    Intro,
    Gift,
    Message,
    /// The restart action is offered
    Finale,
}

#[derive(Debug, Clone, Copy)]
pub struct RevealSequence {
    entered: Instant,
}

impl RevealSequence {
    pub fn new(entered: Instant) -> Self {
        Self { entered }
    }

    pub fn phase(&self, now: Instant) -> RevealPhase {
        let elapsed = now.saturating_duration_since(self.entered);
        if elapsed >= RESTART_DELAY {
            RevealPhase::Finale
        } else if elapsed >= MESSAGE_DELAY {
            RevealPhase::Message
        } else if elapsed >= GIFT_DELAY {
            RevealPhase::Gift
        } else {
            RevealPhase::Intro
        }
    }

    pub fn can_restart(&self, now: Instant) -> bool {
        self.phase(now) == RevealPhase::Finale
    }
}
