//! Age check: only the exact input "18" opens the next stage.

use std::time::{Duration, Instant};

/// The one accepted answer
pub const EXPECTED_AGE: &str = "18";

/// How long feedback stays visible; success also waits this long before moving on
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(3);

/// Characters accepted in the age field
pub const MAX_AGE_CHARS: usize = 8;

/// Feedback currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeFeedback {
    #[default]
    Hidden,
    Error { since: Instant },
    Success { since: Instant },
}

/// What a submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCheck {
    Accepted,
    Rejected,
    /// Empty input, or a correct answer is already counting down
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct AgeGate {
    feedback: AgeFeedback,
    advance_fired: bool,
}

impl AgeGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feedback(&self) -> AgeFeedback {
        self.feedback
    }

    /// Input is locked while the success countdown runs
    pub fn is_locked(&self) -> bool {
        matches!(self.feedback, AgeFeedback::Success { .. })
    }

    pub fn submit(&mut self, input: &str, now: Instant) -> AgeCheck {
        if self.is_locked() || input.is_empty() {
            return AgeCheck::Ignored;
        }
        if input == EXPECTED_AGE {
            self.feedback = AgeFeedback::Success { since: now };
            AgeCheck::Accepted
        } else {
            self.feedback = AgeFeedback::Error { since: now };
            AgeCheck::Rejected
        }
    }

    /// Expire feedback. Returns true exactly once, when the success delay
    /// has elapsed and the stage should move forward.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.feedback {
            AgeFeedback::Error { since } if now.duration_since(since) >= FEEDBACK_DURATION => {
                self.feedback = AgeFeedback::Hidden;
                false
            }
            AgeFeedback::Success { since }
                if !self.advance_fired && now.duration_since(since) >= FEEDBACK_DURATION =>
            {
                self.advance_fired = true;
                true
            }
            _ => false,
        }
    }
}
