//! The five stages of the journey and their fixed forward order.

use serde::{Deserialize, Serialize};

/// One step of the journey. Declaration order is the forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[default]
    Welcome,
    AgeVerification,
    MemoryLane,
    Wishes,
    BigReveal,
}

impl Stage {
    /// All stages in forward order
    pub const ALL: [Stage; 5] = [
        Stage::Welcome,
        Stage::AgeVerification,
        Stage::MemoryLane,
        Stage::Wishes,
        Stage::BigReveal,
    ];

    /// Identifier used in durable storage
    pub fn id(&self) -> &'static str {
        match self {
            Stage::Welcome => "welcome",
            Stage::AgeVerification => "age-verification",
            Stage::MemoryLane => "memory-lane",
            Stage::Wishes => "wishes",
            Stage::BigReveal => "big-reveal",
        }
    }

    /// Parse a stored identifier. Anything outside the five known ids is `None`.
    pub fn from_id(id: &str) -> Option<Stage> {
        Stage::ALL.into_iter().find(|stage| stage.id() == id)
    }

    /// Successor in the linear walk. `BigReveal` has none.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Welcome => Some(Stage::AgeVerification),
            Stage::AgeVerification => Some(Stage::MemoryLane),
            Stage::MemoryLane => Some(Stage::Wishes),
            Stage::Wishes => Some(Stage::BigReveal),
            Stage::BigReveal => None,
        }
    }

    /// Position in the forward order (Welcome = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// The progress dots are hidden on the first and last stage.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Stage::Welcome | Stage::BigReveal)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
