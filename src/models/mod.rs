//! Data models for the birthday journey
//!
//! This module contains the core data structures:
//! - The stage enum and its forward order
//! - Static copy, dream categories and life statistics
//! - Per-stage input state (age check, dreams, stats tour, reveal)

pub mod age;
pub mod content;
pub mod dreams;
pub mod reveal;
pub mod stage;
pub mod stats;

// Re-exports for convenient access
pub use age::{AgeCheck, AgeFeedback, AgeGate};
pub use dreams::{Dream, DreamFlow, DreamRejection, SubmitOutcome};
pub use reveal::{RevealPhase, RevealSequence};
pub use stage::Stage;
pub use stats::StatsTour;
