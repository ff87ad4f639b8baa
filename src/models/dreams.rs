//! Dream collection: one free-text entry per category, then a read-only summary.

use serde::{Deserialize, Serialize};

use super::content::{DreamCategory, DREAM_CATEGORIES};

/// Maximum characters kept per dream
pub const MAX_DREAM_CHARS: usize = 200;

/// A user-submitted (category, text) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dream {
    pub category_id: u8,
    pub text: String,
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DreamRejection {
    /// Text was empty after trimming
    Blank,
    /// The summary is already showing; the collection is frozen
    Closed,
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved on to the category at this index
    NextCategory(usize),
    /// Last category filled, summary is now showing
    SummaryReady,
}

/// Input state for the memory-lane stage
#[derive(Debug, Clone, Default)]
pub struct DreamFlow {
    dreams: Vec<Dream>,
    category_index: usize,
    showing_summary: bool,
}

impl DreamFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category currently asked for, `None` once the summary is showing
    pub fn current_category(&self) -> Option<&'static DreamCategory> {
        if self.showing_summary {
            None
        } else {
            DREAM_CATEGORIES.get(self.category_index)
        }
    }

    pub fn category_index(&self) -> usize {
        self.category_index
    }

    pub fn dreams(&self) -> &[Dream] {
        &self.dreams
    }

    pub fn is_showing_summary(&self) -> bool {
        self.showing_summary
    }

    /// The skip shortcut appears once at least one dream exists
    pub fn can_skip(&self) -> bool {
        !self.showing_summary && !self.dreams.is_empty()
    }

    /// Submit text for the current category
    pub fn submit(&mut self, text: &str) -> Result<SubmitOutcome, DreamRejection> {
        let Some(category) = self.current_category() else {
            return Err(DreamRejection::Closed);
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DreamRejection::Blank);
        }

        self.dreams.push(Dream {
            category_id: category.id,
            text: trimmed.chars().take(MAX_DREAM_CHARS).collect(),
        });

        if self.category_index + 1 < DREAM_CATEGORIES.len() {
            self.category_index += 1;
            Ok(SubmitOutcome::NextCategory(self.category_index))
        } else {
            self.showing_summary = true;
            Ok(SubmitOutcome::SummaryReady)
        }
    }

    /// Jump to the summary with whatever has been collected so far.
    /// Returns false when the shortcut is not available.
    pub fn skip_to_summary(&mut self) -> bool {
        if !self.can_skip() {
            return false;
        }
        self.showing_summary = true;
        true
    }
}

/// Append a typed character unless the buffer is already at the cap
pub fn push_capped(buffer: &mut String, c: char, max_chars: usize) {
    if buffer.chars().count() < max_chars {
        buffer.push(c);
    }
}
