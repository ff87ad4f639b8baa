//! Life statistics tour. Continuing is only offered once every stat was viewed.

use super::content::{LifeStat, LIFE_STATS};

#[derive(Debug, Clone)]
pub struct StatsTour {
    current: usize,
    viewed: Vec<usize>,
}

impl Default for StatsTour {
    fn default() -> Self {
        // The first stat counts as viewed on entry
        Self {
            current: 0,
            viewed: vec![0],
        }
    }
}

impl StatsTour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &'static LifeStat {
        &LIFE_STATS[self.current]
    }

    pub fn is_viewed(&self, index: usize) -> bool {
        self.viewed.contains(&index)
    }

    pub fn viewed_count(&self) -> usize {
        self.viewed.len()
    }

    pub fn all_viewed(&self) -> bool {
        self.viewed.len() == LIFE_STATS.len()
    }

    /// Select a stat. Returns true if this is the first time it is viewed.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= LIFE_STATS.len() {
            return false;
        }
        self.current = index;
        if self.is_viewed(index) {
            false
        } else {
            self.viewed.push(index);
            true
        }
    }

    pub fn select_next(&mut self) -> bool {
        self.select((self.current + 1) % LIFE_STATS.len())
    }

    pub fn select_previous(&mut self) -> bool {
        let len = LIFE_STATS.len();
        self.select((self.current + len - 1) % len)
    }
}
