//! Stage state machine.
//!
//! Owns the current stage and is the only place it changes. The stage is
//! read from persistence once, at construction; every later change goes
//! through `advance` or `restart`, and both keep storage in sync.

use tracing::{debug, info};

use crate::models::Stage;
use crate::persistence::StagePersistence;
use crate::storage::KeyValueStore;

pub struct StageMachine<S> {
    current: Stage,
    persistence: StagePersistence<S>,
}

impl<S: KeyValueStore> StageMachine<S> {
    /// Resume from the stored stage, or start at `Welcome`
    pub fn new(persistence: StagePersistence<S>) -> Self {
        let current = persistence.load().unwrap_or_default();
        info!("Starting at stage {}", current);
        Self {
            current,
            persistence,
        }
    }

    pub fn current(&self) -> Stage {
        self.current
    }

    /// Move to the successor and persist it. At `BigReveal` this does nothing.
    pub fn advance(&mut self) -> Stage {
        match self.current.next() {
            Some(next) => {
                info!("Stage {} -> {}", self.current, next);
                self.current = next;
                self.persistence.save(next);
            }
            None => debug!("Advance ignored at terminal stage {}", self.current),
        }
        self.current
    }

    /// Forget stored progress and go back to `Welcome`
    pub fn restart(&mut self) -> Stage {
        info!("Restarting from stage {}", self.current);
        self.persistence.clear();
        self.current = Stage::Welcome;
        self.current
    }

    pub fn persistence(&self) -> &StagePersistence<S> {
        &self.persistence
    }
}
