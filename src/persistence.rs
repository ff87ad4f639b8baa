//! Stage persistence on top of a `KeyValueStore`.
//!
//! A single slot holds the current stage id. Reads normalize anything that
//! is not a known stage to "absent"; writes never fail visibly, backend
//! errors are only logged.

use tracing::warn;

use crate::models::Stage;
use crate::storage::KeyValueStore;

/// Storage key for the current stage
pub const STAGE_KEY: &str = "birthdayStage";

pub struct StagePersistence<S> {
    store: S,
}

impl<S: KeyValueStore> StagePersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored stage, or `None` if the slot is empty, unreadable or
    /// holds an unknown value.
    pub fn load(&self) -> Option<Stage> {
        match self.store.get(STAGE_KEY) {
            Ok(Some(raw)) => {
                let stage = Stage::from_id(&raw);
                if stage.is_none() {
                    warn!("Ignoring unrecognized stored stage {:?}", raw);
                }
                stage
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read stored stage: {}", e);
                None
            }
        }
    }

    pub fn save(&self, stage: Stage) {
        if let Err(e) = self.store.set(STAGE_KEY, stage.id()) {
            warn!("Failed to save stage {}: {}", stage, e);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove(STAGE_KEY) {
            warn!("Failed to clear stored stage: {}", e);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
