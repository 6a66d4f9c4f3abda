use serde::{Deserialize, Serialize};

/// Tuning for a [`WeakAttributeStore`](crate::WeakAttributeStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Entry count at which an insertion first triggers a sweep of dead
    /// entries. After each sweep the next trigger is set to twice the number
    /// of surviving entries, but never below this value.
    pub sweep_threshold: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            sweep_threshold: 64,
        }
    }
}
