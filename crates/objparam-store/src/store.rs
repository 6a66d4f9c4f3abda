//! The weak-keyed side table mapping live objects to their bags.
//!
//! [`WeakAttributeStore`] keeps a `HashMap<ObjectIdentity, Entry>` behind a
//! `RwLock`. Each entry pairs a `Weak` handle for the keyed object with the
//! object's [`BagHandle`]. Entries whose object has been dropped are swept
//! explicitly, before a snapshot, and on insert once the map has grown past
//! the sweep trigger. `len` and `contains` skip dead entries without
//! removing them.
//!
//! The identity-map lock is never held while a bag lock is taken.
//!
//! # Invariants
//!
//! - The store holds no strong reference to any keyed object.
//! - At most one live entry exists per identity. The `Weak` handle keeps the
//!   allocation reserved, so a dead entry's address cannot be reused by a
//!   new object before the entry is swept.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use tracing::{debug, trace};

use crate::bag::{AttributeBag, BagHandle};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::identity::ObjectIdentity;

/// Reports whether the keyed object still has strong owners.
trait Liveness: Send + Sync {
    fn is_live(&self) -> bool;
}

impl<T: ?Sized + Send + Sync> Liveness for Weak<T> {
    fn is_live(&self) -> bool {
        self.strong_count() > 0
    }
}

struct Entry {
    owner: Box<dyn Liveness>,
    bag: BagHandle,
}

struct Entries {
    map: HashMap<ObjectIdentity, Entry>,
    /// Map size at which the next insertion sweeps first.
    next_sweep_at: usize,
}

impl Entries {
    fn sweep(&mut self, threshold: usize) -> usize {
        let before = self.map.len();
        self.map.retain(|_, entry| entry.owner.is_live());
        let removed = before - self.map.len();
        self.next_sweep_at = threshold.max(self.map.len() * 2);
        if removed > 0 {
            debug!(removed, live = self.map.len(), "swept dead attribute bags");
        }
        removed
    }
}

/// Per-object attribute storage that does not keep objects alive.
///
/// Any `Arc<T>` can be used as a key, including unsized and trait-object
/// payloads. The object's type needs no fields and no `Drop` logic.
pub struct WeakAttributeStore {
    threshold: usize,
    entries: RwLock<Entries>,
}

impl WeakAttributeStore {
    /// Create an empty store with the default [`StoreConfig`].
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Create an empty store with explicit tuning.
    pub fn with_config(config: &StoreConfig) -> Self {
        let threshold = config.sweep_threshold.max(1);
        Self {
            threshold,
            entries: RwLock::new(Entries {
                map: HashMap::new(),
                next_sweep_at: threshold,
            }),
        }
    }

    /// The bag for `obj`, created empty on the first call for that object.
    pub fn get_bag<T>(&self, obj: &Arc<T>) -> StoreResult<BagHandle>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let id = ObjectIdentity::of(obj);
        {
            let entries = self.read_entries()?;
            if let Some(entry) = entries.map.get(&id) {
                if entry.owner.is_live() {
                    return Ok(entry.bag.clone());
                }
            }
        }

        let mut entries = self.write_entries()?;
        // Another thread may have created the bag between the two locks.
        if let Some(entry) = entries.map.get(&id) {
            if entry.owner.is_live() {
                return Ok(entry.bag.clone());
            }
        }
        if entries.map.len() >= entries.next_sweep_at {
            entries.sweep(self.threshold);
        }

        let bag = BagHandle::new();
        entries.map.insert(
            id,
            Entry {
                owner: Box::new(Arc::downgrade(obj)),
                bag: bag.clone(),
            },
        );
        trace!(object = %id, "created attribute bag");
        Ok(bag)
    }

    /// Whether `obj` already has a bag. Never creates one.
    ///
    /// Dead entries are skipped, not removed.
    pub fn contains<T>(&self, obj: &Arc<T>) -> StoreResult<bool>
    where
        T: ?Sized,
    {
        let id = ObjectIdentity::of(obj);
        let entries = self.read_entries()?;
        Ok(entries
            .map
            .get(&id)
            .is_some_and(|entry| entry.owner.is_live()))
    }

    /// Remove the entries of every object that has been dropped.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&self) -> StoreResult<usize> {
        let mut entries = self.write_entries()?;
        Ok(entries.sweep(self.threshold))
    }

    /// Copy of every live association.
    ///
    /// Dead entries are swept first, so an object that has been dropped is
    /// never part of the result. Intended for diagnostics and tests.
    pub fn snapshot(&self) -> StoreResult<HashMap<ObjectIdentity, AttributeBag>> {
        let live: Vec<(ObjectIdentity, BagHandle)> = {
            let mut entries = self.write_entries()?;
            entries.sweep(self.threshold);
            entries
                .map
                .iter()
                .map(|(id, entry)| (*id, entry.bag.clone()))
                .collect()
        };
        // Bags are read only after the map lock is released; a caller may
        // hold a bag guard while waiting on the map.
        live.into_iter()
            .map(|(id, bag)| Ok((id, bag.to_bag()?)))
            .collect()
    }

    /// Number of objects with a live bag. Dead entries are skipped, not
    /// removed.
    pub fn len(&self) -> StoreResult<usize> {
        let entries = self.read_entries()?;
        Ok(entries
            .map
            .values()
            .filter(|entry| entry.owner.is_live())
            .count())
    }

    /// Returns `true` if no live object has a bag.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read_entries(&self) -> StoreResult<RwLockReadGuard<'_, Entries>> {
        self.entries
            .read()
            .map_err(|e| StoreError::LockPoisoned(format!("identity map: {e}")))
    }

    fn write_entries(&self) -> StoreResult<RwLockWriteGuard<'_, Entries>> {
        self.entries
            .write()
            .map_err(|e| StoreError::LockPoisoned(format!("identity map: {e}")))
    }
}

impl Default for WeakAttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WeakAttributeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("WeakAttributeStore");
        s.field("sweep_threshold", &self.threshold);
        match self.entries.read() {
            Ok(entries) => s.field("entry_count", &entries.map.len()),
            Err(_) => s.field("entry_count", &"<poisoned>"),
        };
        s.finish()
    }
}
