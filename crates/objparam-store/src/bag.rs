//! Per-object key/value bags.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// The parameters stored for one object.
///
/// A key maps to any JSON value. A key holding `Value::Null` is present;
/// a key that was never inserted (or was removed) is absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    entries: HashMap<String, Value>,
}

impl AttributeBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Store `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Remove `key`, returning the value it held.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Whether `key` is present, regardless of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the stored key names in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over the stored entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bag holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared, lockable handle to one object's [`AttributeBag`].
///
/// Handles are cheap to clone. Holding one does not keep the bag's object
/// alive, and a handle obtained before the object was reclaimed keeps
/// working but is no longer reachable through the store.
#[derive(Clone, Debug, Default)]
pub struct BagHandle {
    inner: Arc<RwLock<AttributeBag>>,
}

impl BagHandle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Lock the bag for reading.
    pub fn read(&self) -> StoreResult<RwLockReadGuard<'_, AttributeBag>> {
        self.inner
            .read()
            .map_err(|e| StoreError::LockPoisoned(format!("bag: {e}")))
    }

    /// Lock the bag for writing.
    pub fn write(&self) -> StoreResult<RwLockWriteGuard<'_, AttributeBag>> {
        self.inner
            .write()
            .map_err(|e| StoreError::LockPoisoned(format!("bag: {e}")))
    }

    /// Copy of the bag's current contents.
    pub fn to_bag(&self) -> StoreResult<AttributeBag> {
        Ok(self.read()?.clone())
    }

    /// Whether two handles refer to the same bag.
    pub fn ptr_eq(&self, other: &BagHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
