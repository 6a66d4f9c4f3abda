//! Out-of-band attribute storage keyed by object identity.
//!
//! A [`WeakAttributeStore`] gives any `Arc`-managed object its own private
//! [`AttributeBag`] without adding fields to the object. The store only
//! keeps a `Weak` reference to each object, so it never extends an object's
//! lifetime; once the last `Arc` is dropped the object's entry is swept.
//!
//! # Modules
//!
//! - [`error`] — Error types for store operations
//! - [`identity`] — [`ObjectIdentity`], the opaque lookup key
//! - [`bag`] — [`AttributeBag`] and the shared [`BagHandle`]
//! - [`config`] — [`StoreConfig`] tuning knobs
//! - [`store`] — The [`WeakAttributeStore`] itself
//!
//! # Design Rules
//!
//! 1. The store never holds a strong reference to a keyed object.
//! 2. A bag is created lazily on the first access for its object.
//! 3. Dead entries are swept before the store's contents are observed.
//! 4. The identity map and each bag are locked independently.

pub mod bag;
pub mod config;
pub mod error;
pub mod identity;
pub mod store;

pub use bag::{AttributeBag, BagHandle};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use identity::ObjectIdentity;
pub use store::WeakAttributeStore;

/// The value type stored in bags. `Value::Null` is a stored null, distinct
/// from an absent key.
pub use serde_json::Value;
