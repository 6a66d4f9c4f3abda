//! Named-parameter accessors for any `Arc`-managed type.
//!
//! This crate gives a type the classic `param` accessor trio without adding
//! a single field to it:
//!
//! - `param(call)` lists names, reads one value, writes one value, or writes
//!   many values in order, depending on the [`ParamCall`] shape
//! - `has_param(name)` reports whether a name is set, even to null
//! - `delete_param(names)` removes names and returns what they held
//!
//! Parameters live in a [`WeakAttributeStore`] keyed by object identity.
//! The store never keeps an object alive and drops its bag once the last
//! `Arc` goes away, so the consuming type needs no cleanup logic.
//!
//! The trio can be installed several times under different nouns with the
//! [`param_accessors!`] macro (`tag`, `has_tag`, `delete_tag`, ...). Each
//! installation owns an independent store.
//!
//! # Modules
//!
//! - [`error`] — [`ParamError`] and the [`ParamResult`] alias
//! - [`config`] — [`AccessorConfig`] and method naming
//! - [`call`] — [`ParamCall`] and positional argument dispatch
//! - [`reply`] — [`ParamReply`], [`Assigned`] and [`Deleted`]
//! - [`accessor`] — [`ParamAccessor`], the binding behind each noun

pub mod accessor;
pub mod call;
pub mod config;
pub mod error;
mod macros;
pub mod reply;

pub use accessor::{Object, ParamAccessor};
pub use call::ParamCall;
pub use config::{validate_noun, AccessorConfig, MethodNames, DEFAULT_NOUN};
pub use error::{ParamError, ParamResult};
pub use reply::{Assigned, Deleted, ParamReply};

// Re-export the store layer for ergonomic imports.
pub use objparam_store::{
    AttributeBag, BagHandle, ObjectIdentity, StoreConfig, StoreError, StoreResult, Value,
    WeakAttributeStore,
};

#[doc(hidden)]
pub mod __private {
    pub use pastey::paste;
}
