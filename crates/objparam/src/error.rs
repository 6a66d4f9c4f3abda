//! Error types for accessor operations.

use objparam_store::StoreError;
use thiserror::Error;

/// Errors raised by the generated accessor methods and their configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// The method was invoked without a live instance to act on.
    #[error("{method}: not called on a live instance")]
    InvalidReceiver { method: String },

    /// The positional argument list cannot be mapped onto a call shape.
    #[error("{method}: invalid argument list of {count} argument(s): {reason}")]
    InvalidArgument {
        method: String,
        count: usize,
        reason: String,
    },

    /// Dynamic dispatch named a method this accessor does not provide.
    #[error("unknown method {method} for noun {noun}")]
    UnknownMethod { method: String, noun: String },

    /// The configured noun cannot be used to form method names.
    #[error("invalid noun: {0:?}")]
    InvalidNoun(String),

    /// The accessor configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Failure in the underlying attribute store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for accessor operations.
pub type ParamResult<T> = std::result::Result<T, ParamError>;
