//! Engine error type.
//!
//! Sub-crates define their own error enums where they touch I/O or locking
//! and convert `TfError` into them via `From` impls.

use thiserror::Error;

/// The top-level error type for `tf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `tf-*` crates.
pub type TfResult<T> = Result<T, TfError>;
