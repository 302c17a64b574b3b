//! Error types for path tokenizing and evaluation.

use thiserror::Error;

/// Errors produced by the precise (`try_get`/`try_set`) layer.
///
/// The public `get`/`get_or`/`set` entry points collapse all of these to a
/// default value or a no-op; the variants exist so the internal failure mode
/// stays observable for callers and tests that want it.
#[derive(Error, Debug)]
pub enum PathError {
    /// Internal lexer invariant violation. Reserved: merely malformed input
    /// (unmatched delimiters and the like) degrades to best-effort tokens
    /// instead of raising this.
    #[error("tokenize error: {0}")]
    Tokenize(String),

    /// A write required sequence semantics from a non-sequence value.
    #[error("cannot index non-sequence value with [{index}]")]
    NotIndexable { index: i64 },

    /// A write's target is a scalar that cannot hold named members.
    #[error("cannot assign member {name:?} on non-object value")]
    NotAssignable { name: String },

    /// A write's final token is a function call; a call result is not an
    /// assignable location.
    #[error("function call is not an assignable target")]
    InvalidTarget,

    /// A call token named a member that is not callable.
    #[error("member {name:?} is not invocable")]
    NotInvocable { name: String },

    /// JSON interop hit a value JSON cannot represent (a native function,
    /// an absent slot, or a non-finite number).
    #[error("value cannot be represented as JSON: {0}")]
    Unrepresentable(String),
}

/// Convenience alias used throughout fieldpath.
pub type Result<T> = std::result::Result<T, PathError>;
