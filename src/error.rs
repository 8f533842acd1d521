//! Error types for set construction and serialization.
//!
//! Most set operations cannot fail: removing an absent element is a no-op,
//! membership tests simply return `false`, and typed extraction silently
//! filters mismatching variants. The errors here cover the remaining
//! boundary cases, namely decoding serialized input and offering a value
//! that has no usable equality.

use thiserror::Error;

/// Errors produced by the set library.
///
/// # Examples
///
/// ```rust
/// use syncset::SetError;
///
/// let error = SetError::Uncomparable { kind: "array" };
/// assert_eq!(
///     format!("{error}"),
///     "uncomparable value: array cannot be stored in a set"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SetError {
    /// The input was not a valid JSON array of set elements.
    #[cfg(feature = "serde")]
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The set elements could not be written as JSON.
    #[cfg(feature = "serde")]
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A value without a well-defined equality was offered as an element.
    #[error("uncomparable value: {kind} cannot be stored in a set")]
    Uncomparable {
        /// The kind of value that was rejected (`"array"` or `"object"`).
        kind: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SetError>;
