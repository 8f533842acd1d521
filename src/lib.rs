//! # syncset
//!
//! Thread-safe set collections with set algebra and JSON serialization.
//!
//! ## Overview
//!
//! - **Unordered Set**: [`UnorderedSet`](set::UnorderedSet), a hash-backed
//!   set behind a reader/writer lock
//! - **Ordered Set**: [`OrderedSet`](set::OrderedSet), which additionally
//!   replays insertion order using an arena-backed circular list
//! - **Legacy Set**: [`BasicSet`](set::BasicSet), the older name for an
//!   unordered set, kept for existing call sites and payloads
//! - **Set Algebra**: union, intersection, symmetric difference, subtraction
//!   and subset tests across any mix of variants
//! - **Mixed Members**: [`Value`](value::Value) for sets holding scalars of
//!   different types, with typed extraction through
//!   [`TypedSlices`](value::TypedSlices)
//!
//! Every operation takes `&self`; each set carries its own lock, so a set can
//! be shared across threads through an `Arc` without further wrapping.
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` and the JSON helpers
//! - `fxhash`: hash with `rustc-hash` by default
//! - `ahash`: hash with `ahash` by default (takes precedence over `fxhash`)
//!
//! ## Example
//!
//! ```rust
//! use syncset::prelude::*;
//!
//! let ordered = OrderedSet::from_items([2, 3, 4]);
//! let unordered = UnorderedSet::from_items([1, 2, 3]);
//!
//! let union = ordered.union(&unordered);
//! assert_eq!(union.slice(), vec![2, 3, 4, 1]);
//!
//! let difference = ordered.difference(&unordered);
//! assert_eq!(difference.slice(), vec![4, 1]);
//! assert!(ordered.intersection(&unordered).is_subset_of(&unordered));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set variants, the capability traits, [`Value`](crate::value::Value)
/// and the error type. The `Result` alias is left out so that glob imports do
/// not shadow the standard one.
///
/// # Usage
///
/// ```rust
/// use syncset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SetError;
    pub use crate::set::{BasicSet, OrderedSet, Set, SetAlgebra, UnorderedSet};
    pub use crate::value::{TypedSlices, Value};
}

pub mod error;
pub mod set;
pub mod value;

pub use error::{Result, SetError};
