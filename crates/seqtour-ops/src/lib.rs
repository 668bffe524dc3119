//! Query-style sequence operators for Rust iterators.
//!
//! The standard library already covers most everyday sequence work
//! (`filter`, `map`, `flat_map`, `skip_while`, `any`, `sum`, `max_by_key`,
//! `chain`, `zip`, ...). This crate fills in the rest of the classic query
//! vocabulary through one extension trait, [`SeqExt`], implemented for every
//! iterator:
//!
//! - partitioning: `skip_last`, `take_last`
//! - projection: `chunk`
//! - manipulation: `append`, `prepend`
//! - element access: `first_where`, `last_where`, `single`, `single_where`,
//!   `single_where_or`, `element_at`, `default_if_empty`
//! - aggregation: `try_len`, `average`, `max_required`, `min_required`,
//!   `reduce_required`, `aggregate`
//! - sets: `distinct`, `distinct_by`, `union`, `union_by`, `intersect`,
//!   `intersect_by`, `except`, `except_by`
//! - joins and groups: `zip3`, `join`, `group_join`, `group_by`, `to_lookup`
//! - sorting: `order_by`, `order_by_descending`, then [`Ordered::then_by`]
//!   and [`Ordered::then_by_descending`]
//!
//! # Quick Start
//!
//! ```rust
//! use seqtour_ops::SeqExt;
//!
//! let ages = [36, 20, 16, 16];
//!
//! let distinct: Vec<_> = ages.iter().distinct().collect();
//! assert_eq!(distinct, [&36, &20, &16]);
//!
//! let oldest = ages.iter().single_where(|a| **a > 30).unwrap();
//! assert_eq!(*oldest, 36);
//!
//! assert!(ages.iter().single_where(|a| **a == 16).is_err());
//! ```
//!
//! # Execution
//!
//! Adapters (`SkipLast`, `Chunk`, `DistinctBy`, ...) are lazy and pull from
//! their source only while being consumed. Operators that return a value,
//! a `Vec`, a [`Lookup`] or a [`Result`] consume the source immediately.
//! [`Ordered`] sits in between: it owns its elements but sorts only when
//! turned into a vector or iterated.
//!
//! No operator mutates its source. Borrowed sources (`slice.iter()`) are left
//! exactly as they were.

mod adapters;
mod error;
mod ext;
pub mod group;
mod ordering;

// Re-export public API
pub use adapters::{Chunk, DefaultIfEmpty, DistinctBy, SetFilter, SkipLast, TakeLast};
pub use error::{Result, SeqError};
pub use ext::{Identity, SeqExt, Zip3};
pub use group::{Grouping, Lookup};
pub use ordering::{Dir, Ordered};
