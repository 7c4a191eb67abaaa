//! Comparer and equality-comparer helpers for `seqlinq`.
//!
//! Ordering operators (`order_by`, `min_with`, ...) take a [`Comparer`];
//! hash based operators (`distinct_with`, `join_with`, `to_lookup_with`, ...)
//! take an [`EqualityComparer`]. This crate holds both traits and the stock
//! implementations.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use seqlinq_compare::{CaseInsensitive, Comparer, Directed, EqualityComparer, KeyComparer, ThenComparer};
//!
//! // Order by length, longest first, then alphabetically ignoring case.
//! let cmp = ThenComparer::new(
//!     Directed::desc(KeyComparer::new(|s: &&str| s.len())),
//!     CaseInsensitive,
//! );
//! assert_eq!(cmp.compare(&"abc", &"z"), Ordering::Less);
//! assert_eq!(cmp.compare(&"Abc", &"abd"), Ordering::Less);
//!
//! assert!(EqualityComparer::<str>::equals(&CaseInsensitive, "Rust", "RUST"));
//! ```
//!
//! | Comparer | Orders by |
//! |----------|-----------|
//! | [`DefaultComparer`] | `Ord` |
//! | [`Directed`] | inner comparer, optionally reversed |
//! | [`KeyComparer`] | projected key |
//! | [`ThenComparer`] | first comparer, ties broken by the second |
//! | [`FloatComparer`] | float value, NaN first |
//! | [`CaseInsensitive`] | lowercased characters |

mod equality;
mod ordering;

pub use equality::{hash_one, DefaultEquality, EqualityComparer, FloatEquality, KeyEquality};
pub use ordering::{
    CaseInsensitive, Comparer, DefaultComparer, Dir, Directed, FloatComparer, KeyComparer,
    ThenComparer,
};
