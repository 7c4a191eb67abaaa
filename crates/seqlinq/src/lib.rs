//! Seqlinq - LINQ-to-Objects style operators for Rust iterators.
//!
//! Seqlinq wraps any iterator in a [`Seq`] that carries the familiar query
//! operators as methods. It supports:
//!
//! - Filtering and projection: `where_`, `select`, `select_many`, `cast`
//! - Partitioning: `skip`, `take`, their `while` and `last` forms, `chunk`
//! - Set operators with pluggable equality: `distinct`, `union`, `intersect`,
//!   `except`
//! - Hash joins: `join`, `group_join`, `left_join`
//! - Grouping into a [`Lookup`] of [`Grouping`]s
//! - Deferred, stable, multi-key sorting via [`OrderedEnumerable`]
//! - Aggregates, element access and conversions
//! - A cursor-style [`Enumerator`] API alongside the iterator one
//!
//! # Quick Start
//!
//! ```rust
//! use seqlinq::IntoSeq;
//!
//! struct Order {
//!     customer: &'static str,
//!     total: u32,
//! }
//!
//! let orders = vec![
//!     Order { customer: "ada", total: 40 },
//!     Order { customer: "bob", total: 15 },
//!     Order { customer: "ada", total: 25 },
//!     Order { customer: "cy", total: 90 },
//! ];
//!
//! let ranking: Vec<(&str, u32)> = orders
//!     .iter()
//!     .into_seq()
//!     .group_by(|o| o.customer)
//!     .select(|g| (*g.key(), g.iter().map(|o| o.total).sum::<u32>()))
//!     .order_by_descending(|(_, total)| *total)
//!     .take(2)
//!     .to_vec();
//!
//! assert_eq!(ranking, vec![("cy", 90), ("ada", 65)]);
//! ```
//!
//! # Deferred and Immediate Operators
//!
//! Operators that return a `Seq` are deferred: they do nothing until the
//! result is iterated, and they read the source at most once. Buffering
//! operators (`reverse`, `take_last`, `group_by`, ordering, ...) read the
//! whole source on the first pull. Operators that return anything else
//! (`count`, `first`, `to_vec`, `to_lookup`, ...) consume the source
//! immediately. Fallible ones return [`Result`].
//!
//! # Comparers
//!
//! Ordering operators accept a [`Comparer`] and hash based operators an
//! [`EqualityComparer`]; both come from the `seqlinq-compare` crate and are
//! re-exported here.
//!
//! | Family | Deferred | Immediate |
//! |--------|----------|-----------|
//! | Projection | `where_`, `select`, `select_many`, `index`, `of_type` | |
//! | Partition | `skip`, `take`, `skip_last`, `take_last`, `chunk` | |
//! | Combine | `concat`, `zip`, `append`, `reverse`, `default_if_empty` | |
//! | Set | `distinct`, `union`, `intersect`, `except` | |
//! | Join | `join`, `group_join`, `left_join` | |
//! | Grouping | `group_by`, `count_by`, `aggregate_by` | `to_lookup` |
//! | Ordering | `order_by`, `then_by` | |
//! | Aggregate | | `aggregate`, `count`, `sum`, `average`, `min`, `max`, `all`, `any` |
//! | Element | | `first`, `last`, `single`, `element_at` |
//! | Conversion | | `to_vec`, `to_hash_set`, `to_dictionary`, `for_each` |

mod enumerator;
mod error;
mod hashing;
mod lookup;
mod num;
mod ops;
mod ordered;
#[cfg(feature = "parallel")]
mod parallel;
mod seq;

// Re-export public API
pub use enumerator::{
    BufferedEnumerator, ChannelEnumerator, Enumerable, Enumerator, EnumeratorIter,
    FactoryEnumerable, FactoryEnumerator, IterEnumerator, PushEnumerable, SliceEnumerator,
};
pub use error::{Result, SeqError};
pub use lookup::{Grouping, Lookup};
pub use num::{Averageable, Summable};
pub use ops::{
    Chunk, DefaultIfEmpty, GroupJoin, Join, LeftJoin, SelectManyWith, SetFilter, SkipLast,
};
pub use ordered::{Ordered, OrderedEnumerable};
#[cfg(feature = "parallel")]
pub use parallel::ParallelOptions;
pub use seq::{empty, from, range, repeat, IntoSeq, Seq};
pub use seqlinq_compare::{
    CaseInsensitive, Comparer, DefaultComparer, DefaultEquality, Dir, Directed, EqualityComparer,
    FloatComparer, FloatEquality, KeyComparer, KeyEquality, ThenComparer,
};

/// Glob-importable traits and entry points.
///
/// ```
/// use seqlinq::prelude::*;
///
/// let firsts = vec!["x", "y"].into_seq().first()?;
/// assert_eq!(firsts, "x");
/// # Ok::<(), seqlinq::SeqError>(())
/// ```
pub mod prelude {
    pub use crate::{Comparer, Enumerable, Enumerator, EqualityComparer, IntoSeq, Seq};
}
