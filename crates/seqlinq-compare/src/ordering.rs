//! Ordering comparers.
//!
//! Provides [`Dir`] for sort direction and the [`Comparer`] trait with its
//! building blocks: [`DefaultComparer`], [`Directed`], [`KeyComparer`],
//! [`ThenComparer`] and the float and string specialisations.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A total ordering over values of `T`.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparer, so ad-hoc orderings
/// need no wrapper type:
///
/// ```
/// use seqlinq_compare::Comparer;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert!(by_len.compare(&"aa", &"b").is_gt());
/// ```
pub trait Comparer<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares values with their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DefaultComparer;

impl<T: Ord + ?Sized> Comparer<T> for DefaultComparer {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Applies a [`Dir`] to an inner comparer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directed<C> {
    inner: C,
    dir: Dir,
}

impl<C> Directed<C> {
    /// Wraps `inner` with the given direction.
    pub fn new(inner: C, dir: Dir) -> Self {
        Directed { inner, dir }
    }

    /// Orders in the opposite direction of `inner`.
    pub fn desc(inner: C) -> Self {
        Directed::new(inner, Dir::Desc)
    }

    /// Returns the direction.
    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Returns the wrapped comparer.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Directed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.dir.apply(self.inner.compare(a, b))
    }
}

/// Compares values by a projected key.
///
/// The key selector runs on every comparison; keys are not cached.
pub struct KeyComparer<F, K, C = DefaultComparer> {
    key: F,
    comparer: C,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyComparer<F, K, DefaultComparer> {
    /// Compares keys with their [`Ord`] implementation.
    pub fn new(key: F) -> Self {
        KeyComparer::with_comparer(key, DefaultComparer)
    }
}

impl<F, K, C> KeyComparer<F, K, C> {
    /// Compares keys with `comparer`.
    pub fn with_comparer(key: F, comparer: C) -> Self {
        KeyComparer {
            key,
            comparer,
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K, C: Clone> Clone for KeyComparer<F, K, C> {
    fn clone(&self) -> Self {
        KeyComparer::with_comparer(self.key.clone(), self.comparer.clone())
    }
}

impl<F, K, C: std::fmt::Debug> std::fmt::Debug for KeyComparer<F, K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyComparer")
            .field("comparer", &self.comparer)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F, K, C> Comparer<T> for KeyComparer<F, K, C>
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparer.compare(&(self.key)(a), &(self.key)(b))
    }
}

/// Uses the first comparer, then the second to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ThenComparer<A, B> {
    first: A,
    second: B,
}

impl<A, B> ThenComparer<A, B> {
    /// Chains two comparers.
    pub fn new(first: A, second: B) -> Self {
        ThenComparer { first, second }
    }
}

impl<T: ?Sized, A: Comparer<T>, B: Comparer<T>> Comparer<T> for ThenComparer<A, B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.second.compare(a, b),
            ordering => ordering,
        }
    }
}

/// Total ordering for floats where NaN sorts before every number.
///
/// `-0.0` and `0.0` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FloatComparer;

macro_rules! float_comparer {
    ($($t:ty),*) => {
        $(
            impl Comparer<$t> for FloatComparer {
                fn compare(&self, a: &$t, b: &$t) -> Ordering {
                    match (a.is_nan(), b.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )*
    };
}

float_comparer!(f32, f64);

/// Case-insensitive string comparison.
///
/// Strings are compared character by character after Unicode lowercasing.
/// Also an [`EqualityComparer`](crate::EqualityComparer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CaseInsensitive;

pub(crate) fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl Comparer<str> for CaseInsensitive {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        folded(a).cmp(folded(b))
    }
}

impl Comparer<String> for CaseInsensitive {
    fn compare(&self, a: &String, b: &String) -> Ordering {
        folded(a).cmp(folded(b))
    }
}

impl Comparer<&str> for CaseInsensitive {
    fn compare(&self, a: &&str, b: &&str) -> Ordering {
        folded(a).cmp(folded(b))
    }
}
