//! Equality comparers.
//!
//! An [`EqualityComparer`] decides whether two values are the same and hashes
//! them consistently. Set operators, joins and lookups dispatch through it.

use std::hash::{BuildHasher, Hash, Hasher};
use std::marker::PhantomData;

use crate::ordering::{folded, CaseInsensitive};

/// Equality and hashing over values of `T`.
///
/// Implementations must keep `equals(a, b)` ⇒ `hash(a) == hash(b)`.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if both values are considered equal.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Feeds `value` into `state`.
    fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

impl<T: ?Sized, C: EqualityComparer<T>> EqualityComparer<T> for &C {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (**self).hash(value, state)
    }
}

/// Hashes `value` through `comparer` with a hasher built by `build`.
pub fn hash_one<T, C, S>(build: &S, comparer: &C, value: &T) -> u64
where
    T: ?Sized,
    C: EqualityComparer<T>,
    S: BuildHasher,
{
    let mut hasher = build.build_hasher();
    comparer.hash(value, &mut hasher);
    hasher.finish()
}

/// Uses the [`Eq`] and [`Hash`] implementations of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DefaultEquality;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for DefaultEquality {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state)
    }
}

/// Compares values by a projected key.
///
/// ```
/// use seqlinq_compare::{EqualityComparer, KeyEquality};
///
/// let by_id = KeyEquality::new(|p: &(u32, &str)| p.0);
/// assert!(by_id.equals(&(7, "ada"), &(7, "grace")));
/// ```
pub struct KeyEquality<F, K, C = DefaultEquality> {
    key: F,
    comparer: C,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyEquality<F, K, DefaultEquality> {
    /// Compares keys with their [`Eq`] and [`Hash`] implementations.
    pub fn new(key: F) -> Self {
        KeyEquality::with_comparer(key, DefaultEquality)
    }
}

impl<F, K, C> KeyEquality<F, K, C> {
    /// Compares keys with `comparer`.
    pub fn with_comparer(key: F, comparer: C) -> Self {
        KeyEquality {
            key,
            comparer,
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K, C: Clone> Clone for KeyEquality<F, K, C> {
    fn clone(&self) -> Self {
        KeyEquality::with_comparer(self.key.clone(), self.comparer.clone())
    }
}

impl<F, K, C: std::fmt::Debug> std::fmt::Debug for KeyEquality<F, K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyEquality")
            .field("comparer", &self.comparer)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F, K, C> EqualityComparer<T> for KeyEquality<F, K, C>
where
    F: Fn(&T) -> K,
    C: EqualityComparer<K>,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self.comparer.equals(&(self.key)(a), &(self.key)(b))
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        self.comparer.hash(&(self.key)(value), state)
    }
}

/// Float equality where NaN equals NaN and `-0.0` equals `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FloatEquality;

macro_rules! float_equality {
    ($($t:ty => $bits:ty),*) => {
        $(
            impl EqualityComparer<$t> for FloatEquality {
                fn equals(&self, a: &$t, b: &$t) -> bool {
                    (a.is_nan() && b.is_nan()) || a == b
                }

                fn hash<H: Hasher>(&self, value: &$t, state: &mut H) {
                    let bits: $bits = if value.is_nan() {
                        <$t>::NAN.to_bits()
                    } else if *value == 0.0 {
                        0
                    } else {
                        value.to_bits()
                    };
                    bits.hash(state)
                }
            }
        )*
    };
}

float_equality!(f32 => u32, f64 => u64);

impl EqualityComparer<str> for CaseInsensitive {
    fn equals(&self, a: &str, b: &str) -> bool {
        folded(a).eq(folded(b))
    }

    fn hash<H: Hasher>(&self, value: &str, state: &mut H) {
        for c in folded(value) {
            c.hash(state);
        }
    }
}

impl EqualityComparer<String> for CaseInsensitive {
    fn equals(&self, a: &String, b: &String) -> bool {
        EqualityComparer::<str>::equals(self, a, b)
    }

    fn hash<H: Hasher>(&self, value: &String, state: &mut H) {
        EqualityComparer::<str>::hash(self, value, state)
    }
}

impl EqualityComparer<&str> for CaseInsensitive {
    fn equals(&self, a: &&str, b: &&str) -> bool {
        EqualityComparer::<str>::equals(self, a, b)
    }

    fn hash<H: Hasher>(&self, value: &&str, state: &mut H) {
        EqualityComparer::<str>::hash(self, value, state)
    }
}
