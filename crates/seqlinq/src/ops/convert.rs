//! Conversions into collections.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{Result, SeqError};
use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Collects the elements into a `Vec`.
    pub fn to_vec(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    /// Collects the elements into a `HashSet`, dropping duplicates.
    pub fn to_hash_set(self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.iter.collect()
    }

    /// Collects the elements into a map keyed by `key`.
    ///
    /// Fails with [`SeqError::DuplicateKey`] if two elements share a key.
    ///
    /// ```
    /// use seqlinq::{IntoSeq, SeqError};
    ///
    /// let by_id = [(1, "ada"), (2, "bob")].into_seq().to_dictionary(|p| p.0)?;
    /// assert_eq!(by_id[&2].1, "bob");
    ///
    /// let dup = [(1, "ada"), (1, "bob")].into_seq().to_dictionary(|p| p.0);
    /// assert!(matches!(dup, Err(SeqError::DuplicateKey)));
    /// # Ok::<(), SeqError>(())
    /// ```
    pub fn to_dictionary<K, F>(self, key: F) -> Result<HashMap<K, I::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.to_dictionary_element(key, |item| item)
    }

    /// Collects projected elements into a map keyed by `key`.
    pub fn to_dictionary_element<K, V, F, E>(
        self,
        mut key: F,
        mut element: E,
    ) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
        E: FnMut(I::Item) -> V,
    {
        let mut map = HashMap::with_capacity(self.iter.size_hint().0);
        for item in self.iter {
            match map.entry(key(&item)) {
                Entry::Occupied(_) => return Err(SeqError::DuplicateKey),
                Entry::Vacant(slot) => {
                    slot.insert(element(item));
                }
            }
        }
        Ok(map)
    }

    /// Calls `f` on every element.
    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(I::Item),
    {
        self.iter.for_each(f)
    }
}
