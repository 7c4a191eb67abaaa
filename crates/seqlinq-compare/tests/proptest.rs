//! Property-based tests for the comparers using proptest.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::BuildHasherDefault;

use proptest::prelude::*;
use seqlinq_compare::{
    hash_one, CaseInsensitive, Comparer, DefaultComparer, Directed, EqualityComparer,
    FloatComparer, FloatEquality, KeyComparer, ThenComparer,
};

type Build = BuildHasherDefault<DefaultHasher>;

fn float_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(f64::NAN),
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    /// Reversing a comparer swaps every answer.
    #[test]
    fn directed_desc_reverses(a in any::<i64>(), b in any::<i64>()) {
        let asc = DefaultComparer.compare(&a, &b);
        let desc = Directed::desc(DefaultComparer).compare(&a, &b);
        prop_assert_eq!(desc, asc.reverse());
    }

    /// Chained comparers order like tuples.
    #[test]
    fn then_comparer_is_lexicographic(
        a in (any::<u8>(), any::<u8>()),
        b in (any::<u8>(), any::<u8>()),
    ) {
        let chain = ThenComparer::new(
            KeyComparer::new(|p: &(u8, u8)| p.0),
            KeyComparer::new(|p: &(u8, u8)| p.1),
        );
        prop_assert_eq!(chain.compare(&a, &b), a.cmp(&b));
    }

    /// The float comparer is a total order: antisymmetric and consistent
    /// with float equality.
    #[test]
    fn float_comparer_is_total(a in float_strategy(), b in float_strategy()) {
        let ab = FloatComparer.compare(&a, &b);
        let ba = FloatComparer.compare(&b, &a);
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(ab == Ordering::Equal, FloatEquality.equals(&a, &b));
    }

    /// Equal floats hash alike.
    #[test]
    fn float_equality_hash_is_consistent(a in float_strategy(), b in float_strategy()) {
        if FloatEquality.equals(&a, &b) {
            prop_assert_eq!(
                hash_one(&Build::default(), &FloatEquality, &a),
                hash_one(&Build::default(), &FloatEquality, &b)
            );
        }
    }

    /// Case folding: a string equals its upper- and lowercase forms, and
    /// the ordering agrees with equality.
    #[test]
    fn case_insensitive_is_consistent(s in "[a-zA-Z]{0,12}", t in "[a-zA-Z]{0,12}") {
        let upper = s.to_uppercase();
        prop_assert!(EqualityComparer::<str>::equals(&CaseInsensitive, &s, &upper));
        prop_assert_eq!(
            hash_one(&Build::default(), &CaseInsensitive, s.as_str()),
            hash_one(&Build::default(), &CaseInsensitive, upper.as_str())
        );

        let ordering = Comparer::<str>::compare(&CaseInsensitive, &s, &t);
        prop_assert_eq!(
            ordering == Ordering::Equal,
            EqualityComparer::<str>::equals(&CaseInsensitive, &s, &t)
        );
        prop_assert_eq!(ordering, s.to_lowercase().cmp(&t.to_lowercase()));
    }
}
