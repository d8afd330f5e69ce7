//! Property-based tests for equality and hashing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use tristate_core::{Optional, OptionalCollection};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn any_optional() -> impl Strategy<Value = Optional<i16>> {
    prop_oneof![
        Just(Optional::UNDEFINED),
        Just(Optional::NULL),
        any::<i16>().prop_map(Optional::new),
    ]
}

fn any_collection() -> impl Strategy<Value = OptionalCollection<u8>> {
    prop_oneof![
        Just(OptionalCollection::UNDEFINED),
        Just(OptionalCollection::NULL),
        proptest::collection::vec(any::<u8>(), 0..4).prop_map(OptionalCollection::new),
    ]
}

proptest! {
    #[test]
    fn equality_is_symmetric(a in any_optional(), b in any_optional()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equal_values_hash_equal(a in any_optional(), b in any_optional()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn equality_matches_state_and_payload(a in any_optional(), b in any_optional()) {
        let expected = a.state() == b.state() && a.has_value() == b.has_value();
        prop_assert_eq!(a == b, expected);
    }

    #[test]
    fn collection_clone_is_equal(a in any_collection()) {
        let b = a.clone();
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert!(a == b);
    }

    #[test]
    fn json_round_trip_keeps_set_values(a in any_optional()) {
        prop_assume!(!a.is_undefined());
        let json = serde_json::to_string(&a).unwrap();
        let back: Optional<i16> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, a);
    }
}
