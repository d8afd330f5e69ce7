//! Property-based tests for the tri-state rule wrapper.

use proptest::prelude::*;
use tristate_core::{Optional, OptionalCollection};
use tristate_validator::prelude::*;

proptest! {
    #[test]
    fn null_and_undefined_pass_any_count_bounds(min in 0usize..50, extra in 1usize..50) {
        let rule = count::<u8>(min, Some(min + extra)).unwrap().on_value::<OptionalCollection<u8>>();
        prop_assert!(rule.validate(&OptionalCollection::NULL).is_ok());
        prop_assert!(rule.validate(&OptionalCollection::UNDEFINED).is_ok());
    }

    #[test]
    fn lifted_rule_agrees_with_payload_rule(s in ".{0,12}") {
        let payload = length(2, Some(6)).unwrap();
        let lifted = payload.on_value::<Optional<String>>();
        prop_assert_eq!(
            lifted.validate(&Optional::new(s.clone())).is_ok(),
            payload.validate(&s).is_ok()
        );
    }

    #[test]
    fn sentinel_bounds_reject_non_increasing(min in 0i64..100, max in 0i64..100) {
        prop_assume!(max <= min);
        prop_assert!(count_sentinel::<u8>(min, max).is_err());
    }

    #[test]
    fn count_matches_contains(items in proptest::collection::vec(any::<u8>(), 0..8)) {
        let bounds = Bounds::count(2, Some(5)).unwrap();
        let rule = Count::<u8>::new(bounds);
        prop_assert_eq!(rule.validate(&items).is_ok(), bounds.contains(items.len()));
    }

    #[test]
    fn email_rule_is_idempotent(s in ".*") {
        let rule = email();
        prop_assert_eq!(rule.validate(&s).is_ok(), rule.validate(&s).is_ok());
    }
}
