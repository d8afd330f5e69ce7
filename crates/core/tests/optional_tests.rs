//! Behavioural tests for `Optional` and `OptionalCollection`.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tristate_core::{Optional, OptionalCollection, OptionalState, TriState};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn default_is_undefined() {
    let value: Optional<i32> = Optional::default();
    assert_eq!(value.state(), OptionalState::Undefined);
    assert_eq!(value.has_value(), None);
}

#[rstest]
#[case(Some(42), OptionalState::HasValue)]
#[case(None, OptionalState::Null)]
fn from_option_collapses_none_to_null(#[case] input: Option<i32>, #[case] expected: OptionalState) {
    assert_eq!(Optional::from_option(input).state(), expected);
}

#[test]
fn null_reference_payload_collapses_to_null() {
    let name: Option<String> = None;
    let value = Optional::from_option(name);
    assert!(value.is_null());
    assert_eq!(value, Optional::NULL);
}

#[test]
fn empty_collection_has_value() {
    let tags: OptionalCollection<String> = OptionalCollection::new(Vec::new());
    assert_eq!(tags.state(), OptionalState::HasValue);
    assert_eq!(tags.has_value(), Some(&[][..]));
}

// ============================================================================
// EQUALITY
// ============================================================================

#[rstest]
#[case(Optional::new(1), Optional::new(1), true)]
#[case(Optional::new(1), Optional::new(2), false)]
#[case(Optional::new(1), Optional::NULL, false)]
#[case(Optional::NULL, Optional::UNDEFINED, false)]
#[case(Optional::NULL, Optional::NULL, true)]
#[case(Optional::UNDEFINED, Optional::UNDEFINED, true)]
fn equality_table(#[case] left: Optional<i32>, #[case] right: Optional<i32>, #[case] equal: bool) {
    assert_eq!(left == right, equal);
    assert_eq!(right == left, equal);
}

#[test]
fn custom_comparer_only_sees_payloads() {
    let mut calls = 0;
    let equal = Optional::<&str>::NULL.eq_with(&Optional::NULL, |_, _| {
        calls += 1;
        false
    });
    assert!(equal);
    assert_eq!(calls, 0);
}

#[test]
fn states_are_distinct_set_members() {
    let set: HashSet<Optional<i32>> = [
        Optional::UNDEFINED,
        Optional::NULL,
        Optional::new(0),
        Optional::new(0),
        Optional::NULL,
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn empty_collection_is_not_null() {
    let empty: OptionalCollection<i32> = Vec::new().into();
    assert_ne!(empty, OptionalCollection::NULL);
    assert_ne!(empty, OptionalCollection::UNDEFINED);
    assert_eq!(empty, OptionalCollection::new(vec![]));
}

// ============================================================================
// DISPLAY
// ============================================================================

#[rstest]
#[case(Optional::new(23), "23")]
#[case(Optional::NULL, "null")]
#[case(Optional::UNDEFINED, "undefined")]
fn display_table(#[case] value: Optional<i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[test]
fn display_delegates_to_payload() {
    assert_eq!(Optional::new("test").to_string(), "test");
}

// ============================================================================
// TRANSFORMS
// ============================================================================

#[test]
fn map_preserves_empty_states() {
    assert_eq!(Optional::<i32>::UNDEFINED.map(|n| n + 1), Optional::UNDEFINED);
    assert_eq!(Optional::<i32>::NULL.map(|n| n + 1), Optional::NULL);
    assert_eq!(Optional::new(1).map(|n| n + 1), Optional::new(2));
}

#[test]
fn map_nullable_collapses_none() {
    let parsed = Optional::new("x").map_nullable(|s| s.parse::<i32>().ok());
    assert!(parsed.is_null());

    let parsed = Optional::new("7").map_nullable(|s| s.parse::<i32>().ok());
    assert_eq!(parsed, Optional::new(7));
}

#[test]
fn collection_map_keeps_state() {
    let ids: OptionalCollection<i32> = OptionalCollection::NULL;
    assert!(ids.map(|n| n * 2).is_null());

    let ids: OptionalCollection<i32> = (1..=3).collect();
    assert_eq!(ids.map(|n| n * 2).as_slice(), [2, 4, 6]);
}

#[test]
fn as_set_distinguishes_all_three() {
    assert_eq!(Optional::<i32>::UNDEFINED.as_set(), None);
    assert_eq!(Optional::<i32>::NULL.as_set(), Some(None));
    assert_eq!(Optional::new(5).as_set(), Some(Some(&5)));
}

#[test]
fn value_or_default_for_empty_states() {
    assert_eq!(Optional::<u32>::NULL.value_or_default(), 0);
    assert_eq!(Optional::new(9_u32).value_or_default(), 9);
}

#[test]
fn into_option_flattens() {
    let value: Option<i32> = Optional::new(3).into();
    assert_eq!(value, Some(3));
    assert_eq!(Option::<i32>::from(Optional::NULL), None);
    assert_eq!(OptionalCollection::new(vec![1]).into_option(), Some(vec![1]));
}

#[test]
fn trait_objects_agree_with_inherent_methods() {
    fn describe<O: TriState>(field: &O) -> (bool, bool, bool) {
        (field.is_undefined(), field.is_null(), field.is_set())
    }

    assert_eq!(describe(&Optional::<i32>::UNDEFINED), (true, false, false));
    assert_eq!(describe(&Optional::<i32>::NULL), (false, true, true));
    assert_eq!(describe(&OptionalCollection::new(vec![1])), (false, false, true));
}
