//! JSON rendering of validation failures.

#![cfg(feature = "serde")]

use insta::assert_json_snapshot;
use tristate_core::OptionalCollection;
use tristate_validator::prelude::*;

#[test]
fn count_failure_as_json() {
    let rules = RuleSet::new().field(
        "tags",
        |tags: &OptionalCollection<u8>| tags,
        count::<u8>(1, Some(2)).unwrap().on_value(),
    );

    let errors = rules
        .validate(&OptionalCollection::new(vec![1, 2, 3]))
        .unwrap_err();

    assert_json_snapshot!(errors.errors()[0].to_json_value(), @r#"
    {
      "code": "count",
      "field": "tags",
      "message": "must be between 1 and 2 items, found 3",
      "nested": [],
      "params": {
        "max_count": "2",
        "min_count": "1",
        "total_count": "3"
      }
    }
    "#);
}
