//! Collection cardinality rules.

use std::fmt;
use std::marker::PhantomData;

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::validators::bounds::Bounds;

/// Validates that a sequence's item count lies within [`Bounds`].
pub struct Count<T> {
    bounds: Bounds,
    _item: PhantomData<fn(&T)>,
}

impl<T> Count<T> {
    pub const fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            _item: PhantomData,
        }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl<T> Validate for Count<T> {
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), ValidationError> {
        if self.bounds.contains(input.len()) {
            Ok(())
        } else {
            Err(ValidationError::out_of_bounds(
                "count",
                "items",
                self.bounds.min(),
                self.bounds.max(),
                input.len(),
            ))
        }
    }
}

impl<T> Clone for Count<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Count<T> {}

impl<T> fmt::Debug for Count<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Count").field("bounds", &self.bounds).finish()
    }
}

/// Count within `[min, max]`; a bounded `max` must exceed `min`.
pub fn count<T>(min: usize, max: Option<usize>) -> Result<Count<T>, RuleError> {
    Bounds::count(min, max).map(Count::new)
}

/// Count bounds in integer form, `-1` meaning no maximum.
pub fn count_sentinel<T>(min: i64, max: i64) -> Result<Count<T>, RuleError> {
    Bounds::from_sentinel(min, max).map(Count::new)
}

#[must_use]
pub const fn min_count<T>(min: usize) -> Count<T> {
    Count::new(Bounds::at_least(min))
}

#[must_use]
pub const fn max_count<T>(max: usize) -> Count<T> {
    Count::new(Bounds::at_most(max))
}
