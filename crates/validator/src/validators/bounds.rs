//! Closed `[min, max]` bounds shared by the length and count rules.

use crate::error::RuleError;

/// Sentinel for "no upper bound" in the integer form.
pub const UNBOUNDED: i64 = -1;

/// Inclusive bounds with an optional maximum.
///
/// # Examples
///
/// ```
/// use tristate_validator::validators::Bounds;
///
/// let bounds = Bounds::from_sentinel(1, -1)?;
/// assert!(bounds.contains(10_000));
/// assert!(!bounds.contains(0));
///
/// assert!(Bounds::from_sentinel(2, 1).is_err());
/// # Ok::<(), tristate_validator::RuleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: usize,
    max: Option<usize>,
}

impl Bounds {
    /// Count bounds: a bounded `max` must be strictly greater than `min`.
    pub fn count(min: usize, max: Option<usize>) -> Result<Self, RuleError> {
        match max {
            Some(max) if max <= min => Err(RuleError::MaxNotAboveMin {
                min: min as i64,
                max: max as i64,
            }),
            _ => Ok(Self { min, max }),
        }
    }

    /// Length bounds: `max == min` is allowed and means an exact length.
    pub fn length(min: usize, max: Option<usize>) -> Result<Self, RuleError> {
        match max {
            Some(max) if max < min => Err(RuleError::MaxBelowMin {
                min: min as i64,
                max: max as i64,
            }),
            _ => Ok(Self { min, max }),
        }
    }

    /// Count bounds in integer form, where `max == -1` means unbounded.
    pub fn from_sentinel(min: i64, max: i64) -> Result<Self, RuleError> {
        if min < 0 {
            return Err(RuleError::NegativeMin { min });
        }
        if max != UNBOUNDED && max <= min {
            return Err(RuleError::MaxNotAboveMin { min, max });
        }

        Ok(Self {
            min: min as usize,
            max: (max != UNBOUNDED).then_some(max as usize),
        })
    }

    /// Length bounds in integer form: `max == min` is allowed, `-1` means unbounded.
    pub fn length_sentinel(min: i64, max: i64) -> Result<Self, RuleError> {
        if min < 0 {
            return Err(RuleError::NegativeMin { min });
        }
        if max != UNBOUNDED && max < min {
            return Err(RuleError::MaxBelowMin { min, max });
        }

        Ok(Self {
            min: min as usize,
            max: (max != UNBOUNDED).then_some(max as usize),
        })
    }

    pub(crate) const fn exactly(n: usize) -> Self {
        Self { min: n, max: Some(n) }
    }

    pub(crate) const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub(crate) const fn at_most(max: usize) -> Self {
        Self { min: 0, max: Some(max) }
    }

    pub const fn min(&self) -> usize {
        self.min
    }

    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    /// The maximum in integer form.
    pub fn max_sentinel(&self) -> i64 {
        self.max.map_or(UNBOUNDED, |max| max as i64)
    }

    pub fn contains(&self, n: usize) -> bool {
        n >= self.min && self.max.is_none_or(|max| n <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, -1)]
    #[case(0, 1)]
    #[case(5, 6)]
    #[case(3, -1)]
    fn sentinel_accepts(#[case] min: i64, #[case] max: i64) {
        let bounds = Bounds::from_sentinel(min, max).unwrap();
        assert_eq!(bounds.max_sentinel(), max);
    }

    #[rstest]
    #[case(-1, 5, RuleError::NegativeMin { min: -1 })]
    #[case(2, 1, RuleError::MaxNotAboveMin { min: 2, max: 1 })]
    #[case(2, 2, RuleError::MaxNotAboveMin { min: 2, max: 2 })]
    #[case(0, -2, RuleError::MaxNotAboveMin { min: 0, max: -2 })]
    fn sentinel_rejects(#[case] min: i64, #[case] max: i64, #[case] expected: RuleError) {
        assert_eq!(Bounds::from_sentinel(min, max), Err(expected));
    }

    #[test]
    fn length_allows_equal_bounds_count_does_not() {
        assert!(Bounds::length(2, Some(2)).is_ok());
        assert!(Bounds::count(2, Some(2)).is_err());
        assert_eq!(
            Bounds::length(3, Some(2)),
            Err(RuleError::MaxBelowMin { min: 3, max: 2 })
        );
    }

    #[rstest]
    #[case(2, 2, Ok(Some(2)))]
    #[case(0, 0, Ok(Some(0)))]
    #[case(3, -1, Ok(None))]
    #[case(3, 2, Err(RuleError::MaxBelowMin { min: 3, max: 2 }))]
    #[case(0, -2, Err(RuleError::MaxBelowMin { min: 0, max: -2 }))]
    #[case(-1, 4, Err(RuleError::NegativeMin { min: -1 }))]
    fn length_sentinel_cases(
        #[case] min: i64,
        #[case] max: i64,
        #[case] expected: Result<Option<usize>, RuleError>,
    ) {
        assert_eq!(Bounds::length_sentinel(min, max).map(|b| b.max()), expected);
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = Bounds::count(1, Some(2)).unwrap();
        assert!(!bounds.contains(0));
        assert!(bounds.contains(1));
        assert!(bounds.contains(2));
        assert!(!bounds.contains(3));
    }
}
