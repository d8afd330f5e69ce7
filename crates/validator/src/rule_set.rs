//! Record-level rule sets.
//!
//! A [`RuleSet`] attaches rules to the fields of a record and evaluates all
//! of them, so independent failures are reported together.

use std::borrow::Cow;
use std::fmt;

use crate::combinators::Field;
use crate::foundation::{Validate, ValidationError, ValidationErrors};

type BoxedRule<M> = Box<dyn Validate<Input = M> + Send + Sync>;

/// Named field rules over a record type `M`.
///
/// # Examples
///
/// ```
/// use tristate_core::{Optional, OptionalCollection};
/// use tristate_validator::RuleSet;
/// use tristate_validator::foundation::ValidateExt;
/// use tristate_validator::validators::{count, email, not_empty};
///
/// struct UserPatch {
///     name: Optional<String>,
///     email: Optional<String>,
///     tags: OptionalCollection<String>,
/// }
///
/// let rules = RuleSet::new()
///     .field("name", |u: &UserPatch| &u.name, not_empty())
///     .field("email", |u: &UserPatch| &u.email, email().on_value())
///     .field("tags", |u: &UserPatch| &u.tags, count::<String>(1, Some(2))?.on_value());
///
/// let patch = UserPatch {
///     name: Optional::NULL,
///     email: Optional::new("nope".to_owned()),
///     tags: OptionalCollection::UNDEFINED,
/// };
///
/// let errors = rules.validate(&patch).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.errors()[0].field.as_deref(), Some("name"));
/// assert_eq!(errors.errors()[1].field.as_deref(), Some("email"));
/// # Ok::<(), tristate_validator::RuleError>(())
/// ```
pub struct RuleSet<M> {
    rules: Vec<(Cow<'static, str>, BoxedRule<M>)>,
}

impl<M: 'static> RuleSet<M> {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule for the field returned by `accessor`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<O, V, F>(mut self, name: impl Into<Cow<'static, str>>, accessor: F, rule: V) -> Self
    where
        O: ?Sized + 'static,
        V: Validate<Input = O> + Send + Sync + 'static,
        F: Fn(&M) -> &O + Send + Sync + 'static,
    {
        let name = name.into();
        self.rules
            .push((name.clone(), Box::new(Field::new(name, accessor, rule))));
        self
    }

    /// Adds a rule over the whole record, reported under `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, name: impl Into<Cow<'static, str>>, rule: V) -> Self
    where
        V: Validate<Input = M> + Send + Sync + 'static,
    {
        self.rules.push((name.into(), Box::new(rule)));
        self
    }

    /// Runs every rule and collects every failure.
    pub fn validate(&self, record: &M) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (name, rule) in &self.rules {
            if let Err(error) = rule.validate(record) {
                tracing::trace!(rule = %name, code = %error.code, "rule failed");
                let error = match error.field {
                    Some(_) => error,
                    None => error.with_field(name.clone()),
                };
                errors.add(error);
            }
        }

        errors.into_result(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_ref())
    }
}

impl<M: 'static> Default for RuleSet<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: 'static> Validate for RuleSet<M> {
    type Input = M;

    fn validate(&self, record: &M) -> Result<(), ValidationError> {
        Self::validate(self, record).map_err(|errors| errors.into_single_error("record is invalid"))
    }
}

impl<M> fmt::Debug for RuleSet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}
