//! Rule composition.
//!
//! - [`And`], [`Or`], [`Not`]: logical composition over the same input
//! - [`OnValue`]: lifts a payload rule to a tri-state field
//! - [`Field`]: applies a rule to one field of a record

pub mod and;
pub mod field;
pub mod not;
pub mod on_value;
pub mod or;

pub use and::{And, and};
pub use field::{Field, field};
pub use not::{Not, not};
pub use on_value::{OnValue, on_value};
pub use or::{Or, or};
