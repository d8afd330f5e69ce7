//! Describing Rust types as schemas.

use tristate_core::{Optional, OptionalCollection};

use crate::error::SchemaError;
use crate::schema::Schema;

/// A type with a known wire schema.
///
/// Tri-state containers describe themselves as their element type: an
/// undefined field is simply absent, so nothing about the container shows
/// up in the schema. Nullability comes from the field's annotations.
///
/// ```
/// use tristate_core::{Optional, OptionalCollection};
/// use tristate_schema::{DescribeSchema, Schema};
///
/// assert_eq!(Optional::<String>::describe()?, Schema::string());
/// assert_eq!(
///     OptionalCollection::<bool>::describe()?,
///     Schema::array(Schema::boolean())
/// );
/// assert!(Optional::<Optional<u8>>::describe().is_err());
/// # Ok::<(), tristate_schema::SchemaError>(())
/// ```
pub trait DescribeSchema {
    /// `true` for [`Optional`] and [`OptionalCollection`].
    const IS_TRISTATE: bool = false;

    /// Whether a record field of this type must be present.
    const REQUIRED: bool = true;

    fn describe() -> Result<Schema, SchemaError>;
}

macro_rules! describe_primitive {
    ($($ty:ty => $schema:expr),+ $(,)?) => {
        $(
            impl DescribeSchema for $ty {
                fn describe() -> Result<Schema, SchemaError> {
                    Ok($schema)
                }
            }
        )+
    };
}

describe_primitive! {
    bool => Schema::boolean(),
    i8 => Schema::integer("int32"),
    i16 => Schema::integer("int32"),
    i32 => Schema::integer("int32"),
    i64 => Schema::integer("int64"),
    isize => Schema::integer("int64"),
    u8 => Schema::integer("int32"),
    u16 => Schema::integer("int32"),
    u32 => Schema::integer("int64"),
    u64 => Schema::integer("int64"),
    usize => Schema::integer("int64"),
    f32 => Schema::number("float"),
    f64 => Schema::number("double"),
    char => Schema::string(),
    str => Schema::string(),
    String => Schema::string(),
}

impl<T: DescribeSchema> DescribeSchema for Vec<T> {
    fn describe() -> Result<Schema, SchemaError> {
        Ok(Schema::array(T::describe()?))
    }
}

impl<T: DescribeSchema> DescribeSchema for [T] {
    fn describe() -> Result<Schema, SchemaError> {
        Ok(Schema::array(T::describe()?))
    }
}

impl<T: DescribeSchema> DescribeSchema for Option<T> {
    const REQUIRED: bool = false;

    fn describe() -> Result<Schema, SchemaError> {
        Ok(T::describe()?.nullable())
    }
}

impl<T: DescribeSchema + ?Sized> DescribeSchema for Box<T> {
    const IS_TRISTATE: bool = T::IS_TRISTATE;
    const REQUIRED: bool = T::REQUIRED;

    fn describe() -> Result<Schema, SchemaError> {
        T::describe()
    }
}

impl<T: DescribeSchema + ?Sized> DescribeSchema for &T {
    const IS_TRISTATE: bool = T::IS_TRISTATE;
    const REQUIRED: bool = T::REQUIRED;

    fn describe() -> Result<Schema, SchemaError> {
        T::describe()
    }
}

impl<T: DescribeSchema> DescribeSchema for Optional<T> {
    const IS_TRISTATE: bool = true;
    const REQUIRED: bool = false;

    fn describe() -> Result<Schema, SchemaError> {
        element::<T>("Optional")
    }
}

impl<T: DescribeSchema> DescribeSchema for OptionalCollection<T> {
    const IS_TRISTATE: bool = true;
    const REQUIRED: bool = false;

    fn describe() -> Result<Schema, SchemaError> {
        element::<T>("OptionalCollection").map(Schema::array)
    }
}

fn element<T: DescribeSchema>(container: &'static str) -> Result<Schema, SchemaError> {
    if T::IS_TRISTATE {
        return Err(SchemaError::NestedOptional {
            container,
            element: std::any::type_name::<T>(),
        });
    }
    T::describe()
}
