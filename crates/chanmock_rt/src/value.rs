//! Dynamically typed stubbed values.
//!
//! The dispatcher accepts values of arbitrary types and checks them against each sink member at runtime, so values
//! travel as type-erased boxes tagged with their type name (used in error messages).

use std::any::{Any, type_name};
use std::fmt;

/// A value to be delivered into a sink member.
pub enum Value {
    /// The absent value. Accepted only by members created with [`crate::Chan::nullable`].
    Nil,
    /// A concrete value of some `'static` type.
    Some {
        value: Box<dyn Any>,
        type_name: &'static str,
    },
}

impl Value {
    /// Wrap a value for delivery.
    ///
    /// Passing a `Value` (for example `nil()`) returns it unchanged instead of nesting it.
    pub fn of<T: Any>(value: T) -> Self {
        let boxed: Box<dyn Any> = Box::new(value);
        match boxed.downcast::<Value>() {
            Ok(inner) => *inner,
            Err(value) => Value::Some {
                value,
                type_name: type_name::<T>(),
            },
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Name of the carried type, or `"nil"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Some { type_name, .. } => type_name,
        }
    }

    /// Whether this is a concrete value of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Some { value, .. } => value.is::<T>(),
        }
    }

    /// Take the concrete value out as `T`, handing `self` back on mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        match self {
            Value::Nil => Err(Value::Nil),
            Value::Some { value, type_name } => match value.downcast::<T>() {
                Ok(v) => Ok(*v),
                Err(value) => Err(Value::Some { value, type_name }),
            },
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Value::Nil"),
            Value::Some { type_name, .. } => write!(f, "Value::Some(<{}>)", type_name),
        }
    }
}

/// The absent value.
pub fn nil() -> Value {
    Value::Nil
}
