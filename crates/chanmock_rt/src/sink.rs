//! Capabilities the dispatcher uses to see a sink's shape.
//!
//! A sink is either a single sendable primitive ([`Slot`]) or an aggregate exposing an ordered list of them. The
//! dispatcher never inspects concrete types; it only asks a sink for its [`SinkShape`].

use std::any::{Any, type_name};

use crate::chan::Chan;
use crate::value::Value;

/// One sendable primitive.
pub trait Slot {
    /// Name of the type this primitive carries.
    fn carried_type(&self) -> &'static str;

    /// Whether `value` can be delivered here (type match, or nil on a nullable primitive).
    fn admits(&self, value: &Value) -> bool;

    /// Deliver `value`, blocking until the primitive accepts it. Inadmissible values are handed back.
    fn accept(&self, value: Value) -> Result<(), Value>;
}

impl<T: Any> Slot for Chan<T> {
    fn carried_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn admits(&self, value: &Value) -> bool {
        if value.is_nil() {
            self.accepts_nil()
        } else {
            value.is::<T>()
        }
    }

    fn accept(&self, value: Value) -> Result<(), Value> {
        if value.is_nil() {
            return match self.absent_value() {
                Some(absent) => {
                    self.send(absent);
                    Ok(())
                }
                None => Err(value),
            };
        }
        let concrete = value.downcast::<T>()?;
        self.send(concrete);
        Ok(())
    }
}

/// How a sink presents itself to the dispatcher.
pub enum SinkShape<'a> {
    Single(&'a dyn Slot),
    /// Members in declaration order.
    Aggregate(Vec<&'a dyn Slot>),
    Unsupported,
}

/// Destination for stubbed values.
///
/// Types that are neither a primitive nor an aggregate of primitives keep the default shape and are rejected by
/// the dispatcher with [`crate::DispatchError::UnsupportedSinkType`].
pub trait ReturnSink {
    fn shape(&self) -> SinkShape<'_> {
        SinkShape::Unsupported
    }

    /// Name used in error messages.
    fn sink_type(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl<T: Any> ReturnSink for Chan<T> {
    fn shape(&self) -> SinkShape<'_> {
        SinkShape::Single(self)
    }
}

impl<S: ReturnSink + ?Sized> ReturnSink for &S {
    fn shape(&self) -> SinkShape<'_> {
        (**self).shape()
    }

    fn sink_type(&self) -> &'static str {
        (**self).sink_type()
    }
}

impl ReturnSink for () {}
