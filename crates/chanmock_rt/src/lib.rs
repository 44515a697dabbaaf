//! Runtime support for chanmock-generated mocks.
//!
//! Generated mocks store every synchronization field as a [`Chan`]: a bounded hand-off channel whose capacity is
//! fixed when the mock is constructed. Test code observes calls by receiving on the `*_called` and `*_input`
//! fields and stubs results by delivering values into the `*_output` aggregates with [`deliver`] (or the [`ret!`]
//! macro).
//!
//! ## Notes
//!
//! - A capacity of zero is a rendezvous: every send waits for a receiver.
//! - [`deliver`] matches values to sink members by position, in member declaration order. There is no name-based
//!   matching.
//! - Nothing here spawns threads or owns a scheduler; all blocking happens on the caller's thread.

#![deny(clippy::unwrap_used)]

pub mod chan;
pub mod dispatch;
pub mod errors;
pub mod prelude;
pub mod sink;
pub mod value;

pub use chan::Chan;
pub use dispatch::deliver;
pub use errors::DispatchError;
pub use sink::{ReturnSink, SinkShape, Slot};
pub use value::{Value, nil};

/// Deliver stubbed values into a [`ReturnSink`], wrapping each argument with [`Value::of`].
///
/// `nil()` may be passed as an argument to deliver the absent value of a member created with [`Chan::nullable`].
/// Generated mocks create every `Option` result that way. A hand-built `Chan::<Option<U>>::new` rejects `nil()`
/// with [`DispatchError::NilNotAccepted`]; deliver `None::<U>` to it instead.
///
/// ```ignore
/// chanmock_rt::ret!(mock.get_output, "v".to_string(), chanmock_rt::nil())?;
/// ```
#[macro_export]
macro_rules! ret {
    ($sink:expr $(, $value:expr)* $(,)?) => {
        $crate::deliver(&$sink, ::std::vec![$($crate::Value::of($value)),*])
    };
}

/// Declare a struct of [`Chan`] fields and implement [`ReturnSink`] for it.
///
/// Members are matched positionally in the order the fields are declared.
///
/// ```ignore
/// chanmock_rt::return_sink! {
///     pub struct FooReturns {
///         pub foo: Chan<String>,
///         pub bar: Chan<bool>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! return_sink {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$fmeta])* $fvis $field: $fty),*
        }

        impl $crate::ReturnSink for $name {
            fn shape(&self) -> $crate::SinkShape<'_> {
                $crate::SinkShape::Aggregate(::std::vec![$(&self.$field as &dyn $crate::Slot),*])
            }
        }
    };
}
