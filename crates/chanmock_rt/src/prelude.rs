//! Prelude for tests that drive generated mocks.
//!
//! ```ignore
//! use chanmock_rt::prelude::*;
//! ```

pub use crate::chan::Chan;
pub use crate::dispatch::deliver;
pub use crate::errors::DispatchError;
pub use crate::sink::{ReturnSink, SinkShape, Slot};
pub use crate::value::{Value, nil};
pub use crate::{ret, return_sink};
