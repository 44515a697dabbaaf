//! The return dispatcher.

use crate::errors::DispatchError;
use crate::sink::{ReturnSink, SinkShape, Slot};
use crate::value::Value;

/// Deliver `values` into `sink`, matching them positionally against its members.
///
/// A single primitive takes exactly one value. An aggregate of N members takes exactly N values; the i-th value
/// goes to the i-th declared member regardless of member names. Arity and types are validated before anything is
/// sent. Sends then happen in member order and each one blocks until its channel accepts the value.
pub fn deliver<S: ReturnSink + ?Sized>(sink: &S, values: Vec<Value>) -> Result<(), DispatchError> {
    let slots: Vec<&dyn Slot> = match sink.shape() {
        SinkShape::Single(slot) => vec![slot],
        SinkShape::Aggregate(members) if !members.is_empty() => members,
        SinkShape::Aggregate(_) | SinkShape::Unsupported => {
            return Err(DispatchError::UnsupportedSinkType {
                type_name: sink.sink_type(),
            });
        }
    };

    if slots.len() != values.len() {
        return Err(DispatchError::ArityMismatch {
            expected: slots.len(),
            given: values.len(),
        });
    }

    for (position, (slot, value)) in slots.iter().zip(&values).enumerate() {
        if !slot.admits(value) {
            return Err(mismatch(position, *slot, value));
        }
    }

    tracing::trace!(sink = sink.sink_type(), count = values.len(), "delivering stubbed values");
    for (position, (slot, value)) in slots.into_iter().zip(values).enumerate() {
        slot.accept(value).map_err(|rejected| mismatch(position, slot, &rejected))?;
    }
    Ok(())
}

fn mismatch(position: usize, slot: &dyn Slot, value: &Value) -> DispatchError {
    if value.is_nil() {
        DispatchError::NilNotAccepted {
            position,
            expected: slot.carried_type(),
        }
    } else {
        DispatchError::TypeMismatch {
            position,
            expected: slot.carried_type(),
            given: value.type_name(),
        }
    }
}
