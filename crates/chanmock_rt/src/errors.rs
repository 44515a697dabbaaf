//! Errors reported by the return dispatcher.

use thiserror::Error;

/// Error returned by [`crate::deliver`]. Nothing is sent when an error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The sink is neither a single primitive nor a non-empty aggregate of primitives.
    #[error("unsupported type {type_name}: expected a Chan or an aggregate of Chan fields")]
    UnsupportedSinkType { type_name: &'static str },

    #[error("expected {expected} {}, got {given}", arguments(.expected))]
    ArityMismatch { expected: usize, given: usize },

    #[error("argument {position}: expected a value of type {expected}, got {given}")]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        given: &'static str,
    },

    #[error("argument {position}: nil is not accepted by a Chan<{expected}> (use Chan::nullable)")]
    NilNotAccepted { position: usize, expected: &'static str },
}

fn arguments(count: &usize) -> &'static str {
    if *count == 1 { "argument" } else { "arguments" }
}
