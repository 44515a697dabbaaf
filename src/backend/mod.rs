//! Mock generation backend.
//!
//! The pipeline is:
//! 1. [`closure::resolve`] collects every trait reachable from the roots
//! 2. [`rewrite`] qualifies local type names when an alias is configured
//! 3. [`mock::build`] synthesizes fields and a call protocol per method (see [`method`])
//! 4. [`emit`] renders the definitions as formatted Rust source
//!
//! ## Module Organization
//!
//! - `closure.rs` - Dependency closure resolution
//! - `rewrite.rs` - Type reference rewriting
//! - `method.rs` - Per-method synchronization fields and protocol
//! - `mock.rs` - Whole-trait mock definitions
//! - `naming.rs` - Identifier helpers
//! - `emit/` - Token emission and formatting

#![deny(clippy::unwrap_used)]

pub mod closure;
pub mod emit;
pub mod method;
pub mod mock;
pub mod naming;
pub mod rewrite;

pub use closure::{DependencyClosure, resolve};
pub use emit::{GenerateError, HEADER, MockEmitter, emit, render};
pub use mock::MockDefinition;
