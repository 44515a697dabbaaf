#![forbid(unsafe_code)]
//! chanmock: channel-synchronized mocks for Rust traits
//!
//! The generator reads trait declarations, resolves every trait they depend on and emits a `Mock{Trait}` struct
//! per trait. Each mock method announces the call on a channel, hands its arguments out on more channels and then
//! waits for stubbed results, which tests deliver with the `chanmock_rt` runtime.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chanmock::{GenerateConfig, generate};
//!
//! let source = "pub trait Store { fn get(&self, key: String) -> u32; }";
//! let mut out = Vec::new();
//! generate(source, &GenerateConfig::default(), &mut out)?;
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod backend;
pub mod cli;
pub mod config;
pub mod decl;
pub mod frontend;

use std::io::Write;

use miette::Diagnostic;
use thiserror::Error;

pub use backend::{DependencyClosure, GenerateError, MockEmitter};
pub use config::GenerateConfig;
pub use decl::{InterfaceDecl, MethodSig, TypeExpr};
pub use frontend::{DeclarationSource, RustSource, SourceError, StaticSource};

/// Failure of a whole generation run.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generate(#[from] GenerateError),
}

/// Generate mocks for every `pub` trait in `source` (and the traits they depend on) and write them to `writer`.
pub fn generate<W: Write + ?Sized>(source: &str, config: &GenerateConfig, writer: &mut W) -> Result<(), Error> {
    let source = RustSource::parse(source)?;
    let closure = backend::resolve(&source.exported_interfaces(), &source);
    backend::emit(&closure, config, writer)?;
    Ok(())
}
