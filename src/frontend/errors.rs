//! Errors raised while reading declarations.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    #[diagnostic(code(chanmock::source::read))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    #[diagnostic(
        code(chanmock::source::parse),
        help("chanmock reads trait declarations from a single, syntactically valid Rust source file")
    )]
    Parse { path: String, message: String },

    #[error("no trait named `{name}` in {path}")]
    #[diagnostic(code(chanmock::source::unknown_trait))]
    UnknownTrait { path: String, name: String },
}
