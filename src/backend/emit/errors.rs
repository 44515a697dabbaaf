//! Errors raised while emitting generated mocks.
//!
//! ## Notes
//!
//! - Synthesis itself cannot fail: every declaration yields a mock. The only expected failure is the destination
//!   refusing the write.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("failed to write generated mocks: {0}")]
    #[diagnostic(code(chanmock::emit::io))]
    Io(#[from] std::io::Error),

    /// Synthesized tokens did not form a valid Rust file. Indicates a generator bug.
    #[error("syn parse error: {0}")]
    #[diagnostic(
        code(chanmock::emit::syn_parse),
        help("this is a bug in chanmock; please report it with the trait declaration that triggered it")
    )]
    SynParse(String),
}
