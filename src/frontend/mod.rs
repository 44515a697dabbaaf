//! Declaration sources.
//!
//! The backend does not care where trait declarations come from. It asks a [`DeclarationSource`] for the roots to
//! mock and, per declaration, for the other local traits it references.
//!
//! - [`RustSource`]: reads `trait` items from Rust source with `syn`
//! - [`StaticSource`]: an in-memory set of declarations, for programmatic use and tests

mod errors;
mod imports;
mod memory;
mod rust_source;
mod types;

pub use errors::SourceError;
pub use memory::StaticSource;
pub use rust_source::RustSource;
pub use types::convert_type;

use crate::decl::InterfaceDecl;

/// Supplies trait declarations to the generator.
pub trait DeclarationSource {
    /// Exported declarations, in source order. These are the roots of a generation run.
    fn exported_interfaces(&self) -> Vec<InterfaceDecl>;

    /// Other locally declared traits that `decl` references directly.
    fn dependencies(&self, decl: &InterfaceDecl) -> Vec<InterfaceDecl>;
}
