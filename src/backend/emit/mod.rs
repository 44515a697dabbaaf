//! Emit formatted Rust source for a dependency closure.
//!
//! This module defines [`MockEmitter`] and the two entry points [`render`] and [`emit`]. Item and type emission live
//! in the focused submodules.
//!
//! ## Notes
//!
//! - Emission builds a token stream with `quote`, parses it as a `syn::File` and formats it via `prettyplease`.
//! - The output always starts with [`HEADER`]. Generated code refers to the runtime as `::chanmock_rt`.
//! - With an alias configured, every declaration is rewritten before synthesis and the implemented trait paths are
//!   qualified the same way.
//! - A mock implements its trait and every supertrait, one impl block each.
//!
//! ## See also
//!
//! - [`crate::backend::mock`]: what a mock consists of
//! - [`crate::backend::rewrite`]: alias qualification

mod errors;
mod items;
mod types;

pub use errors::GenerateError;

use std::io::Write;

use proc_macro2::TokenStream;
use quote::quote;

use super::closure::DependencyClosure;
use super::mock::{self, MockDefinition};
use super::naming::ident;
use super::rewrite::rewrite_interface;
use crate::config::GenerateConfig;

/// Provenance header prepended to every generated file.
pub const HEADER: &str = "// This file was generated by chanmock. Do not edit this code by hand\n\
// unless you *really* know what you're doing. Expect any changes made\n\
// manually to be overwritten the next time chanmock regenerates it.\n\n";

/// Emit mocks for one generation run.
pub struct MockEmitter<'a> {
    config: &'a GenerateConfig,
}

impl<'a> MockEmitter<'a> {
    pub fn new(config: &'a GenerateConfig) -> Self {
        Self { config }
    }

    /// Build the mock definitions for every closure member, in closure order.
    ///
    /// Supertraits are looked up in the closure, which always contains them.
    pub fn definitions(&self, closure: &DependencyClosure) -> Vec<MockDefinition> {
        closure
            .iter()
            .map(|decl| {
                let supertraits = closure.supertraits_of(decl);
                match &self.config.alias {
                    Some(alias) => {
                        let rewritten = rewrite_interface(decl, alias);
                        let rewritten_supers: Vec<_> =
                            supertraits.iter().map(|s| rewrite_interface(s, alias)).collect();
                        let supers: Vec<_> = rewritten_supers.iter().collect();
                        mock::build_with_supertraits(
                            &rewritten,
                            &supers,
                            self.config.chan_size,
                            self.config.blocking_return,
                        )
                        .with_alias(alias)
                    }
                    None => mock::build_with_supertraits(
                        decl,
                        &supertraits,
                        self.config.chan_size,
                        self.config.blocking_return,
                    ),
                }
            })
            .collect()
    }

    /// Emit the items of every mock, wrapped in the configured module.
    pub fn emit_tokens(&self, closure: &DependencyClosure) -> TokenStream {
        let items: Vec<_> = self.definitions(closure).iter().map(|def| self.emit_mock(def)).collect();
        match &self.config.module {
            Some(module) => {
                let module = ident(module);
                quote! {
                    pub mod #module {
                        #[allow(unused_imports)]
                        use super::*;

                        #(#items)*
                    }
                }
            }
            None => quote! { #(#items)* },
        }
    }

    /// Render the complete file: header plus formatted items.
    pub fn render(&self, closure: &DependencyClosure) -> Result<String, GenerateError> {
        let tokens = self.emit_tokens(closure);
        let syntax_tree: syn::File = syn::parse2(tokens).map_err(|e| GenerateError::SynParse(e.to_string()))?;
        let formatted = prettyplease::unparse(&syntax_tree);
        Ok(format!("{}{}", HEADER, formatted))
    }
}

/// Render the mocks for `closure` to a string.
#[tracing::instrument(skip_all, fields(mocks = closure.len()))]
pub fn render(closure: &DependencyClosure, config: &GenerateConfig) -> Result<String, GenerateError> {
    MockEmitter::new(config).render(closure)
}

/// Render the mocks for `closure` and write them to `writer`.
///
/// Nothing is written if rendering fails.
#[tracing::instrument(skip_all, fields(mocks = closure.len()))]
pub fn emit<W: Write + ?Sized>(
    closure: &DependencyClosure,
    config: &GenerateConfig,
    writer: &mut W,
) -> Result<(), GenerateError> {
    let source = MockEmitter::new(config).render(closure)?;
    writer.write_all(source.as_bytes())?;
    writer.flush()?;
    tracing::debug!(bytes = source.len(), "wrote generated mocks");
    Ok(())
}
