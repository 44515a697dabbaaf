//! Type emission for generated mocks.
//!
//! Signature types are emitted as declared. Channel fields are stored inside a struct without lifetime parameters,
//! so references reachable from a field type are emitted with `'static`.

use proc_macro2::{Span, TokenStream};
use quote::quote;

use super::super::method::{Carry, SyncField};
use super::super::naming::path_ident;
use super::MockEmitter;
use crate::decl::{MapKind, SeqKind, TypeExpr};

/// How references are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifetimes {
    Elided,
    Static,
}

impl MockEmitter<'_> {
    /// Emit a type as it appears in a method signature.
    pub(super) fn emit_type(&self, ty: &TypeExpr) -> TokenStream {
        type_tokens(ty, Lifetimes::Elided)
    }

    /// Emit the type carried by a channel field.
    pub(super) fn emit_field_type(&self, field: &SyncField) -> TokenStream {
        match (field.carry, &field.ty) {
            (Carry::Owned, TypeExpr::Reference { inner, .. }) => {
                let inner = unambiguous(inner, Lifetimes::Static);
                quote! { <#inner as ::std::borrow::ToOwned>::Owned }
            }
            (_, ty) => type_tokens(ty, Lifetimes::Static),
        }
    }

    /// Emit a type used as `<T as Trait>`.
    pub(super) fn emit_qualified_self(&self, ty: &TypeExpr) -> TokenStream {
        unambiguous(ty, Lifetimes::Elided)
    }

    /// Emit `a::b::C` from path segments.
    pub(super) fn emit_path(&self, segments: &[String]) -> TokenStream {
        path_tokens(segments.iter().map(String::as_str))
    }
}

fn path_tokens<'s>(segments: impl Iterator<Item = &'s str>) -> TokenStream {
    let idents: Vec<_> = segments.map(path_ident).collect();
    quote! { #(#idents)::* }
}

/// Emit a type in a position where a bare `+` would be ambiguous (`&dyn A + B`, `fn() -> dyn A + B`).
fn unambiguous(ty: &TypeExpr, lifetimes: Lifetimes) -> TokenStream {
    let tokens = type_tokens(ty, lifetimes);
    match ty {
        TypeExpr::TraitObject { bounds, lifetime }
            if bounds.len() > 1 || lifetime.is_some() || lifetimes == Lifetimes::Static =>
        {
            quote! { (#tokens) }
        }
        _ => tokens,
    }
}

fn type_tokens(ty: &TypeExpr, lifetimes: Lifetimes) -> TokenStream {
    let recurse = |t: &TypeExpr| type_tokens(t, lifetimes);
    match ty {
        TypeExpr::Named(name) => path_tokens(std::iter::once(name.as_str())),
        TypeExpr::Path(segments) => path_tokens(segments.iter().map(String::as_str)),
        TypeExpr::Function { params, ret } => {
            let ps: Vec<_> = params.iter().map(recurse).collect();
            match ret {
                Some(ret) => {
                    let r = unambiguous(ret, lifetimes);
                    quote! { fn(#(#ps),*) -> #r }
                }
                None => quote! { fn(#(#ps),*) },
            }
        }
        TypeExpr::Sequence { kind, elem } => {
            let e = recurse(elem);
            match kind {
                SeqKind::Vec => quote! { Vec<#e> },
                SeqKind::VecDeque => quote! { ::std::collections::VecDeque<#e> },
                SeqKind::Slice => quote! { [#e] },
                SeqKind::Array(len) => {
                    let len = proc_macro2::Literal::usize_unsuffixed(*len);
                    quote! { [#e; #len] }
                }
            }
        }
        TypeExpr::Map { kind, key, value } => {
            let k = recurse(key);
            let v = recurse(value);
            match kind {
                MapKind::HashMap => quote! { ::std::collections::HashMap<#k, #v> },
                MapKind::BTreeMap => quote! { ::std::collections::BTreeMap<#k, #v> },
            }
        }
        TypeExpr::Reference { mutable, inner } => {
            let i = unambiguous(inner, lifetimes);
            let lt = match lifetimes {
                Lifetimes::Elided => quote! {},
                Lifetimes::Static => quote! { 'static },
            };
            if *mutable {
                quote! { &#lt mut #i }
            } else {
                quote! { &#lt #i }
            }
        }
        TypeExpr::Tuple(items) => {
            let ts: Vec<_> = items.iter().map(recurse).collect();
            if ts.len() == 1 {
                quote! { (#(#ts),*,) }
            } else {
                quote! { (#(#ts),*) }
            }
        }
        TypeExpr::Generic { name, args } => {
            let n = path_tokens(name.split("::"));
            let ts: Vec<_> = args.iter().map(recurse).collect();
            quote! { #n<#(#ts),*> }
        }
        TypeExpr::TraitObject { bounds, lifetime } => {
            let bs: Vec<_> = bounds.iter().map(recurse).collect();
            let lt = match (lifetime, lifetimes) {
                (Some(lt), _) => {
                    let lt = syn::Lifetime::new(lt, Span::call_site());
                    quote! { + #lt }
                }
                (None, Lifetimes::Static) => quote! { + 'static },
                (None, Lifetimes::Elided) => quote! {},
            };
            quote! { dyn #(#bs)+* #lt }
        }
        TypeExpr::Opaque(ty) => quote! { #ty },
    }
}
