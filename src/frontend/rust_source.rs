//! Read trait declarations from Rust source.
//!
//! Only top-level `trait` items are considered. `pub` traits are the roots of a generation run; every other
//! trait in the file can still be pulled in as a dependency.
//!
//! ## Notes
//!
//! - Traits that cannot be mocked with a plain struct (generic traits or methods, associated types/consts, `async`
//!   or receiver-less methods) are skipped with a warning.
//! - A trait depends on the local traits it names as supertraits or as `dyn` bounds in method signatures.
//! - Supertraits must be local traits that can be mocked themselves; auto traits and `Debug` are always satisfied.
//!   A trait with any other supertrait is skipped.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use syn::ext::IdentExt;

use super::errors::SourceError;
use super::imports::ImportMap;
use super::types::{convert_type, referenced_traits};
use super::DeclarationSource;
use crate::decl::{InterfaceDecl, MethodSig, NamedType, Receiver, TypeExpr};

/// Declarations parsed from one Rust source file.
#[derive(Debug, Clone)]
pub struct RustSource {
    path: String,
    decls: Vec<InterfaceDecl>,
    exported: Vec<String>,
    deps: HashMap<String, Vec<String>>,
}

impl RustSource {
    /// Parse source text that has no file name.
    pub fn parse(source: &str) -> Result<Self, SourceError> {
        Self::parse_named("<input>", source)
    }

    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let display = path.display().to_string();
        let source = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: display.clone(),
            source,
        })?;
        Self::parse_named(&display, &source)
    }

    #[tracing::instrument(skip(source), fields(source_len = source.len()))]
    pub fn parse_named(path: &str, source: &str) -> Result<Self, SourceError> {
        let file = syn::parse_file(source).map_err(|e| SourceError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let imports = ImportMap::from_items(&file.items);

        let mut decls = Vec::new();
        let mut exported = Vec::new();
        let mut refs: HashMap<String, Vec<String>> = HashMap::new();
        for item in &file.items {
            let syn::Item::Trait(item_trait) = item else { continue };
            let name = item_trait.ident.unraw().to_string();
            match convert_trait(item_trait, &imports) {
                Ok((decl, referenced)) => {
                    if matches!(item_trait.vis, syn::Visibility::Public(_)) {
                        exported.push(name.clone());
                    }
                    refs.insert(name, referenced);
                    decls.push(decl);
                }
                Err(reason) => tracing::warn!(path, trait_name = %name, "skipping trait: {}", reason),
            }
        }

        // A mock must implement every supertrait, so a trait whose supertrait was skipped goes too.
        loop {
            let known: HashSet<String> = decls.iter().map(|d| d.name.clone()).collect();
            let before = decls.len();
            decls.retain(|d: &InterfaceDecl| match d.supertraits.iter().find(|s| !known.contains(*s)) {
                Some(missing) => {
                    tracing::warn!(
                        path,
                        trait_name = %d.name,
                        "skipping trait: supertrait `{}` cannot be mocked",
                        missing
                    );
                    false
                }
                None => true,
            });
            if decls.len() == before {
                break;
            }
        }
        let known: HashSet<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        exported.retain(|name| known.contains(name.as_str()));

        // Keep only references to traits that were converted, first appearance first.
        let deps = refs
            .into_iter()
            .filter(|(name, _)| known.contains(name.as_str()))
            .map(|(name, referenced)| {
                let mut seen = HashSet::new();
                let local = referenced
                    .into_iter()
                    .filter(|r| *r != name && known.contains(r.as_str()) && seen.insert(r.clone()))
                    .collect();
                (name, local)
            })
            .collect();

        Ok(Self {
            path: path.to_string(),
            decls,
            exported,
            deps,
        })
    }

    /// Restrict the roots to the named traits, in the given order.
    pub fn filtered<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self, SourceError> {
        let mut roots = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if self.get(name).is_none() {
                return Err(SourceError::UnknownTrait {
                    path: self.path.clone(),
                    name: name.to_string(),
                });
            }
            roots.push(name.to_string());
        }
        self.exported = roots;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceDecl> {
        self.decls.iter().find(|d| d.name == name)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl DeclarationSource for RustSource {
    fn exported_interfaces(&self) -> Vec<InterfaceDecl> {
        self.exported.iter().filter_map(|n| self.get(n)).cloned().collect()
    }

    fn dependencies(&self, decl: &InterfaceDecl) -> Vec<InterfaceDecl> {
        self.deps
            .get(&decl.name)
            .map(|names| names.iter().filter_map(|n| self.get(n)).cloned().collect())
            .unwrap_or_default()
    }
}

/// Convert a trait item, returning the declaration and the trait names it references.
fn convert_trait(item: &syn::ItemTrait, imports: &ImportMap) -> Result<(InterfaceDecl, Vec<String>), String> {
    if !item.generics.params.is_empty() {
        return Err("generic traits are not supported".to_string());
    }

    let mut decl = InterfaceDecl::new(item.ident.unraw().to_string());
    for bound in &item.supertraits {
        let syn::TypeParamBound::Trait(t) = bound else { continue };
        if matches!(t.modifier, syn::TraitBoundModifier::Maybe(_)) || is_marker(&t.path) {
            continue;
        }
        match t.path.get_ident() {
            Some(ident) => decl.supertraits.push(ident.unraw().to_string()),
            None => return Err(format!("supertrait `{}` cannot be mocked", path_string(&t.path))),
        }
    }
    let mut referenced = decl.supertraits.clone();

    for trait_item in &item.items {
        let syn::TraitItem::Fn(f) = trait_item else {
            return Err("associated types and consts are not supported".to_string());
        };
        let method = convert_method(&f.sig, imports)?;
        for ty in method.params.iter().chain(&method.results).map(|p| &p.ty) {
            referenced_traits(ty, &mut referenced);
        }
        decl.methods.push(method);
    }
    Ok((decl, referenced))
}

/// Supertraits a mock satisfies without an impl: auto traits, and `Debug` which every mock derives.
fn is_marker(path: &syn::Path) -> bool {
    const MARKERS: &[&str] = &["Send", "Sync", "Unpin", "Sized", "Debug"];
    path.segments
        .last()
        .is_some_and(|seg| seg.arguments.is_none() && MARKERS.contains(&seg.ident.to_string().as_str()))
}

fn path_string(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

fn convert_method(sig: &syn::Signature, imports: &ImportMap) -> Result<MethodSig, String> {
    let name = sig.ident.to_string();
    if !sig.generics.params.is_empty() {
        return Err(format!("method `{}` is generic", name));
    }
    if sig.asyncness.is_some() {
        return Err(format!("method `{}` is async", name));
    }
    let receiver = match sig.receiver() {
        Some(r) if r.colon_token.is_some() => return Err(format!("method `{}` has a typed receiver", name)),
        Some(r) => match (&r.reference, &r.mutability) {
            (Some(_), Some(_)) => Receiver::RefMut,
            (Some(_), None) => Receiver::Ref,
            (None, _) => Receiver::Owned,
        },
        None => return Err(format!("method `{}` has no receiver", name)),
    };

    let mut method = MethodSig::new(name).with_receiver(receiver);
    for input in &sig.inputs {
        let syn::FnArg::Typed(pat_type) = input else { continue };
        let param_name = match &*pat_type.pat {
            syn::Pat::Ident(pat) => Some(pat.ident.unraw().to_string()),
            _ => None,
        };
        let ty = convert_type(&pat_type.ty, imports);
        method.params.push(NamedType { name: param_name, ty });
    }

    if let syn::ReturnType::Type(_, ty) = &sig.output {
        match convert_type(ty, imports) {
            TypeExpr::Tuple(items) if items.len() != 1 => {
                method.results.extend(items.into_iter().map(NamedType::unnamed));
            }
            other => method.results.push(NamedType::unnamed(other)),
        }
    }
    Ok(method)
}
