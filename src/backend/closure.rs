//! Dependency closure: every trait that must be mocked for a set of roots.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chanmock::backend::closure;
//!
//! let roots = source.exported_interfaces();
//! let closure = closure::resolve(&roots, &source);
//! ```

use std::collections::HashSet;

use crate::decl::InterfaceDecl;
use crate::frontend::DeclarationSource;

/// Deduplicated declarations in first-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyClosure {
    decls: Vec<InterfaceDecl>,
}

impl DependencyClosure {
    /// Build a closure from declarations that are already complete, dropping repeated names.
    pub fn from_decls(decls: impl IntoIterator<Item = InterfaceDecl>) -> Self {
        let mut seen = HashSet::new();
        let decls = decls.into_iter().filter(|d| seen.insert(d.name.clone())).collect();
        Self { decls }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterfaceDecl> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.decls.iter().any(|d| d.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceDecl> {
        self.decls.iter().find(|d| d.name == name)
    }

    /// Supertraits of `decl` found in the closure, transitively, depth-first in declared order.
    ///
    /// Each trait appears once even when reachable along several paths.
    pub fn supertraits_of<'a>(&'a self, decl: &'a InterfaceDecl) -> Vec<&'a InterfaceDecl> {
        let mut seen: HashSet<&str> = HashSet::from([decl.name.as_str()]);
        let mut stack: Vec<&str> = decl.supertraits.iter().rev().map(String::as_str).collect();
        let mut out = Vec::new();
        while let Some(name) = stack.pop() {
            if !seen.insert(name) {
                continue;
            }
            let Some(sup) = self.get(name) else { continue };
            stack.extend(sup.supertraits.iter().rev().map(String::as_str));
            out.push(sup);
        }
        out
    }

    /// Names in closure order.
    pub fn names(&self) -> Vec<&str> {
        self.decls.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn into_decls(self) -> Vec<InterfaceDecl> {
        self.decls
    }
}

impl<'a> IntoIterator for &'a DependencyClosure {
    type Item = &'a InterfaceDecl;
    type IntoIter = std::slice::Iter<'a, InterfaceDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.decls.iter()
    }
}

/// Resolve the closure of `roots`.
///
/// Each root is appended in input order, followed depth-first by everything it references, before the next root is
/// visited. A declaration already in the closure is never queried or appended again, so cycles terminate and
/// `lookup` is asked about each declaration at most once.
#[tracing::instrument(skip_all, fields(root_count = roots.len()))]
pub fn resolve(roots: &[InterfaceDecl], lookup: &dyn DeclarationSource) -> DependencyClosure {
    let mut processed: HashSet<String> = HashSet::new();
    let mut decls = Vec::new();

    for root in roots {
        let mut to_process = vec![root.clone()];
        while let Some(decl) = to_process.pop() {
            if !processed.insert(decl.name.clone()) {
                continue;
            }
            tracing::debug!(interface = %decl.name, "adding interface to closure");

            // Push in reverse so the first dependency is visited first.
            let deps = lookup.dependencies(&decl);
            for dep in deps.into_iter().rev() {
                if !processed.contains(&dep.name) {
                    to_process.push(dep);
                }
            }
            decls.push(decl);
        }
    }

    DependencyClosure { decls }
}
