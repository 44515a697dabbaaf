//! In-memory declaration source.

use std::collections::{HashMap, HashSet};

use super::DeclarationSource;
use crate::decl::InterfaceDecl;

/// A fixed set of declarations with explicit dependency edges.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    decls: Vec<InterfaceDecl>,
    exported: Vec<String>,
    deps: HashMap<String, Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exported declaration referencing the named traits.
    pub fn with_interface(mut self, decl: InterfaceDecl, deps: &[&str]) -> Self {
        self.exported.push(decl.name.clone());
        self.insert(decl, deps);
        self
    }

    /// Add a declaration that is only reachable as a dependency.
    pub fn with_private_interface(mut self, decl: InterfaceDecl, deps: &[&str]) -> Self {
        self.insert(decl, deps);
        self
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceDecl> {
        self.decls.iter().find(|d| d.name == name)
    }

    fn insert(&mut self, decl: InterfaceDecl, deps: &[&str]) {
        self.deps
            .insert(decl.name.clone(), deps.iter().map(|d| d.to_string()).collect());
        self.decls.push(decl);
    }
}

impl DeclarationSource for StaticSource {
    fn exported_interfaces(&self) -> Vec<InterfaceDecl> {
        self.exported.iter().filter_map(|name| self.get(name)).cloned().collect()
    }

    /// Supertraits first, then the explicit edges, without repeats.
    fn dependencies(&self, decl: &InterfaceDecl) -> Vec<InterfaceDecl> {
        let explicit = self.deps.get(&decl.name).into_iter().flatten();
        let mut seen = HashSet::new();
        decl.supertraits
            .iter()
            .chain(explicit)
            .filter(|n| seen.insert(*n))
            .filter_map(|n| self.get(n))
            .cloned()
            .collect()
    }
}
