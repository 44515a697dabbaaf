//! Names brought into scope by top-level `use` items.
//!
//! A type written as `Error` after `use std::error::Error;` is not declared locally, so it must not be qualified
//! with the mock alias. The map resolves such names to their full path. Imports that start with `crate`, `super`
//! or `self` stay local.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ImportMap {
    paths: HashMap<String, Vec<String>>,
}

impl ImportMap {
    pub fn from_items(items: &[syn::Item]) -> Self {
        let mut map = Self::default();
        for item in items {
            if let syn::Item::Use(item_use) = item {
                map.collect(&item_use.tree, Vec::new());
            }
        }
        map
    }

    /// Full path of an imported name.
    pub fn resolve(&self, name: &str) -> Option<&[String]> {
        self.paths.get(name).map(Vec::as_slice)
    }

    fn collect(&mut self, tree: &syn::UseTree, prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                let mut next = prefix;
                next.push(path.ident.to_string());
                self.collect(&path.tree, next);
            }
            syn::UseTree::Name(name) => {
                let ident = name.ident.to_string();
                if ident == "self" {
                    if let Some(last) = prefix.last().cloned() {
                        self.insert(last, prefix);
                    }
                } else {
                    let mut full = prefix;
                    full.push(ident.clone());
                    self.insert(ident, full);
                }
            }
            syn::UseTree::Rename(rename) => {
                let mut full = prefix;
                full.push(rename.ident.to_string());
                self.insert(rename.rename.to_string(), full);
            }
            syn::UseTree::Group(group) => {
                for tree in &group.items {
                    self.collect(tree, prefix.clone());
                }
            }
            syn::UseTree::Glob(_) => {}
        }
    }

    fn insert(&mut self, name: String, full: Vec<String>) {
        let is_local = full
            .first()
            .is_some_and(|root| matches!(root.as_str(), "crate" | "super" | "self"));
        if !is_local && full.len() > 1 {
            self.paths.insert(name, full);
        }
    }
}
