//! Assemble a complete mock definition for one trait.
//!
//! A mock for trait `Store` is the type `MockStore`. For each method `get` it carries:
//!
//! - `get_called`: the call-signal channel.
//! - `get_input`: a `MockStoreGetInput` struct with one channel per parameter (omitted without parameters).
//! - `get_output`: a `MockStoreGetOutput` struct with one channel per result, or the gate channel (omitted when
//!   the method returns immediately).
//!
//! Methods of supertraits are part of the mock too, after the trait's own methods, and each supertrait gets its own
//! impl block. A supertrait method whose name is already taken is prefixed with the supertrait's name
//! (`closer_close_called`).

use std::collections::HashSet;

use super::method::{self, FieldKind, MethodSynthesis, SyncField};
use super::naming::{snake_case, upper_camel};
use super::rewrite::qualified_segments;
use crate::decl::{InterfaceDecl, MethodSig};

/// One method of a mock together with its synthesized protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockMethod {
    pub sig: MethodSig,
    pub synthesis: MethodSynthesis,
    /// The trait declaring this method.
    pub trait_name: String,
    /// Prefix of the method's fields and group types, unique within the mock.
    pub prefix: String,
}

impl MockMethod {
    /// Top-level field holding the call signal.
    pub fn called_field(&self) -> String {
        format!("{}_{}", self.prefix, method::CALLED_FIELD)
    }

    /// Top-level field holding the input channels, if the method has parameters.
    pub fn input_field(&self) -> Option<String> {
        self.synthesis.inputs().next().map(|_| format!("{}_input", self.prefix))
    }

    /// Top-level field holding the output (or gate) channels, if the method waits for any.
    pub fn output_field(&self) -> Option<String> {
        self.synthesis.outputs().next().map(|_| format!("{}_output", self.prefix))
    }

    pub fn inputs(&self) -> Vec<&SyncField> {
        self.synthesis.inputs().collect()
    }

    pub fn outputs(&self) -> Vec<&SyncField> {
        self.synthesis.outputs().collect()
    }
}

/// One `impl Trait for Mock` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitImpl {
    pub trait_name: String,
    /// Path of the implemented trait (the trait name, possibly qualified by an alias).
    pub path: Vec<String>,
}

/// A complete mock for one trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDefinition {
    /// Name of the mocked trait.
    pub interface: String,
    /// The mocked trait first, then its supertraits.
    pub impls: Vec<TraitImpl>,
    pub methods: Vec<MockMethod>,
    /// Capacity of every channel, fixed at construction.
    pub chan_size: usize,
}

impl MockDefinition {
    pub fn type_name(&self) -> String {
        format!("Mock{}", self.interface)
    }

    /// Path of the mocked trait itself.
    pub fn trait_path(&self) -> &[String] {
        self.impls.first().map(|i| i.path.as_slice()).unwrap_or_default()
    }

    /// Name of the struct grouping a method's input channels.
    pub fn input_type_name(&self, method: &MockMethod) -> String {
        format!("{}{}Input", self.type_name(), upper_camel(&method.prefix))
    }

    /// Name of the struct grouping a method's output channels.
    pub fn output_type_name(&self, method: &MockMethod) -> String {
        format!("{}{}Output", self.type_name(), upper_camel(&method.prefix))
    }

    /// Methods belonging to the impl block of `trait_name`, in order.
    pub fn methods_of<'a>(&'a self, trait_name: &'a str) -> impl Iterator<Item = &'a MockMethod> {
        self.methods.iter().filter(move |m| m.trait_name == trait_name)
    }

    /// Implement every trait under `alias` (e.g. `store::Store`).
    pub fn with_alias(mut self, alias: &str) -> Self {
        for imp in &mut self.impls {
            imp.path = qualified_segments(&imp.trait_name, alias);
        }
        self
    }

    /// Fully qualified names of every synchronization field (`get_called`, `get_input.key`, ...).
    pub fn field_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        for m in &self.methods {
            out.push(m.called_field());
            if let Some(group) = m.input_field() {
                out.extend(m.inputs().iter().map(|f| format!("{}.{}", group, f.name)));
            }
            if let Some(group) = m.output_field() {
                out.extend(m.outputs().iter().map(|f| format!("{}.{}", group, f.name)));
            }
        }
        out
    }

    /// Count of fields of one kind across all methods.
    pub fn count_fields(&self, kind: FieldKind) -> usize {
        self.methods
            .iter()
            .map(|m| m.synthesis.fields.iter().filter(|f| f.kind == kind).count())
            .sum()
    }
}

/// Build the mock for `decl`, synthesizing every method.
pub fn build(decl: &InterfaceDecl, chan_size: usize, blocking_return: bool) -> MockDefinition {
    build_with_supertraits(decl, &[], chan_size, blocking_return)
}

/// Build the mock for `decl` that also implements each of `supertraits`.
///
/// `supertraits` is the transitive set, each trait once; see
/// [`DependencyClosure::supertraits_of`](super::closure::DependencyClosure::supertraits_of).
pub fn build_with_supertraits(
    decl: &InterfaceDecl,
    supertraits: &[&InterfaceDecl],
    chan_size: usize,
    blocking_return: bool,
) -> MockDefinition {
    let mut taken = HashSet::new();
    let mut impls = Vec::with_capacity(supertraits.len() + 1);
    let mut methods = Vec::new();

    for owner in std::iter::once(decl).chain(supertraits.iter().copied()) {
        impls.push(TraitImpl {
            trait_name: owner.name.clone(),
            path: vec![owner.name.clone()],
        });
        for sig in &owner.methods {
            let name = sig.name.trim_start_matches("r#");
            let mut prefix = if taken.contains(name) {
                format!("{}_{}", snake_case(&owner.name), name)
            } else {
                name.to_string()
            };
            while taken.contains(&prefix) {
                prefix.push('_');
            }
            taken.insert(prefix.clone());
            methods.push(MockMethod {
                sig: sig.clone(),
                synthesis: method::synthesize(sig, blocking_return),
                trait_name: owner.name.clone(),
                prefix,
            });
        }
    }

    MockDefinition {
        interface: decl.name.clone(),
        impls,
        methods,
        chan_size,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::decl::TypeExpr;
    use std::collections::HashSet;

    fn store() -> InterfaceDecl {
        InterfaceDecl::new("Store")
            .with_method(
                MethodSig::new("get")
                    .param("key", TypeExpr::named("String"))
                    .result(TypeExpr::named("String"))
                    .result(TypeExpr::option(TypeExpr::named("Error"))),
            )
            .with_method(MethodSig::new("close"))
    }

    #[test]
    fn test_every_method_is_represented() {
        let def = build(&store(), 3, false);
        assert_eq!(def.type_name(), "MockStore");
        assert_eq!(def.methods.len(), 2);
        assert_eq!(def.chan_size, 3);
        assert_eq!(def.trait_path(), ["Store".to_string()]);
        assert_eq!(def.impls.len(), 1);
    }

    #[test]
    fn test_field_paths() {
        let def = build(&store(), 0, false);
        assert_eq!(
            def.field_paths(),
            vec!["get_called", "get_input.key", "get_output.ret0", "get_output.ret1", "close_called"]
        );
    }

    #[test]
    fn test_blocking_return_adds_gate_group() {
        let def = build(&store(), 0, true);
        let close = &def.methods[1];
        assert_eq!(close.output_field().as_deref(), Some("close_output"));
        assert_eq!(def.output_type_name(close), "MockStoreCloseOutput");
        assert_eq!(def.count_fields(FieldKind::Gate), 1);
    }

    #[test]
    fn test_field_names_are_unique() {
        let decl = InterfaceDecl::new("Odd")
            .with_method(MethodSig::new("get").param("x", TypeExpr::named("u8")))
            .with_method(MethodSig::new("get_input").result(TypeExpr::named("u8")))
            .with_method(MethodSig::new("get_called"));
        let paths = build(&decl, 1, true).field_paths();
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_supertrait_methods_are_included() {
        let closer = InterfaceDecl::new("Closer").with_method(MethodSig::new("close"));
        let store = store().with_supertrait("Closer");
        let def = build_with_supertraits(&store, &[&closer], 0, false).with_alias("crate::store");

        let impls: Vec<_> = def.impls.iter().map(|i| i.path.join("::")).collect();
        assert_eq!(impls, vec!["crate::store::Store", "crate::store::Closer"]);
        assert_eq!(def.methods_of("Store").count(), 2);

        // `close` is declared by both traits; the supertrait's copy is prefixed.
        let close = def.methods_of("Closer").next().unwrap();
        assert_eq!(close.prefix, "closer_close");
        assert_eq!(close.called_field(), "closer_close_called");
        assert!(def.field_paths().contains(&"close_called".to_string()));
    }

    #[test]
    fn test_supertrait_only_method_keeps_its_name() {
        let conn = InterfaceDecl::new("Conn")
            .with_method(MethodSig::new("ping").param("n", TypeExpr::named("u32")));
        let def = build_with_supertraits(&store().with_supertrait("Conn"), &[&conn], 0, false);
        let ping = def.methods_of("Conn").next().unwrap();
        assert_eq!(ping.prefix, "ping");
        assert_eq!(def.input_type_name(ping), "MockStorePingInput");
    }
}
