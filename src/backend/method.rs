//! Turn one method signature into synchronization fields and a call protocol.
//!
//! Every generated method body follows the same fixed protocol:
//!
//! 1. send `true` on the call-signal field,
//! 2. send each argument on its input field, in declared order,
//! 3. then either receive each result from its output field (in declared order), wait for the gate field, or
//!    return immediately.
//!
//! Field names produced here are relative to the method (`called`, `key`, `ret0`, ...); the mock synthesizer
//! groups them per method.

use std::collections::HashSet;

use crate::decl::{MethodSig, NamedType, TypeExpr};

/// Name bound to the mock instance inside generated method bodies.
pub const RECEIVER_NAME: &str = "self";
/// Appended to a generated name that collides with [`RECEIVER_NAME`] or a declared name.
const COLLISION_SUFFIX: &str = "_";

pub const CALLED_FIELD: &str = "called";
pub const GATE_FIELD: &str = "block_return";

fn input_name(index: usize) -> String {
    format!("arg{}", index)
}

fn output_name(index: usize) -> String {
    format!("ret{}", index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fires on every call.
    CallSignal,
    /// Carries one argument out of the call.
    Input,
    /// Carries one stubbed result into the call.
    Output,
    /// Releases a result-less call in blocking-return mode.
    Gate,
}

/// How a field's channel type relates to the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carry {
    /// The declared type as-is.
    Value,
    /// A borrowed parameter `&T`, carried as `<T as ToOwned>::Owned`.
    Owned,
    /// A borrowed result `&T`, carried as `&'static T`.
    Static,
    /// An `Option<_>` result; the channel accepts nil.
    Nullable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncField {
    pub name: String,
    pub kind: FieldKind,
    /// Declared type (`bool` for call-signal and gate fields).
    pub ty: TypeExpr,
    pub carry: Carry,
}

/// A parameter of the generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthParam {
    /// Identifier used in the generated signature and body.
    pub binding: String,
    /// Name of the input field carrying this argument.
    pub field: String,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolStep {
    Signal { field: String },
    /// Send `binding` on `field`; `owned_from` is the borrowed type when the argument must be converted first.
    SendInput {
        field: String,
        binding: String,
        owned_from: Option<TypeExpr>,
    },
    /// Receive each field in order and return the values.
    AwaitOutputs { fields: Vec<String> },
    /// Receive and discard one gate value.
    AwaitGate { field: String },
}

/// Fields, parameter bindings and protocol for one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSynthesis {
    pub fields: Vec<SyncField>,
    pub params: Vec<SynthParam>,
    pub protocol: Vec<ProtocolStep>,
}

impl MethodSynthesis {
    pub fn call_signal(&self) -> Option<&SyncField> {
        self.fields.iter().find(|f| f.kind == FieldKind::CallSignal)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &SyncField> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Input)
    }

    /// Output fields, or the gate field, in declared order.
    pub fn outputs(&self) -> impl Iterator<Item = &SyncField> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Output | FieldKind::Gate))
    }
}

/// Synthesize the fields and protocol for `method`.
pub fn synthesize(method: &MethodSig, blocking_return: bool) -> MethodSynthesis {
    let mut fields = vec![SyncField {
        name: CALLED_FIELD.to_string(),
        kind: FieldKind::CallSignal,
        ty: TypeExpr::named("bool"),
        carry: Carry::Value,
    }];
    let mut protocol = vec![ProtocolStep::Signal {
        field: CALLED_FIELD.to_string(),
    }];

    let params = synth_params(method);
    for param in &params {
        let (carry, owned_from) = match &param.ty {
            TypeExpr::Reference { inner, .. } => (Carry::Owned, Some((**inner).clone())),
            _ => (Carry::Value, None),
        };
        fields.push(SyncField {
            name: param.field.clone(),
            kind: FieldKind::Input,
            ty: param.ty.clone(),
            carry,
        });
        protocol.push(ProtocolStep::SendInput {
            field: param.field.clone(),
            binding: param.binding.clone(),
            owned_from,
        });
    }

    if !method.results.is_empty() {
        let names = result_names(method);
        for (result, name) in method.results.iter().zip(&names) {
            let carry = match &result.ty {
                TypeExpr::Reference { .. } => Carry::Static,
                ty if ty.is_option() => Carry::Nullable,
                _ => Carry::Value,
            };
            fields.push(SyncField {
                name: name.clone(),
                kind: FieldKind::Output,
                ty: result.ty.clone(),
                carry,
            });
        }
        protocol.push(ProtocolStep::AwaitOutputs { fields: names });
    } else if blocking_return {
        fields.push(SyncField {
            name: GATE_FIELD.to_string(),
            kind: FieldKind::Gate,
            ty: TypeExpr::named("bool"),
            carry: Carry::Value,
        });
        protocol.push(ProtocolStep::AwaitGate {
            field: GATE_FIELD.to_string(),
        });
    }

    MethodSynthesis {
        fields,
        params,
        protocol,
    }
}

/// Name every parameter.
///
/// Declared names are kept. Positional names (`arg{index}`) and the binding for a parameter named like the receiver
/// get [`COLLISION_SUFFIX`] appended until they clash with no other name in the method.
fn synth_params(method: &MethodSig) -> Vec<SynthParam> {
    let mut taken: HashSet<String> = method.params.iter().filter_map(declared_name).collect();
    method
        .params
        .iter()
        .enumerate()
        .map(|(idx, param)| {
            let field = declared_name(param).unwrap_or_else(|| fresh_name(input_name(idx), &mut taken));
            let binding = if field == RECEIVER_NAME {
                fresh_name(format!("{}{}", field, COLLISION_SUFFIX), &mut taken)
            } else {
                field.clone()
            };
            SynthParam {
                binding,
                field,
                ty: param.ty.clone(),
            }
        })
        .collect()
}

/// Name every result, keeping positional names (`ret{index}`) clear of declared ones.
fn result_names(method: &MethodSig) -> Vec<String> {
    let mut taken: HashSet<String> = method.results.iter().filter_map(declared_name).collect();
    method
        .results
        .iter()
        .enumerate()
        .map(|(idx, result)| declared_name(result).unwrap_or_else(|| fresh_name(output_name(idx), &mut taken)))
        .collect()
}

fn declared_name(item: &NamedType) -> Option<String> {
    item.name.clone().filter(|n| n != "_")
}

/// `base`, or `base` with [`COLLISION_SUFFIX`] repeated until it is not taken. The result is marked as taken.
fn fresh_name(base: String, taken: &mut HashSet<String>) -> String {
    let mut name = base;
    while taken.contains(&name) {
        name.push_str(COLLISION_SUFFIX);
    }
    taken.insert(name.clone());
    name
}
