//! Qualify locally declared type names with an alias.
//!
//! Mocks are usually emitted outside the module that declares the mocked traits, so every type that originates
//! there must be referenced through an alias (`Record` becomes `store::Record`).
//!
//! A single-segment name is considered local when it starts with an upper-case letter and is not one of Rust's
//! prelude or standard collection names. Lower-case names (`u32`, `str`, `bool`) are primitives. Qualified paths
//! and opaque shapes are left alone. Composite shapes are rebuilt with rewritten constituents.

use crate::decl::{InterfaceDecl, MethodSig, NamedType, TypeExpr};

/// Upper-case names that resolve without qualification in any Rust module.
const BUILTIN_TYPE_NAMES: &[&str] = &[
    "AsMut",
    "AsRef",
    "BTreeMap",
    "BTreeSet",
    "Box",
    "Clone",
    "Copy",
    "Default",
    "DoubleEndedIterator",
    "Drop",
    "Eq",
    "ExactSizeIterator",
    "Extend",
    "Fn",
    "FnMut",
    "FnOnce",
    "From",
    "HashMap",
    "HashSet",
    "Into",
    "IntoIterator",
    "Iterator",
    "Option",
    "Ord",
    "PartialEq",
    "PartialOrd",
    "Result",
    "Self",
    "Send",
    "Sized",
    "String",
    "Sync",
    "ToOwned",
    "ToString",
    "Unpin",
    "Vec",
    "VecDeque",
];

/// Whether a single-segment type name should be qualified with the alias.
pub fn is_local_name(name: &str) -> bool {
    let starts_upper = name.chars().next().is_some_and(char::is_uppercase);
    starts_upper && !name.contains("::") && !BUILTIN_TYPE_NAMES.contains(&name)
}

/// Rewrite a type expression so local names are qualified with `alias` (which may itself be a `::` path).
pub fn rewrite_type(ty: &TypeExpr, alias: &str) -> TypeExpr {
    match ty {
        TypeExpr::Named(name) => qualify(name, alias),
        TypeExpr::Function { params, ret } => TypeExpr::Function {
            params: params.iter().map(|p| rewrite_type(p, alias)).collect(),
            ret: ret.as_ref().map(|r| Box::new(rewrite_type(r, alias))),
        },
        TypeExpr::Sequence { kind, elem } => TypeExpr::Sequence {
            kind: *kind,
            elem: Box::new(rewrite_type(elem, alias)),
        },
        TypeExpr::Map { kind, key, value } => TypeExpr::Map {
            kind: *kind,
            key: Box::new(rewrite_type(key, alias)),
            value: Box::new(rewrite_type(value, alias)),
        },
        TypeExpr::Reference { mutable, inner } => TypeExpr::Reference {
            mutable: *mutable,
            inner: Box::new(rewrite_type(inner, alias)),
        },
        TypeExpr::Tuple(items) => TypeExpr::Tuple(items.iter().map(|t| rewrite_type(t, alias)).collect()),
        TypeExpr::Generic { name, args } => {
            let args = args.iter().map(|a| rewrite_type(a, alias)).collect();
            // `Page<T>` declared locally: the arguments stay on the last segment.
            let name = if is_local_name(name) {
                qualified_segments(name, alias).join("::")
            } else {
                name.clone()
            };
            TypeExpr::Generic { name, args }
        }
        TypeExpr::TraitObject { bounds, lifetime } => TypeExpr::TraitObject {
            bounds: bounds.iter().map(|b| rewrite_type(b, alias)).collect(),
            lifetime: lifetime.clone(),
        },
        TypeExpr::Path(_) | TypeExpr::Opaque(_) => ty.clone(),
    }
}

/// Rewrite every parameter and result type of a method.
pub fn rewrite_method(method: &MethodSig, alias: &str) -> MethodSig {
    let rewrite_all = |items: &[NamedType]| -> Vec<NamedType> {
        items
            .iter()
            .map(|item| NamedType {
                name: item.name.clone(),
                ty: rewrite_type(&item.ty, alias),
            })
            .collect()
    };
    MethodSig {
        name: method.name.clone(),
        receiver: method.receiver,
        params: rewrite_all(&method.params),
        results: rewrite_all(&method.results),
    }
}

/// Rewrite every method of an interface. The interface name itself is left as declared.
pub fn rewrite_interface(decl: &InterfaceDecl, alias: &str) -> InterfaceDecl {
    InterfaceDecl {
        name: decl.name.clone(),
        supertraits: decl.supertraits.clone(),
        methods: decl.methods.iter().map(|m| rewrite_method(m, alias)).collect(),
    }
}

/// Path segments of the alias followed by `name`.
pub fn qualified_segments(name: &str, alias: &str) -> Vec<String> {
    let mut segments = alias_segments(alias);
    segments.push(name.to_string());
    segments
}

fn qualify(name: &str, alias: &str) -> TypeExpr {
    if is_local_name(name) {
        TypeExpr::Path(qualified_segments(name, alias))
    } else {
        TypeExpr::Named(name.to_string())
    }
}

fn alias_segments(alias: &str) -> Vec<String> {
    alias
        .split("::")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
