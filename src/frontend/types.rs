//! Convert `syn` types into [`TypeExpr`].
//!
//! Shapes the model knows (`Vec`, maps, references, tuples, `fn` pointers, `dyn` objects, single-segment generics)
//! are converted structurally. Everything else becomes [`TypeExpr::Opaque`] and is emitted verbatim.

use super::imports::ImportMap;
use crate::decl::{MapKind, SeqKind, TypeExpr};

/// Convert a type, resolving imported names through `imports`.
pub fn convert_type(ty: &syn::Type, imports: &ImportMap) -> TypeExpr {
    match ty {
        syn::Type::Path(type_path) if type_path.qself.is_none() => {
            convert_path(&type_path.path, imports).unwrap_or_else(|| opaque(ty))
        }
        syn::Type::Reference(r) => TypeExpr::Reference {
            mutable: r.mutability.is_some(),
            inner: Box::new(convert_type(&r.elem, imports)),
        },
        syn::Type::Slice(s) => TypeExpr::Sequence {
            kind: SeqKind::Slice,
            elem: Box::new(convert_type(&s.elem, imports)),
        },
        syn::Type::Array(a) => match array_len(&a.len) {
            Some(len) => TypeExpr::Sequence {
                kind: SeqKind::Array(len),
                elem: Box::new(convert_type(&a.elem, imports)),
            },
            None => opaque(ty),
        },
        syn::Type::Tuple(t) => TypeExpr::Tuple(t.elems.iter().map(|e| convert_type(e, imports)).collect()),
        syn::Type::BareFn(f) if f.lifetimes.is_none() && f.abi.is_none() && f.variadic.is_none() => {
            TypeExpr::Function {
                params: f.inputs.iter().map(|arg| convert_type(&arg.ty, imports)).collect(),
                ret: match &f.output {
                    syn::ReturnType::Default => None,
                    syn::ReturnType::Type(_, ret) => Some(Box::new(convert_type(ret, imports))),
                },
            }
        }
        syn::Type::TraitObject(obj) if obj.dyn_token.is_some() => {
            convert_trait_object(&obj.bounds, imports).unwrap_or_else(|| opaque(ty))
        }
        syn::Type::Paren(p) => convert_type(&p.elem, imports),
        syn::Type::Group(g) => convert_type(&g.elem, imports),
        _ => opaque(ty),
    }
}

fn opaque(ty: &syn::Type) -> TypeExpr {
    TypeExpr::Opaque(Box::new(ty.clone()))
}

fn array_len(expr: &syn::Expr) -> Option<usize> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(int), ..
        }) => int.base10_parse().ok(),
        _ => None,
    }
}

/// Convert a plain type path; `None` when it uses shapes the model does not represent.
fn convert_path(path: &syn::Path, imports: &ImportMap) -> Option<TypeExpr> {
    let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    let last = path.segments.last()?;
    let init_has_args = path
        .segments
        .iter()
        .take(segments.len() - 1)
        .any(|s| !s.arguments.is_none());
    if init_has_args {
        return None;
    }

    let args = match &last.arguments {
        syn::PathArguments::None => Vec::new(),
        syn::PathArguments::AngleBracketed(angle) => {
            let mut args = Vec::with_capacity(angle.args.len());
            for arg in &angle.args {
                match arg {
                    syn::GenericArgument::Type(t) => args.push(convert_type(t, imports)),
                    _ => return None,
                }
            }
            args
        }
        syn::PathArguments::Parenthesized(_) => return None,
    };

    // Leading `::` keeps its meaning only as an opaque path.
    if path.leading_colon.is_some() {
        return None;
    }

    let name = last.ident.to_string();
    let qualified = if segments.len() == 1 {
        imports.resolve(&name).map(<[String]>::to_vec)
    } else {
        Some(segments.clone())
    };

    if let Some(ty) = structural(&name, &args) {
        return Some(ty);
    }

    Some(match (qualified, args.is_empty()) {
        (None, true) => TypeExpr::Named(name),
        (None, false) => TypeExpr::Generic { name, args },
        (Some(full), true) => TypeExpr::Path(full),
        (Some(full), false) => TypeExpr::Generic {
            name: full.join("::"),
            args,
        },
    })
}

/// Recognize collection types the model represents structurally.
fn structural(name: &str, args: &[TypeExpr]) -> Option<TypeExpr> {
    let seq = |kind| TypeExpr::Sequence {
        kind,
        elem: Box::new(args[0].clone()),
    };
    let map = |kind| TypeExpr::Map {
        kind,
        key: Box::new(args[0].clone()),
        value: Box::new(args[1].clone()),
    };
    match (name, args.len()) {
        ("Vec", 1) => Some(seq(SeqKind::Vec)),
        ("VecDeque", 1) => Some(seq(SeqKind::VecDeque)),
        ("HashMap", 2) => Some(map(MapKind::HashMap)),
        ("BTreeMap", 2) => Some(map(MapKind::BTreeMap)),
        _ => None,
    }
}

fn convert_trait_object(
    bounds: &syn::punctuated::Punctuated<syn::TypeParamBound, syn::Token![+]>,
    imports: &ImportMap,
) -> Option<TypeExpr> {
    let mut traits = Vec::new();
    let mut lifetime = None;
    for bound in bounds {
        match bound {
            syn::TypeParamBound::Trait(t) if t.lifetimes.is_none() && matches!(t.modifier, syn::TraitBoundModifier::None) => {
                traits.push(convert_path(&t.path, imports)?);
            }
            syn::TypeParamBound::Lifetime(lt) => lifetime = Some(lt.to_string()),
            _ => return None,
        }
    }
    Some(TypeExpr::TraitObject {
        bounds: traits,
        lifetime,
    })
}

/// Names of single-segment traits referenced as `dyn` bounds anywhere inside `ty`.
pub(super) fn referenced_traits(ty: &TypeExpr, out: &mut Vec<String>) {
    match ty {
        TypeExpr::TraitObject { bounds, .. } => {
            for bound in bounds {
                match bound {
                    TypeExpr::Named(name) | TypeExpr::Generic { name, .. } => out.push(name.clone()),
                    _ => {}
                }
                referenced_traits(bound, out);
            }
        }
        TypeExpr::Generic { args, .. } => args.iter().for_each(|a| referenced_traits(a, out)),
        TypeExpr::Function { params, ret } => {
            params.iter().for_each(|p| referenced_traits(p, out));
            if let Some(ret) = ret {
                referenced_traits(ret, out);
            }
        }
        TypeExpr::Sequence { elem, .. } => referenced_traits(elem, out),
        TypeExpr::Map { key, value, .. } => {
            referenced_traits(key, out);
            referenced_traits(value, out);
        }
        TypeExpr::Reference { inner, .. } => referenced_traits(inner, out),
        TypeExpr::Tuple(items) => items.iter().for_each(|t| referenced_traits(t, out)),
        TypeExpr::Named(_) | TypeExpr::Path(_) | TypeExpr::Opaque(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv(src: &str) -> TypeExpr {
        let ty: syn::Type = syn::parse_str(src).unwrap();
        convert_type(&ty, &ImportMap::default())
    }

    #[test]
    fn test_named_and_path() {
        assert_eq!(conv("u32"), TypeExpr::named("u32"));
        assert_eq!(conv("Record"), TypeExpr::named("Record"));
        assert_eq!(conv("io::Error"), TypeExpr::path(["io", "Error"]));
    }

    #[test]
    fn test_collections() {
        assert_eq!(conv("Vec<Record>"), TypeExpr::vec(TypeExpr::named("Record")));
        assert_eq!(
            conv("HashMap<String, Record>"),
            TypeExpr::hash_map(TypeExpr::named("String"), TypeExpr::named("Record"))
        );
        assert_eq!(
            conv("[u8; 4]"),
            TypeExpr::Sequence {
                kind: SeqKind::Array(4),
                elem: Box::new(TypeExpr::named("u8")),
            }
        );
        assert_eq!(
            conv("std::collections::BTreeMap<u8, u8>"),
            TypeExpr::Map {
                kind: MapKind::BTreeMap,
                key: Box::new(TypeExpr::named("u8")),
                value: Box::new(TypeExpr::named("u8")),
            }
        );
    }

    #[test]
    fn test_references_tuples_and_fns() {
        assert_eq!(conv("&str"), TypeExpr::reference(TypeExpr::named("str")));
        assert_eq!(
            conv("(String, Option<Error>)"),
            TypeExpr::Tuple(vec![
                TypeExpr::named("String"),
                TypeExpr::option(TypeExpr::named("Error")),
            ])
        );
        assert_eq!(
            conv("fn(Key) -> bool"),
            TypeExpr::function(vec![TypeExpr::named("Key")], Some(TypeExpr::named("bool")))
        );
    }

    #[test]
    fn test_trait_objects() {
        let ty = conv("Box<dyn Conn + Send + 'static>");
        assert_eq!(
            ty,
            TypeExpr::generic(
                "Box",
                vec![TypeExpr::TraitObject {
                    bounds: vec![TypeExpr::named("Conn"), TypeExpr::named("Send")],
                    lifetime: Some("'static".to_string()),
                }],
            )
        );
        let mut found = Vec::new();
        referenced_traits(&ty, &mut found);
        assert_eq!(found, vec!["Conn", "Send"]);
    }

    #[test]
    fn test_unknown_shapes_are_opaque() {
        assert!(matches!(conv("impl Iterator<Item = u8>"), TypeExpr::Opaque(_)));
        assert!(matches!(conv("<T as Trait>::Out"), TypeExpr::Opaque(_)));
        assert!(matches!(conv("Box<dyn Fn(u8) -> u8>"), TypeExpr::Generic { .. } | TypeExpr::Opaque(_)));
    }

    #[test]
    fn test_imported_names_become_paths() {
        let file = syn::parse_file("use std::error::Error;").unwrap();
        let imports = ImportMap::from_items(&file.items);
        let ty: syn::Type = syn::parse_str("Box<dyn Error>").unwrap();
        assert_eq!(
            convert_type(&ty, &imports),
            TypeExpr::generic(
                "Box",
                vec![TypeExpr::TraitObject {
                    bounds: vec![TypeExpr::path(["std", "error", "Error"])],
                    lifetime: None,
                }],
            )
        );
    }
}
