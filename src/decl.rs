//! Declaration model: the traits to mock and the type expressions in their signatures.
//!
//! Declarations are produced by a [`crate::frontend::DeclarationSource`] and are read-only afterwards. The backend
//! never mutates them in place; rewriting produces new values.
//!
//! ## Notes
//!
//! - Parameter and result order is significant: it fixes the order of the generated protocol and the positional
//!   order the runtime dispatcher uses.
//! - A Rust method returning a tuple `(A, B)` is modelled as two results; `()` as zero results.

/// A trait to mock. Identity is the trait name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    /// Local traits this trait extends, in declared order. A mock implements all of them.
    pub supertraits: Vec<String>,
    pub methods: Vec<MethodSig>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertraits: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_supertrait(mut self, name: impl Into<String>) -> Self {
        self.supertraits.push(name.into());
        self
    }

    /// Append a method (builder style).
    pub fn with_method(mut self, method: MethodSig) -> Self {
        self.methods.push(method);
        self
    }
}

/// How a method takes `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Receiver {
    /// `&self`
    #[default]
    Ref,
    /// `&mut self`
    RefMut,
    /// `self`
    Owned,
}

/// One method of a trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSig {
    pub name: String,
    pub receiver: Receiver,
    pub params: Vec<NamedType>,
    pub results: Vec<NamedType>,
}

impl MethodSig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::Ref,
            params: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }

    /// Append a named parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeExpr) -> Self {
        self.params.push(NamedType::named(name, ty));
        self
    }

    /// Append an unnamed parameter.
    pub fn unnamed_param(mut self, ty: TypeExpr) -> Self {
        self.params.push(NamedType::unnamed(ty));
        self
    }

    /// Append an unnamed result.
    pub fn result(mut self, ty: TypeExpr) -> Self {
        self.results.push(NamedType::unnamed(ty));
        self
    }

    /// Append a named result.
    pub fn named_result(mut self, name: impl Into<String>, ty: TypeExpr) -> Self {
        self.results.push(NamedType::named(name, ty));
        self
    }
}

/// A parameter or result: optional name plus type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: Option<String>,
    pub ty: TypeExpr,
}

impl NamedType {
    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: TypeExpr) -> Self {
        Self { name: None, ty }
    }
}

/// Sequence-like type constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqKind {
    /// `Vec<T>`
    Vec,
    /// `VecDeque<T>`
    VecDeque,
    /// `[T]`
    Slice,
    /// `[T; N]`
    Array(usize),
}

/// Associative type constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    HashMap,
    BTreeMap,
}

/// A type expression, as a closed set of shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Single-segment name: `u32`, `String`, `Record`.
    Named(String),
    /// Already-qualified path: `io::Error`.
    Path(Vec<String>),
    /// `fn(A, B) -> R`
    Function {
        params: Vec<TypeExpr>,
        ret: Option<Box<TypeExpr>>,
    },
    Sequence {
        kind: SeqKind,
        elem: Box<TypeExpr>,
    },
    Map {
        kind: MapKind,
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `&T` / `&mut T`
    Reference {
        mutable: bool,
        inner: Box<TypeExpr>,
    },
    Tuple(Vec<TypeExpr>),
    /// Single-segment generic application: `Option<T>`, `Box<T>`.
    Generic { name: String, args: Vec<TypeExpr> },
    /// `dyn A + B + 'lt`
    TraitObject {
        bounds: Vec<TypeExpr>,
        lifetime: Option<String>,
    },
    /// Any other shape; rendered verbatim and never rewritten.
    Opaque(Box<syn::Type>),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeExpr::Path(segments.into_iter().map(Into::into).collect())
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Generic {
            name: name.into(),
            args,
        }
    }

    pub fn option(inner: TypeExpr) -> Self {
        Self::generic("Option", vec![inner])
    }

    pub fn vec(elem: TypeExpr) -> Self {
        TypeExpr::Sequence {
            kind: SeqKind::Vec,
            elem: Box::new(elem),
        }
    }

    pub fn hash_map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map {
            kind: MapKind::HashMap,
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn reference(inner: TypeExpr) -> Self {
        TypeExpr::Reference {
            mutable: false,
            inner: Box::new(inner),
        }
    }

    pub fn function(params: Vec<TypeExpr>, ret: Option<TypeExpr>) -> Self {
        TypeExpr::Function {
            params,
            ret: ret.map(Box::new),
        }
    }

    pub fn unit() -> Self {
        TypeExpr::Tuple(Vec::new())
    }

    /// Whether this is `Option<_>`, whose absent value is `None`.
    pub fn is_option(&self) -> bool {
        matches!(self, TypeExpr::Generic { name, args } if name == "Option" && args.len() == 1)
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, TypeExpr::Tuple(items) if items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_builder_preserves_order() {
        let m = MethodSig::new("put")
            .param("key", TypeExpr::named("String"))
            .unnamed_param(TypeExpr::named("u64"))
            .result(TypeExpr::named("bool"));
        assert_eq!(m.params.len(), 2);
        assert_eq!(m.params[0].name.as_deref(), Some("key"));
        assert_eq!(m.params[1].name, None);
        assert_eq!(m.results[0].ty, TypeExpr::named("bool"));
        assert_eq!(m.receiver, Receiver::Ref);
    }

    #[test]
    fn test_is_option() {
        assert!(TypeExpr::option(TypeExpr::named("Error")).is_option());
        assert!(!TypeExpr::generic("Box", vec![TypeExpr::named("Error")]).is_option());
        assert!(TypeExpr::unit().is_unit());
    }
}
