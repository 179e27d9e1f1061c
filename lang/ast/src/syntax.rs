use crate::ty::ChanDir;

/// The unresolved type expression syntax a case clause's type list or a
/// function parameter carries before `parse` turns it into a `Type`.
/// This is the bit of source expression the frontend hands the core;
/// `Ident` is left unresolved here precisely so `parse` can apply the
/// type-variable criterion before consulting the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSyntax {
    /// A bare or qualified identifier, e.g. `"T"`, `"int"`, `"io.Reader"`.
    Ident(String),
    Pointer(Box<TypeSyntax>),
    Slice(Box<TypeSyntax>),
    Array(u64, Box<TypeSyntax>),
    Map(Box<TypeSyntax>, Box<TypeSyntax>),
    Chan(ChanDir, Box<TypeSyntax>),
    Func {
        params: Vec<TypeSyntax>,
        results: Vec<TypeSyntax>,
        variadic: bool,
    },
    Struct(Vec<FieldSyntax>),
    Interface(Vec<MethodSyntax>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSyntax {
    pub name: String,
    pub ty: TypeSyntax,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSyntax {
    pub name: String,
    pub sig: TypeSyntax,
}
