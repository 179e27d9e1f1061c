use crate::syntax::TypeSyntax;

/// A generic node of a case clause's body, opaque to the core beyond what
/// the substituter needs. Real front ends carry a much richer
/// expression/statement grammar; this model keeps just enough shape,
/// identifiers, selectors, calls, nested blocks, and a type-valued leaf for
/// conversions/composite literals, to demonstrate that substitution
/// rewrites bare identifiers but leaves selector field names alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A bare identifier, e.g. `x`. The only variant the substituter ever
    /// rewrites.
    Ident(String),
    /// `base.field`. The field name is a plain `String`, not an `Ident`
    /// node, so `x.T` is never mistaken for an occurrence of variable `T`.
    Selector(Box<Node>, String),
    Call(Box<Node>, Vec<Node>),
    /// A type used in value position, e.g. `T(x)` as a conversion or
    /// `[]T{}` as a composite literal. Carries the unresolved syntax so the
    /// same substitution pass that rewrites the clause's pattern can also
    /// rewrite type-valued leaves inside the body.
    TypeArg(TypeSyntax),
    Block(Vec<Node>),
    /// Anything else, preserved verbatim.
    Opaque(String),
}
