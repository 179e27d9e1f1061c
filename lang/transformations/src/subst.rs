use tsgen_ast::{DefKind, FieldSyntax, MethodSyntax, Node, TypeOracle, TypeSyntax};

use crate::unify::Binding;

/// Rewrites a template type expression by walking its original syntax and
/// replacing every identifier that is a key of `binding` with a fresh AST
/// built from the pretty-printed form of the bound type. Recursing through
/// fresh `Box`es on every call means the result never shares nodes with the
/// template or with any other clause produced from it.
pub fn substitute_type_syntax(syntax: &TypeSyntax, binding: &Binding) -> TypeSyntax {
    match syntax {
        TypeSyntax::Ident(name) => match binding.get(name) {
            Some(bound) => type_to_syntax(bound),
            None => TypeSyntax::Ident(name.clone()),
        },
        TypeSyntax::Pointer(t) => TypeSyntax::Pointer(Box::new(substitute_type_syntax(t, binding))),
        TypeSyntax::Slice(t) => TypeSyntax::Slice(Box::new(substitute_type_syntax(t, binding))),
        TypeSyntax::Array(n, t) => TypeSyntax::Array(*n, Box::new(substitute_type_syntax(t, binding))),
        TypeSyntax::Map(k, v) => TypeSyntax::Map(
            Box::new(substitute_type_syntax(k, binding)),
            Box::new(substitute_type_syntax(v, binding)),
        ),
        TypeSyntax::Chan(dir, t) => TypeSyntax::Chan(*dir, Box::new(substitute_type_syntax(t, binding))),
        TypeSyntax::Func { params, results, variadic } => TypeSyntax::Func {
            params: params.iter().map(|p| substitute_type_syntax(p, binding)).collect(),
            results: results.iter().map(|r| substitute_type_syntax(r, binding)).collect(),
            variadic: *variadic,
        },
        TypeSyntax::Struct(fields) => TypeSyntax::Struct(
            fields
                .iter()
                .map(|f| FieldSyntax {
                    name: f.name.clone(),
                    ty: substitute_type_syntax(&f.ty, binding),
                    tag: f.tag.clone(),
                })
                .collect(),
        ),
        TypeSyntax::Interface(methods) => TypeSyntax::Interface(
            methods
                .iter()
                .map(|m| MethodSyntax { name: m.name.clone(), sig: substitute_type_syntax(&m.sig, binding) })
                .collect(),
        ),
    }
}

/// Re-syntaxes a resolved, ground `Type` back into `TypeSyntax` so it can be
/// spliced into a freshly substituted expression tree. Bound types are
/// always ground, so the `Var` arm is unreachable in practice; it is kept
/// total rather than made to panic.
pub fn type_to_syntax(ty: &tsgen_ast::Type) -> TypeSyntax {
    use tsgen_ast::Type;
    match ty {
        Type::Named(n) | Type::Basic(n) | Type::Var(n) => TypeSyntax::Ident(n.clone()),
        Type::Pointer(t) => TypeSyntax::Pointer(Box::new(type_to_syntax(t))),
        Type::Slice(t) => TypeSyntax::Slice(Box::new(type_to_syntax(t))),
        Type::Array(n, t) => TypeSyntax::Array(*n, Box::new(type_to_syntax(t))),
        Type::Map(k, v) => TypeSyntax::Map(Box::new(type_to_syntax(k)), Box::new(type_to_syntax(v))),
        Type::Chan(dir, t) => TypeSyntax::Chan(*dir, Box::new(type_to_syntax(t))),
        Type::Func { params, results, variadic } => TypeSyntax::Func {
            params: params.iter().map(type_to_syntax).collect(),
            results: results.iter().map(type_to_syntax).collect(),
            variadic: *variadic,
        },
        Type::Struct(fields) => TypeSyntax::Struct(
            fields
                .iter()
                .map(|f| FieldSyntax { name: f.name.clone(), ty: type_to_syntax(&f.ty), tag: f.tag.clone() })
                .collect(),
        ),
        Type::Interface(methods) => TypeSyntax::Interface(
            methods
                .iter()
                .map(|m| MethodSyntax { name: m.name.clone(), sig: type_to_syntax(&m.sig) })
                .collect(),
        ),
    }
}

/// Substitutes a template's body: an identifier is rewritten only when it
/// is both a key of `binding` *and* the oracle resolves it to the local
/// type alias declared as the empty interface, which keeps an unrelated
/// binding that merely happens to share a variable-shaped name untouched.
/// A selector's field name (`x.T`) is a plain string, never an `Ident`
/// node, so it is never a candidate in the first place.
pub fn substitute_body(body: &[Node], binding: &Binding, oracle: &dyn TypeOracle) -> Vec<Node> {
    body.iter().map(|n| substitute_node(n, binding, oracle)).collect()
}

fn substitute_node(node: &Node, binding: &Binding, oracle: &dyn TypeOracle) -> Node {
    match node {
        Node::Ident(name) => match binding.get(name) {
            Some(bound) if is_local_empty_interface_alias(name, oracle) => {
                Node::TypeArg(type_to_syntax(bound))
            }
            _ => Node::Ident(name.clone()),
        },
        Node::Selector(base, field) => {
            Node::Selector(Box::new(substitute_node(base, binding, oracle)), field.clone())
        }
        Node::Call(callee, args) => Node::Call(
            Box::new(substitute_node(callee, binding, oracle)),
            args.iter().map(|a| substitute_node(a, binding, oracle)).collect(),
        ),
        Node::TypeArg(syntax) => Node::TypeArg(substitute_type_syntax(syntax, binding)),
        Node::Block(stmts) => Node::Block(stmts.iter().map(|s| substitute_node(s, binding, oracle)).collect()),
        Node::Opaque(s) => Node::Opaque(s.clone()),
    }
}

fn is_local_empty_interface_alias(name: &str, oracle: &dyn TypeOracle) -> bool {
    matches!(oracle.def_of(name), Some(DefKind::TypeAlias(ty)) if ty.is_empty_interface())
}
