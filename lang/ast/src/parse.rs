use crate::oracle::TypeOracle;
use crate::syntax::{FieldSyntax, MethodSyntax, TypeSyntax};
use crate::ty::{Field, Method, Type};
use crate::var::is_type_var_name;

/// Classifies a bare identifier whose name matches the type-variable
/// criterion as `Var`; every other
/// identifier is resolved through the type oracle into a `Named`. All other
/// constructors recurse structurally.
pub fn parse(syntax: &TypeSyntax, info: &dyn TypeOracle) -> Type {
    match syntax {
        TypeSyntax::Ident(name) => {
            if is_type_var_name(name) {
                Type::Var(name.clone())
            } else if let Some(basic) = basic_kind(name) {
                Type::Basic(basic.to_string())
            } else {
                Type::Named(info.resolve_named(name))
            }
        }
        TypeSyntax::Pointer(inner) => Type::Pointer(Box::new(parse(inner, info))),
        TypeSyntax::Slice(inner) => Type::Slice(Box::new(parse(inner, info))),
        TypeSyntax::Array(n, inner) => Type::Array(*n, Box::new(parse(inner, info))),
        TypeSyntax::Map(k, v) => Type::Map(Box::new(parse(k, info)), Box::new(parse(v, info))),
        TypeSyntax::Chan(dir, inner) => Type::Chan(*dir, Box::new(parse(inner, info))),
        TypeSyntax::Func { params, results, variadic } => Type::Func {
            params: params.iter().map(|p| parse(p, info)).collect(),
            results: results.iter().map(|r| parse(r, info)).collect(),
            variadic: *variadic,
        },
        TypeSyntax::Struct(fields) => Type::Struct(fields.iter().map(|f| parse_field(f, info)).collect()),
        TypeSyntax::Interface(methods) => {
            Type::Interface(methods.iter().map(|m| parse_method(m, info)).collect())
        }
    }
}

fn parse_field(field: &FieldSyntax, info: &dyn TypeOracle) -> Field {
    Field { name: field.name.clone(), ty: parse(&field.ty, info), tag: field.tag.clone() }
}

fn parse_method(method: &MethodSyntax, info: &dyn TypeOracle) -> Method {
    Method { name: method.name.clone(), sig: parse(&method.sig, info) }
}

/// The predeclared basic type names. Treated as `Basic` rather than
/// round-tripped through the oracle's qualification, keeping the
/// `Basic(kind)` variant distinct from `Named(qualifiedName)`.
fn basic_kind(name: &str) -> Option<&'static str> {
    const BASICS: &[&str] = &[
        "bool", "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
        "uint32", "uint64", "uintptr", "float32", "float64", "complex64", "complex128", "byte",
        "rune", "error", "any",
    ];
    BASICS.iter().find(|&&b| b == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{DefKind, PackageInfo};

    struct FakeOracle;
    impl TypeOracle for FakeOracle {
        fn resolve_named(&self, name: &str) -> String {
            format!("pkg.{name}")
        }
        fn packages(&self) -> Vec<PackageInfo> {
            vec![]
        }
        fn implements(&self, _t: &Type, _iface: &Type) -> bool {
            false
        }
        fn def_of(&self, _name: &str) -> Option<DefKind> {
            None
        }
    }

    #[test]
    fn bare_uppercase_ident_is_var() {
        let ty = parse(&TypeSyntax::Ident("T".into()), &FakeOracle);
        assert_eq!(ty, Type::Var("T".into()));
    }

    #[test]
    fn basic_name_is_basic_not_named() {
        let ty = parse(&TypeSyntax::Ident("string".into()), &FakeOracle);
        assert_eq!(ty, Type::Basic("string".into()));
    }

    #[test]
    fn other_ident_resolves_through_oracle() {
        let ty = parse(&TypeSyntax::Ident("Reader".into()), &FakeOracle);
        assert_eq!(ty, Type::Named("pkg.Reader".into()));
    }

    #[test]
    fn map_of_string_to_slice_of_var() {
        let syntax = TypeSyntax::Map(
            Box::new(TypeSyntax::Ident("string".into())),
            Box::new(TypeSyntax::Slice(Box::new(TypeSyntax::Ident("T".into())))),
        );
        let ty = parse(&syntax, &FakeOracle);
        assert_eq!(
            ty,
            Type::Map(
                Box::new(Type::Basic("string".into())),
                Box::new(Type::Slice(Box::new(Type::Var("T".into()))))
            )
        );
        assert!(!ty.is_ground());
        assert_eq!(ty.vars(), vec!["T".to_string()]);
    }
}
