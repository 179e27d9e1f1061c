use std::collections::HashMap;

use tsgen_ast::{ChanDir, Type};

/// A mapping from variable name to ground `Type`. Keys are unique; there is
/// no transitive resolution, bindings never refer to one another.
pub type Binding = HashMap<String, Type>;

/// Matches `pattern` against `target` with a structural top-down walk,
/// returning the accumulated variable bindings on success. Returns `None`
/// on any constructor mismatch, field-name mismatch, tag mismatch, or
/// inconsistent rebinding of the same variable.
///
/// No occurs check is required: bindings are always ground, since `target`
/// is always ground by construction and a `Var` node only ever appears in
/// `pattern`.
pub fn unify(pattern: &Type, target: &Type) -> Option<Binding> {
    let mut binding = Binding::new();
    if unify_into(pattern, target, &mut binding) {
        Some(binding)
    } else {
        None
    }
}

fn unify_into(pattern: &Type, target: &Type, binding: &mut Binding) -> bool {
    if let Type::Var(name) = pattern {
        return match binding.get(name) {
            Some(existing) => existing == target,
            None => {
                binding.insert(name.clone(), target.clone());
                true
            }
        };
    }

    match (pattern, target) {
        (Type::Named(p), Type::Named(t)) => p == t,
        (Type::Basic(p), Type::Basic(t)) => p == t,
        (Type::Pointer(p), Type::Pointer(t)) => unify_into(p, t, binding),
        (Type::Slice(p), Type::Slice(t)) => unify_into(p, t, binding),
        (Type::Array(pn, p), Type::Array(tn, t)) => pn == tn && unify_into(p, t, binding),
        (Type::Map(pk, pv), Type::Map(tk, tv)) => {
            unify_into(pk, tk, binding) && unify_into(pv, tv, binding)
        }
        (Type::Chan(pd, p), Type::Chan(td, t)) => pd.accepts(*td) && unify_into(p, t, binding),
        (
            Type::Func { params: pp, results: pr, variadic: pv },
            Type::Func { params: tp, results: tr, variadic: tv },
        ) => {
            pv == tv
                && pp.len() == tp.len()
                && pr.len() == tr.len()
                && pp.iter().zip(tp).all(|(p, t)| unify_into(p, t, binding))
                && pr.iter().zip(tr).all(|(p, t)| unify_into(p, t, binding))
        }
        (Type::Struct(pf), Type::Struct(tf)) => {
            pf.len() == tf.len()
                && pf.iter().zip(tf).all(|(p, t)| {
                    p.name == t.name && p.tag == t.tag && unify_into(&p.ty, &t.ty, binding)
                })
        }
        (Type::Interface(pm), Type::Interface(tm)) => {
            pm.len() == tm.len()
                && pm.iter().zip(tm).all(|(p, t)| {
                    p.name == t.name && unify_into(&p.sig, &t.sig, binding)
                })
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsgen_ast::{Field, Method};

    fn var(name: &str) -> Type {
        Type::Var(name.to_string())
    }
    fn named(name: &str) -> Type {
        Type::Named(name.to_string())
    }
    fn basic(name: &str) -> Type {
        Type::Basic(name.to_string())
    }

    #[test]
    fn ground_pattern_matches_only_itself() {
        assert_eq!(unify(&basic("int"), &basic("int")), Some(Binding::new()));
        assert_eq!(unify(&basic("int"), &basic("bool")), None);
    }

    #[test]
    fn basic_map_expansion() {
        // case map[string]T: vs map[string]int and map[string]bool
        let pattern = Type::Map(Box::new(basic("string")), Box::new(var("T")));
        let int_binding = unify(&pattern, &Type::Map(Box::new(basic("string")), Box::new(basic("int"))));
        let bool_binding =
            unify(&pattern, &Type::Map(Box::new(basic("string")), Box::new(basic("bool"))));
        assert_eq!(int_binding.unwrap().get("T"), Some(&basic("int")));
        assert_eq!(bool_binding.unwrap().get("T"), Some(&basic("bool")));
    }

    #[test]
    fn variable_in_key() {
        // case map[T]bool: vs map[int]bool
        let pattern = Type::Map(Box::new(var("T")), Box::new(basic("bool")));
        let target = Type::Map(Box::new(basic("int")), Box::new(basic("bool")));
        let binding = unify(&pattern, &target).unwrap();
        assert_eq!(binding.get("T"), Some(&basic("int")));
    }

    #[test]
    fn directional_channel_widening() {
        // template `chan T` accepts chan int, chan<- int, <-chan int
        let template = Type::Chan(ChanDir::Both, Box::new(var("T")));
        for dir in [ChanDir::Both, ChanDir::Send, ChanDir::Recv] {
            let target = Type::Chan(dir, Box::new(basic("int")));
            assert!(unify(&template, &target).is_some());
        }
        // template `chan<- T` rejects `<-chan int`
        let send_only = Type::Chan(ChanDir::Send, Box::new(var("T")));
        let recv_target = Type::Chan(ChanDir::Recv, Box::new(basic("int")));
        assert_eq!(unify(&send_only, &recv_target), None);
    }

    #[test]
    fn slice_of_directional_channel() {
        // case []chan<- T: vs []chan<- *xxx
        let pattern = Type::Slice(Box::new(Type::Chan(ChanDir::Send, Box::new(var("T")))));
        let target =
            Type::Slice(Box::new(Type::Chan(ChanDir::Send, Box::new(Type::Pointer(Box::new(named("xxx")))))));
        let binding = unify(&pattern, &target).unwrap();
        assert_eq!(binding.get("T"), Some(&Type::Pointer(Box::new(named("xxx")))));
    }

    #[test]
    fn function_type_with_two_variables() {
        // case func(T) (S, error): vs func(bool) (Reader, error)
        let pattern = Type::Func {
            params: vec![var("T")],
            results: vec![var("S"), named("error")],
            variadic: false,
        };
        let target = Type::Func {
            params: vec![basic("bool")],
            results: vec![named("Reader"), named("error")],
            variadic: false,
        };
        let binding = unify(&pattern, &target).unwrap();
        assert_eq!(binding.get("T"), Some(&basic("bool")));
        assert_eq!(binding.get("S"), Some(&named("Reader")));
    }

    #[test]
    fn no_match_preservation() {
        // case *T: vs map[int]int
        let pattern = Type::Pointer(Box::new(var("T")));
        let target = Type::Map(Box::new(basic("int")), Box::new(basic("int")));
        assert_eq!(unify(&pattern, &target), None);
    }

    #[test]
    fn repeated_variable_must_bind_consistently() {
        // case map[T]T: vs map[int]bool must fail; map[int]int must succeed
        let pattern = Type::Map(Box::new(var("T")), Box::new(var("T")));
        assert_eq!(
            unify(&pattern, &Type::Map(Box::new(basic("int")), Box::new(basic("bool")))),
            None
        );
        let ok = unify(&pattern, &Type::Map(Box::new(basic("int")), Box::new(basic("int"))));
        assert_eq!(ok.unwrap().get("T"), Some(&basic("int")));
    }

    #[test]
    fn struct_fields_compared_by_name_and_tag() {
        let pattern = Type::Struct(vec![Field { name: "X".into(), ty: var("T"), tag: "json:\"x\"".into() }]);
        let matching = Type::Struct(vec![Field {
            name: "X".into(),
            ty: basic("int"),
            tag: "json:\"x\"".into(),
        }]);
        assert!(unify(&pattern, &matching).is_some());

        let wrong_tag = Type::Struct(vec![Field { name: "X".into(), ty: basic("int"), tag: "".into() }]);
        assert_eq!(unify(&pattern, &wrong_tag), None);

        let wrong_name = Type::Struct(vec![Field {
            name: "Y".into(),
            ty: basic("int"),
            tag: "json:\"x\"".into(),
        }]);
        assert_eq!(unify(&pattern, &wrong_name), None);
    }

    #[test]
    fn named_never_matches_structurally() {
        let pattern = named("io.Reader");
        let target = named("io.Writer");
        assert_eq!(unify(&pattern, &target), None);
    }

    #[test]
    fn interface_method_sets_compared_by_name_and_signature() {
        let pattern = Type::Interface(vec![Method {
            name: "Read".into(),
            sig: Type::Func { params: vec![var("T")], results: vec![], variadic: false },
        }]);
        let target = Type::Interface(vec![Method {
            name: "Read".into(),
            sig: Type::Func { params: vec![basic("int")], results: vec![], variadic: false },
        }]);
        let binding = unify(&pattern, &target).unwrap();
        assert_eq!(binding.get("T"), Some(&basic("int")));
    }
}
