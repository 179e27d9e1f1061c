use tsgen_ast::{ArgKind, CallGraphOracle, Param, Type};

/// Enumerates the concrete types flowing into `param_name` across every
/// call-graph in-edge of `func_name`. The positional index of `param_name`
/// is resolved against `params` (already flattened left-to-right by the
/// program loader); absent names yield no results.
///
/// Guards against an empty in-edge list before any indexing, logging at
/// `debug` instead of faulting.
pub fn incoming_types_for(func_name: &str, params: &[Param], param_name: &str, oracle: &dyn CallGraphOracle) -> Vec<Type> {
    let Some(index) = params.iter().position(|p| p.name == param_name) else {
        log::debug!("{func_name}: no parameter named {param_name:?}, nothing to collect");
        return Vec::new();
    };

    let edges = oracle.in_edges(func_name);
    if edges.is_empty() {
        log::debug!("{func_name}: no call-graph in-edges, nothing to collect");
        return Vec::new();
    }
    log::trace!("{func_name}: first in-edge from {:?}", edges[0].caller);

    let mut incoming = Vec::new();
    for edge in &edges {
        let Some(site) = &edge.site else {
            continue;
        };
        let Some(ArgKind::InterfaceBox(ty)) = site.args.get(index) else {
            continue;
        };
        if !incoming.contains(ty) {
            incoming.push(ty.clone());
        }
    }
    incoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsgen_ir::mock::MockOracle;

    fn param(name: &str) -> Param {
        Param { name: name.to_string(), ty: tsgen_ast::TypeSyntax::Ident("any".into()) }
    }

    #[test]
    fn collects_boxed_types_in_first_seen_order_deduped() {
        let oracle = MockOracle::new()
            .with_call("CallerA", "Foo", vec![ArgKind::InterfaceBox(Type::Basic("int".into()))])
            .with_call("CallerB", "Foo", vec![ArgKind::InterfaceBox(Type::Basic("bool".into()))])
            .with_call("CallerC", "Foo", vec![ArgKind::InterfaceBox(Type::Basic("int".into()))]);

        let params = vec![param("x")];
        let incoming = incoming_types_for("Foo", &params, "x", &oracle);
        assert_eq!(incoming, vec![Type::Basic("int".into()), Type::Basic("bool".into())]);
    }

    #[test]
    fn non_interface_box_args_are_discarded() {
        let oracle = MockOracle::new().with_call("Caller", "Foo", vec![ArgKind::Other]);
        let params = vec![param("x")];
        assert_eq!(incoming_types_for("Foo", &params, "x", &oracle), Vec::<Type>::new());
    }

    #[test]
    fn unknown_param_name_yields_empty() {
        let oracle = MockOracle::new().with_call("Caller", "Foo", vec![ArgKind::InterfaceBox(Type::Basic("int".into()))]);
        let params = vec![param("x")];
        assert_eq!(incoming_types_for("Foo", &params, "y", &oracle), Vec::<Type>::new());
    }

    #[test]
    fn no_in_edges_yields_empty_without_panicking() {
        let oracle = MockOracle::new();
        let params = vec![param("x")];
        assert_eq!(incoming_types_for("Foo", &params, "x", &oracle), Vec::<Type>::new());
    }
}
