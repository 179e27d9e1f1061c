use tsgen_ast::{CallGraphOracle, DefKind, Program, Stmt, TypeOracle};
use tsgen_transform::TypeSwitchView;

use crate::collector::incoming_types_for;

/// Runs the expander over every function of every package in place.
/// Packages and functions are visited in declaration order; within a
/// function, only the top-level statement list is scanned, nested switches
/// are not descended into.
pub fn expand_program(program: &mut Program, oracle: &(impl TypeOracle + CallGraphOracle)) {
    for pkg in &mut program.packages {
        for func in &mut pkg.funcs {
            expand_func(&func.name.clone(), &func.params.clone(), &mut func.body, oracle);
        }
    }
}

fn expand_func(
    func_name: &str,
    params: &[tsgen_ast::Param],
    body: &mut [Stmt],
    oracle: &(impl TypeOracle + CallGraphOracle),
) {
    for stmt in body {
        let Stmt::TypeSwitch(switch) = stmt else { continue };

        let target_ty = match oracle.def_of(&switch.target) {
            Some(DefKind::Value(ty)) => ty,
            Some(DefKind::TypeAlias(_)) => {
                log::debug!("{func_name}: switch target {:?} resolves to a type alias, skipping", switch.target);
                continue;
            }
            None => {
                log::debug!("{func_name}: switch target {:?} has no known definition, skipping", switch.target);
                continue;
            }
        };

        let Some(view) = TypeSwitchView::from_statement(switch, &target_ty, oracle) else {
            log::debug!("{func_name}: switch over {:?} rejected (not an empty-interface target)", switch.target);
            continue;
        };

        if view.templates().is_empty() {
            continue;
        }

        let incoming = incoming_types_for(func_name, params, &switch.target, oracle);
        if incoming.is_empty() {
            log::debug!("{func_name}: no incoming types observed for {:?}, leaving templates as-is", switch.target);
        }

        *switch = view.expand(&incoming, oracle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsgen_ast::{ArgKind, CaseClause, FuncDecl, Package, Param, Type, TypeSwitchStmt, TypeSyntax};
    use tsgen_ir::mock::MockOracle;

    fn ident(name: &str) -> TypeSyntax {
        TypeSyntax::Ident(name.to_string())
    }

    #[test]
    fn expands_a_template_switch_using_call_graph_incoming_types() {
        let oracle = MockOracle::new()
            .with_def("v", DefKind::Value(Type::empty_interface()))
            .with_call(
                "CallerA",
                "Handle",
                vec![ArgKind::InterfaceBox(Type::Pointer(Box::new(Type::Basic("int".into()))))],
            )
            .with_call(
                "CallerB",
                "Handle",
                vec![ArgKind::InterfaceBox(Type::Pointer(Box::new(Type::Basic("bool".into()))))],
            );

        let template = TypeSyntax::Pointer(Box::new(ident("T")));
        let switch = TypeSwitchStmt {
            target: "v".into(),
            clauses: vec![CaseClause { types: vec![template.clone()], body: vec![] }],
            default: None,
        };
        let mut program = Program {
            packages: vec![Package {
                name: "pkg".into(),
                funcs: vec![FuncDecl {
                    name: "Handle".into(),
                    params: vec![Param { name: "v".into(), ty: ident("any") }],
                    body: vec![Stmt::TypeSwitch(switch)],
                }],
            }],
        };

        expand_program(&mut program, &oracle);

        let Stmt::TypeSwitch(expanded) = &program.packages[0].funcs[0].body[0] else {
            panic!("expected a type switch");
        };
        assert_eq!(expanded.clauses.len(), 3);
        assert_eq!(expanded.clauses[0].types[0], TypeSyntax::Pointer(Box::new(ident("int"))));
        assert_eq!(expanded.clauses[1].types[0], TypeSyntax::Pointer(Box::new(ident("bool"))));
        assert_eq!(expanded.clauses[2].types[0], template);
    }

    #[test]
    fn skips_switch_with_no_known_target_definition() {
        let oracle = MockOracle::new();
        let switch = TypeSwitchStmt { target: "v".into(), clauses: vec![], default: None };
        let mut program = Program {
            packages: vec![Package {
                name: "pkg".into(),
                funcs: vec![FuncDecl {
                    name: "Handle".into(),
                    params: vec![],
                    body: vec![Stmt::TypeSwitch(switch.clone())],
                }],
            }],
        };

        expand_program(&mut program, &oracle);

        let Stmt::TypeSwitch(unchanged) = &program.packages[0].funcs[0].body[0] else {
            panic!("expected a type switch");
        };
        assert_eq!(*unchanged, switch);
    }
}
