use std::cmp::Ordering;

use tsgen_ast::{print_type, CaseClause, Type, TypeOracle, TypeSwitchStmt};

/// Reorders an existing, non-template type switch's case clauses so that
/// types implementing more widely shared interfaces come first.
///
/// `default` never appears in `switch.clauses` in this program model (it is
/// held on `TypeSwitchStmt::default`), so it is already sorted last simply
/// by not being touched here, without needing a sentinel.
///
/// Unlike the expander, this does not touch templates or call sites, it
/// only needs the set of case types already present and the interfaces
/// declared anywhere in the loaded program.
pub fn sort(switch: &mut TypeSwitchStmt, oracle: &dyn TypeOracle) {
    let case_types: Vec<Type> = switch
        .clauses
        .iter()
        .map(|c| first_type(c, oracle))
        .collect();

    let ranked_interfaces = rank_interfaces(&case_types, oracle);

    let mut indexed: Vec<(CaseClause, Type)> = switch.clauses.drain(..).zip(case_types).collect();
    indexed.sort_by(|(_, a), (_, b)| compare_by_popularity(a, b, &ranked_interfaces, oracle));
    switch.clauses = indexed.into_iter().map(|(c, _)| c).collect();
}

/// `popularity(I) = |{ t in the switch's case types : t implements I }|`,
/// restricted to interfaces with nonzero popularity, ordered by descending
/// popularity and then ascending canonical name.
///
/// Interfaces are identified to `implements` by their qualified name, not
/// their structural method set: every `TypeOracle::implements` impl
/// recognizes an interface via `Type::Named(qualified_name)`, so ranking
/// must query `oracle.implements(t, &Type::Named(decl.name))` rather than
/// the interface's own `Type::Interface(..)` value, which no implementor
/// ever matches.
fn rank_interfaces(case_types: &[Type], oracle: &dyn TypeOracle) -> Vec<Type> {
    let mut popularity: Vec<(Type, usize)> = oracle
        .packages()
        .into_iter()
        .flat_map(|pkg| pkg.interfaces.into_iter())
        .map(|decl| {
            let iface = Type::Named(decl.name);
            let count = case_types.iter().filter(|t| oracle.implements(t, &iface)).count();
            (iface, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    popularity.sort_by(|(a_iface, a_count), (b_iface, b_count)| {
        b_count.cmp(a_count).then_with(|| print_type(a_iface).cmp(&print_type(b_iface)))
    });
    popularity.into_iter().map(|(iface, _)| iface).collect()
}

/// Lexicographic comparison over the popularity-ordered interface list: at
/// the first interface where the two types disagree on implementing it,
/// the implementor sorts first; final tie-break is ascending canonical
/// printed form.
fn compare_by_popularity(
    a: &Type,
    b: &Type,
    ranked_interfaces: &[Type],
    oracle: &dyn TypeOracle,
) -> Ordering {
    for iface in ranked_interfaces {
        let a_impl = oracle.implements(a, iface);
        let b_impl = oracle.implements(b, iface);
        if a_impl != b_impl {
            return if a_impl { Ordering::Less } else { Ordering::Greater };
        }
    }
    print_type(a).cmp(&print_type(b))
}

/// A multi-type clause (`case A, B:`) is ranked by its first listed type.
fn first_type(clause: &CaseClause, oracle: &dyn TypeOracle) -> Type {
    tsgen_ast::parse(&clause.types[0], oracle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsgen_ast::{DefKind, InterfaceDecl, PackageInfo, TypeSyntax};

    struct FakeOracle {
        interfaces: Vec<InterfaceDecl>,
        impls: Vec<(&'static str, &'static str)>,
    }
    impl TypeOracle for FakeOracle {
        fn resolve_named(&self, name: &str) -> String {
            name.to_string()
        }
        fn packages(&self) -> Vec<PackageInfo> {
            vec![PackageInfo { name: "pkg".into(), interfaces: self.interfaces.clone() }]
        }
        fn implements(&self, t: &Type, iface: &Type) -> bool {
            let (Type::Named(t), Type::Named(iface)) = (t, iface) else { return false };
            self.impls.iter().any(|(ty, i)| ty == t && i == iface)
        }
        fn def_of(&self, _name: &str) -> Option<DefKind> {
            None
        }
    }

    fn named_clause(name: &str) -> CaseClause {
        CaseClause { types: vec![TypeSyntax::Ident(name.into())], body: vec![] }
    }

    /// A implements I1; B implements I2; C implements I1,I2; D implements
    /// I2. I2 has popularity 3, I1 has popularity 2; expected order C, B,
    /// D, A.
    #[test]
    fn more_popular_interfaces_sort_their_implementors_first() {
        let oracle = FakeOracle {
            interfaces: vec![
                InterfaceDecl { name: "I1".into(), ty: Type::Interface(vec![]) },
                InterfaceDecl { name: "I2".into(), ty: Type::Interface(vec![]) },
            ],
            impls: vec![("A", "I1"), ("B", "I2"), ("C", "I1"), ("C", "I2"), ("D", "I2")],
        };
        let mut switch = TypeSwitchStmt {
            target: "x".into(),
            clauses: vec![named_clause("A"), named_clause("B"), named_clause("C"), named_clause("D")],
            default: None,
        };
        sort(&mut switch, &oracle);
        let order: Vec<String> = switch
            .clauses
            .iter()
            .map(|c| match &c.types[0] {
                TypeSyntax::Ident(n) => n.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(order, vec!["C", "B", "D", "A"]);
    }

    #[test]
    fn default_field_is_left_untouched() {
        let oracle = FakeOracle {
            interfaces: vec![InterfaceDecl { name: "I1".into(), ty: Type::Interface(vec![]) }],
            impls: vec![("A", "I1")],
        };
        let mut switch = TypeSwitchStmt {
            target: "x".into(),
            clauses: vec![named_clause("A")],
            default: Some(vec![tsgen_ast::Node::Opaque("unreachable".into())]),
        };
        sort(&mut switch, &oracle);
        assert!(switch.default.is_some());
    }

    #[test]
    fn zero_popularity_interfaces_are_discarded_and_ties_break_on_name() {
        let oracle = FakeOracle { interfaces: vec![InterfaceDecl { name: "Unused".into(), ty: Type::Interface(vec![]) }], impls: vec![] };
        let mut switch = TypeSwitchStmt {
            target: "x".into(),
            clauses: vec![named_clause("B"), named_clause("A")],
            default: None,
        };
        sort(&mut switch, &oracle);
        let order: Vec<String> = switch
            .clauses
            .iter()
            .map(|c| match &c.types[0] {
                TypeSyntax::Ident(n) => n.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn already_sorted_input_is_stable() {
        let oracle = FakeOracle {
            interfaces: vec![InterfaceDecl { name: "I1".into(), ty: Type::Interface(vec![]) }],
            impls: vec![("A", "I1")],
        };
        let mut switch = TypeSwitchStmt {
            target: "x".into(),
            clauses: vec![named_clause("A"), named_clause("B")],
            default: None,
        };
        let before = switch.clauses.clone();
        sort(&mut switch, &oracle);
        assert_eq!(switch.clauses, before);
    }
}
