use std::collections::HashSet;

use tsgen_ast::{print_type, CaseClause, Node, Type, TypeOracle, TypeSwitchStmt, TypeSyntax};

use crate::subst::{substitute_body, type_to_syntax};
use crate::unify::unify;

/// A case clause whose type expression contains at least one variable.
/// `pattern` is the already-parsed `Type` used for unification;
/// `pattern_syntax` is the original syntax, preserved so the original
/// clause can be re-emitted verbatim as the trailing fallback.
#[derive(Debug, Clone)]
pub struct TemplateClause {
    pub pattern: Type,
    pub pattern_syntax: TypeSyntax,
    pub body: Vec<Node>,
}

/// A clause generated by substituting a binding into a template.
#[derive(Debug, Clone)]
pub struct ConcreteClause {
    pub ty: Type,
    pub body: Vec<Node>,
}

/// A case clause preserved verbatim because it did not qualify as a
/// template (wrong type-list length, or a type with no variables).
#[derive(Debug, Clone)]
struct FixedClause {
    types: Vec<TypeSyntax>,
    resolved: Vec<Type>,
    body: Vec<Node>,
}

/// Identifies the template clauses inside one type-switch statement and
/// owns the final reassembly of the switch once incoming types are known.
/// Its lifetime is one expansion pass, it is built from a `TypeSwitchStmt`
/// and consumed by a single `expand` call.
#[derive(Debug, Clone)]
pub struct TypeSwitchView {
    target_name: String,
    fixed: Vec<FixedClause>,
    templates: Vec<TemplateClause>,
    default: Option<Vec<Node>>,
}

impl TypeSwitchView {
    /// Builds a view over `switch`, or returns `None` if it does not
    /// qualify for expansion.
    ///
    /// The "switched expression must be a single identifier" precondition is
    /// enforced upstream by the program model: a `TypeSwitchStmt` only
    /// exists for `switch x := e.(type)` where `e` is an identifier, a
    /// switch over any other expression lowers to an opaque `Stmt::Other`
    /// and never reaches this function. What remains to check here is that
    /// the target's static type, `target_ty`, is the empty interface.
    pub fn from_statement(
        switch: &TypeSwitchStmt,
        target_ty: &Type,
        oracle: &dyn TypeOracle,
    ) -> Option<TypeSwitchView> {
        if !target_ty.is_empty_interface() {
            return None;
        }

        let mut fixed = Vec::new();
        let mut templates = Vec::new();

        for clause in &switch.clauses {
            if clause.types.len() == 1 {
                let pattern = tsgen_ast::parse(&clause.types[0], oracle);
                if !pattern.is_ground() {
                    templates.push(TemplateClause {
                        pattern,
                        pattern_syntax: clause.types[0].clone(),
                        body: clause.body.clone(),
                    });
                    continue;
                }
            }
            let resolved = clause.types.iter().map(|t| tsgen_ast::parse(t, oracle)).collect();
            fixed.push(FixedClause { types: clause.types.clone(), resolved, body: clause.body.clone() });
        }

        Some(TypeSwitchView { target_name: switch.target.clone(), fixed, templates, default: switch.default.clone() })
    }

    pub fn templates(&self) -> &[TemplateClause] {
        &self.templates
    }

    /// Produces the expanded switch for the given incoming types.
    ///
    /// For each incoming ground type, tries templates in source order and
    /// uses the first one whose pattern unifies; a type with no matching
    /// template contributes nothing and the original templates remain as
    /// the runtime fallback. Generated clauses are deduplicated by
    /// `print(type)` against both already-generated clauses and the
    /// switch's existing fixed clauses. Final order: fixed clauses, then
    /// new concrete clauses in first-seen order, then the original
    /// templates, then `default`.
    pub fn expand(&self, incoming_types: &[Type], oracle: &dyn TypeOracle) -> TypeSwitchStmt {
        let mut concrete: Vec<ConcreteClause> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for fixed in &self.fixed {
            for ty in &fixed.resolved {
                seen.insert(print_type(ty));
            }
        }

        for incoming in incoming_types {
            for template in &self.templates {
                if let Some(binding) = unify(&template.pattern, incoming) {
                    if seen.insert(print_type(incoming)) {
                        let body = substitute_body(&template.body, &binding, oracle);
                        concrete.push(ConcreteClause { ty: incoming.clone(), body });
                    }
                    break;
                }
            }
        }

        let mut clauses = Vec::with_capacity(self.fixed.len() + concrete.len() + self.templates.len());
        for fixed in &self.fixed {
            clauses.push(CaseClause { types: fixed.types.clone(), body: fixed.body.clone() });
        }
        for c in &concrete {
            clauses.push(CaseClause { types: vec![type_to_syntax(&c.ty)], body: c.body.clone() });
        }
        for template in &self.templates {
            clauses.push(CaseClause {
                types: vec![template.pattern_syntax.clone()],
                body: template.body.clone(),
            });
        }

        TypeSwitchStmt { target: self.target_name.clone(), clauses, default: self.default.clone() }
    }
}
