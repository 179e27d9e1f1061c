//! Structural unification, template substitution, the per-switch view that
//! drives expansion, and the popularity sort used outside of expansion.

mod sort;
mod subst;
mod unify;
mod view;

pub use sort::sort;
pub use subst::{substitute_body, substitute_type_syntax, type_to_syntax};
pub use unify::{unify, Binding};
pub use view::{ConcreteClause, TemplateClause, TypeSwitchView};
