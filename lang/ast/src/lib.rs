//! The canonical type model and the generic program AST the rest of
//! `tsgen` operates over: a structural `Type` algebra with template type
//! variables, its unresolved `TypeSyntax` counterpart, and the opaque
//! `Program`/`Node` tree that the transformations crate rewrites in place.

mod node;
mod oracle;
mod parse;
mod program;
mod syntax;
mod ty;
mod var;

pub use node::Node;
pub use oracle::{ArgKind, CallGraphOracle, CallSite, DefKind, Edge, InterfaceDecl, PackageInfo, TypeOracle};
pub use parse::parse;
pub use program::{CaseClause, FuncDecl, Package, Param, Program, Stmt, TypeSwitchStmt};
pub use syntax::{FieldSyntax, MethodSyntax, TypeSyntax};
pub use ty::{print_type, ChanDir, Field, Method, Type};
pub use var::is_type_var_name;
