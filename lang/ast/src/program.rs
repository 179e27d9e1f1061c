use crate::node::Node;
use crate::syntax::TypeSyntax;

/// One parameter of a function declaration, already flattened left-to-right
/// (grouped parameter names are expanded before this model ever sees them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeSyntax,
}

/// One case clause of a type switch, excluding `default` (held out
/// separately on `TypeSwitchStmt`, mirroring how the sorter treats the
/// nil-type case). A template clause has exactly one type and that type
/// contains a `Var`; a fixed clause may list one or more concrete types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseClause {
    pub types: Vec<TypeSyntax>,
    pub body: Vec<Node>,
}

/// `switch x := v.(type) { ... }` over a single identifier target
/// (`TypeSwitchView::from_statement` rejects anything else).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSwitchStmt {
    pub target: String,
    pub clauses: Vec<CaseClause>,
    pub default: Option<Vec<Node>>,
}

/// One top-level statement of a function body. The expander driver only
/// scans this top-level list, never descending into nested control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    TypeSwitch(TypeSwitchStmt),
    Other(Node),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub funcs: Vec<FuncDecl>,
}

/// The whole loaded program, the oracle-reported AST the core operates
/// over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub packages: Vec<Package>,
}

impl Program {
    pub fn functions(&self) -> impl Iterator<Item = (&Package, &FuncDecl)> {
        self.packages.iter().flat_map(|pkg| pkg.funcs.iter().map(move |f| (pkg, f)))
    }

    pub fn find_function(&self, name: &str) -> Option<&FuncDecl> {
        self.functions().map(|(_, f)| f).find(|f| f.name == name)
    }
}
