//! The on-disk JSON shape, deliberately kept close to `tsgen_ast`'s own
//! types: a stand-in for a real frontend's IR dump, not a format meant to
//! be hand-written for anything but tests and fixtures.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IrProgram {
    pub packages: Vec<IrPackage>,
    #[serde(default)]
    pub defs: Vec<IrDef>,
    #[serde(default)]
    pub implements: Vec<IrImpl>,
    #[serde(default)]
    pub call_graph: Vec<IrEdge>,
}

#[derive(Debug, Deserialize)]
pub struct IrPackage {
    pub name: String,
    #[serde(default)]
    pub interfaces: Vec<IrInterface>,
    #[serde(default)]
    pub funcs: Vec<IrFunc>,
}

/// A package-level interface declaration. `methods` is always wrapped into a
/// `Type::Interface` when resolved; there is no separate "this is an
/// interface" tag because the method list already implies it.
#[derive(Debug, Deserialize)]
pub struct IrInterface {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<IrMethod>,
}

#[derive(Debug, Deserialize)]
pub struct IrFunc {
    pub name: String,
    #[serde(default)]
    pub params: Vec<IrParam>,
    #[serde(default)]
    pub body: Vec<IrStmt>,
}

#[derive(Debug, Deserialize)]
pub struct IrParam {
    pub name: String,
    pub ty: IrType,
}

/// A flat, program-wide declaration the type oracle's `def_of` answers from.
/// Scoping is not modeled: same simplification as `TypeOracle::def_of`
/// itself, which takes no enclosing-function argument.
#[derive(Debug, Deserialize)]
pub struct IrDef {
    pub name: String,
    pub kind: IrDefKind,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "ty", rename_all = "snake_case")]
pub enum IrDefKind {
    TypeAlias(IrType),
    Value(IrType),
}

/// One `implements` fact: `type_name` and `interface_name` are the fully
/// qualified `Named` strings that `resolve_named` would itself produce, so
/// no further qualification happens when loading this table.
#[derive(Debug, Deserialize)]
pub struct IrImpl {
    pub type_name: String,
    pub interface_name: String,
}

#[derive(Debug, Deserialize)]
pub struct IrEdge {
    pub caller: String,
    pub callee: String,
    #[serde(default)]
    pub site: Option<IrCallSite>,
}

#[derive(Debug, Deserialize)]
pub struct IrCallSite {
    #[serde(default)]
    pub args: Vec<IrArgKind>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "ty", rename_all = "snake_case")]
pub enum IrArgKind {
    InterfaceBox(IrType),
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum IrStmt {
    TypeSwitch(IrTypeSwitch),
    Other(IrNode),
}

#[derive(Debug, Deserialize)]
pub struct IrTypeSwitch {
    pub target: String,
    #[serde(default)]
    pub clauses: Vec<IrCaseClause>,
    #[serde(default)]
    pub default: Option<Vec<IrNode>>,
}

#[derive(Debug, Deserialize)]
pub struct IrCaseClause {
    pub types: Vec<IrType>,
    #[serde(default)]
    pub body: Vec<IrNode>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum IrNode {
    Ident(String),
    Selector { base: Box<IrNode>, field: String },
    Call { callee: Box<IrNode>, args: Vec<IrNode> },
    TypeArg(IrType),
    Block(Vec<IrNode>),
    Opaque(String),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum IrType {
    Ident(String),
    Pointer(Box<IrType>),
    Slice(Box<IrType>),
    Array { len: u64, elem: Box<IrType> },
    Map { key: Box<IrType>, value: Box<IrType> },
    Chan { dir: IrChanDir, elem: Box<IrType> },
    Func {
        #[serde(default)]
        params: Vec<IrType>,
        #[serde(default)]
        results: Vec<IrType>,
        #[serde(default)]
        variadic: bool,
    },
    Struct(Vec<IrField>),
    Interface(Vec<IrMethod>),
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum IrChanDir {
    Send,
    Recv,
    Both,
}

#[derive(Debug, Deserialize)]
pub struct IrField {
    pub name: String,
    pub ty: IrType,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct IrMethod {
    pub name: String,
    pub sig: IrType,
}
