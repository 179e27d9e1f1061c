use crate::ty::Type;

/// What a name resolves to, as reported by the type oracle's `defs`.
/// The substituter consults this to decide whether an identifier in a
/// clause body is the declared local alias for the switch's type-variable
/// parameter, as opposed to an unrelated binding that merely happens to
/// share a variable-shaped name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefKind {
    /// A local type alias, e.g. `type T = any`, together with its declared type.
    TypeAlias(Type),
    /// A value binding (a variable, parameter, constant, ...).
    Value(Type),
}

/// One interface declared somewhere in the loaded program, as reported by
/// the type oracle's `packages`. `ty` is always a `Type::Interface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub ty: Type,
}

/// One package of the loaded program, as reported by the type oracle's
/// `packages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub interfaces: Vec<InterfaceDecl>,
}

/// The type oracle: a capability set the core queries but never depends on
/// the concrete implementation of. `tsgen-ir` implements this against a
/// loaded JSON program; tests implement it against hand-built fixtures.
pub trait TypeOracle {
    /// Resolve a bare (non-variable) identifier to its fully qualified name,
    /// e.g. `"Reader"` used inside package `io` resolves to `"io.Reader"`.
    /// Qualification is preserved exactly as the oracle reports it.
    fn resolve_named(&self, name: &str) -> String;

    /// Every package of the loaded program, for the sorter's interface
    /// enumeration.
    fn packages(&self) -> Vec<PackageInfo>;

    /// Whether ground type `t` implements interface `iface`. Must be sound
    /// for the loaded program.
    fn implements(&self, t: &Type, iface: &Type) -> bool;

    /// What a name declared in scope resolves to, if anything. Used by the
    /// substituter's identifier-resolution rule.
    fn def_of(&self, name: &str) -> Option<DefKind>;
}

/// One call-graph edge's argument, as tagged by the call-graph/points-to
/// oracle: either the boxing of a concrete value into an interface, or
/// anything else. The collector only mines `InterfaceBox` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKind {
    InterfaceBox(Type),
    Other,
}

/// A call site's positional arguments, as reported by the call-graph oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub args: Vec<ArgKind>,
}

/// One in-edge of the call graph. Synthetic edges with no concrete call
/// site (`site: None`) are skipped by the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub site: Option<CallSite>,
    pub caller: String,
    pub callee: String,
}

/// The call-graph/points-to oracle.
pub trait CallGraphOracle {
    /// All in-edges to `func`, i.e. every call site (if any) that invokes it.
    fn in_edges(&self, func: &str) -> Vec<Edge>;
}
