use std::collections::{HashMap, HashSet};

use tsgen_ast::{ArgKind, CallGraphOracle, CallSite, DefKind, Edge, InterfaceDecl, PackageInfo, Type, TypeOracle};

use crate::schema::{IrArgKind, IrDefKind, IrProgram};

/// The type and call-graph oracle built from one loaded IR file: stands in
/// for a real frontend's type checker and points-to analysis.
///
/// Name resolution is global and flat, matching `TypeOracle::def_of` and
/// `resolve_named`'s own signatures (neither takes an enclosing scope): the
/// first package to declare a given short name wins ties.
pub struct JsonOracle {
    resolve_map: HashMap<String, String>,
    packages: Vec<PackageInfo>,
    implements: HashSet<(String, String)>,
    defs: HashMap<String, DefKind>,
    edges: HashMap<String, Vec<Edge>>,
}

/// Bootstrap view used only while resolving interface method signatures:
/// `parse` needs a `TypeOracle` but only ever calls `resolve_named` for a
/// `JsonOracle` under construction.
struct ResolveOnly<'a>(&'a HashMap<String, String>);

impl TypeOracle for ResolveOnly<'_> {
    fn resolve_named(&self, name: &str) -> String {
        self.0.get(name).cloned().unwrap_or_else(|| name.to_string())
    }
    fn packages(&self) -> Vec<PackageInfo> {
        Vec::new()
    }
    fn implements(&self, _t: &Type, _iface: &Type) -> bool {
        false
    }
    fn def_of(&self, _name: &str) -> Option<DefKind> {
        None
    }
}

impl JsonOracle {
    pub fn from_ir(ir: &IrProgram) -> JsonOracle {
        let mut resolve_map = HashMap::new();
        for pkg in &ir.packages {
            for iface in &pkg.interfaces {
                resolve_map
                    .entry(iface.name.clone())
                    .or_insert_with(|| format!("{}.{}", pkg.name, iface.name));
            }
        }

        let bootstrap = ResolveOnly(&resolve_map);
        let packages = ir
            .packages
            .iter()
            .map(|pkg| PackageInfo {
                name: pkg.name.clone(),
                interfaces: pkg
                    .interfaces
                    .iter()
                    .map(|iface| {
                        let qualified = resolve_map
                            .get(&iface.name)
                            .cloned()
                            .unwrap_or_else(|| format!("{}.{}", pkg.name, iface.name));
                        let methods = iface.methods.iter().map(|m| tsgen_ast::Method {
                            name: m.name.clone(),
                            sig: tsgen_ast::parse(&(&m.sig).into(), &bootstrap),
                        });
                        InterfaceDecl { name: qualified, ty: Type::Interface(methods.collect()) }
                    })
                    .collect(),
            })
            .collect();

        let implements = ir
            .implements
            .iter()
            .map(|i| (i.type_name.clone(), i.interface_name.clone()))
            .collect();

        let defs = ir
            .defs
            .iter()
            .map(|d| {
                let kind = match &d.kind {
                    IrDefKind::TypeAlias(ty) => {
                        DefKind::TypeAlias(tsgen_ast::parse(&ty.into(), &bootstrap))
                    }
                    IrDefKind::Value(ty) => DefKind::Value(tsgen_ast::parse(&ty.into(), &bootstrap)),
                };
                (d.name.clone(), kind)
            })
            .collect();

        let mut edges: HashMap<String, Vec<Edge>> = HashMap::new();
        for e in &ir.call_graph {
            let site = e.site.as_ref().map(|s| CallSite {
                args: s
                    .args
                    .iter()
                    .map(|a| match a {
                        IrArgKind::InterfaceBox(ty) => ArgKind::InterfaceBox(tsgen_ast::parse(&ty.into(), &bootstrap)),
                        IrArgKind::Other => ArgKind::Other,
                    })
                    .collect(),
            });
            edges.entry(e.callee.clone()).or_default().push(Edge {
                site,
                caller: e.caller.clone(),
                callee: e.callee.clone(),
            });
        }

        JsonOracle { resolve_map, packages, implements, defs, edges }
    }
}

impl TypeOracle for JsonOracle {
    fn resolve_named(&self, name: &str) -> String {
        self.resolve_map.get(name).cloned().unwrap_or_else(|| name.to_string())
    }

    fn packages(&self) -> Vec<PackageInfo> {
        self.packages.clone()
    }

    fn implements(&self, t: &Type, iface: &Type) -> bool {
        let (Type::Named(t), Type::Named(iface)) = (t, iface) else { return false };
        self.implements.contains(&(t.clone(), iface.clone()))
    }

    fn def_of(&self, name: &str) -> Option<DefKind> {
        self.defs.get(name).cloned()
    }
}

impl CallGraphOracle for JsonOracle {
    fn in_edges(&self, func: &str) -> Vec<Edge> {
        self.edges.get(func).cloned().unwrap_or_default()
    }
}
