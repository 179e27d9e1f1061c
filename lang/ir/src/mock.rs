//! Hand-built oracle and program fixtures for tests outside this crate
//! (`tsgen-driver`, `tsgen-transform` integration-style tests). Gated behind
//! `testutil` so it never ships in the `tsgen` binary.

use std::collections::{HashMap, HashSet};

use tsgen_ast::{ArgKind, CallGraphOracle, CallSite, DefKind, Edge, InterfaceDecl, PackageInfo, Type, TypeOracle};

/// An in-memory oracle built by hand rather than loaded from JSON, for
/// tests that want fixtures without a JSON file on disk.
#[derive(Default)]
pub struct MockOracle {
    interfaces: Vec<InterfaceDecl>,
    implements: HashSet<(String, String)>,
    defs: HashMap<String, DefKind>,
    edges: HashMap<String, Vec<Edge>>,
}

impl MockOracle {
    pub fn new() -> MockOracle {
        MockOracle::default()
    }

    pub fn with_interface(mut self, name: &str, ty: Type) -> MockOracle {
        self.interfaces.push(InterfaceDecl { name: name.to_string(), ty });
        self
    }

    pub fn with_implements(mut self, type_name: &str, interface_name: &str) -> MockOracle {
        self.implements.insert((type_name.to_string(), interface_name.to_string()));
        self
    }

    pub fn with_def(mut self, name: &str, kind: DefKind) -> MockOracle {
        self.defs.insert(name.to_string(), kind);
        self
    }

    /// Registers one in-edge to `callee` carrying `args` as a single call
    /// site, so `CallGraphOracle::in_edges` finds it.
    pub fn with_call(mut self, caller: &str, callee: &str, args: Vec<ArgKind>) -> MockOracle {
        self.edges.entry(callee.to_string()).or_default().push(Edge {
            site: Some(CallSite { args }),
            caller: caller.to_string(),
            callee: callee.to_string(),
        });
        self
    }
}

impl TypeOracle for MockOracle {
    fn resolve_named(&self, name: &str) -> String {
        name.to_string()
    }

    fn packages(&self) -> Vec<PackageInfo> {
        vec![PackageInfo { name: "mock".to_string(), interfaces: self.interfaces.clone() }]
    }

    fn implements(&self, t: &Type, iface: &Type) -> bool {
        let (Type::Named(t), Type::Named(iface)) = (t, iface) else { return false };
        self.implements.contains(&(t.clone(), iface.clone()))
    }

    fn def_of(&self, name: &str) -> Option<DefKind> {
        self.defs.get(name).cloned()
    }
}

impl CallGraphOracle for MockOracle {
    fn in_edges(&self, func: &str) -> Vec<Edge> {
        self.edges.get(func).cloned().unwrap_or_default()
    }
}
