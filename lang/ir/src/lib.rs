//! Loads a program and its type/call-graph oracles from a JSON IR file,
//! standing in for a real frontend's type checker and points-to analysis.
//! Everything downstream of this crate (`tsgen-transform`, `tsgen-driver`)
//! only ever sees `tsgen_ast::Program` plus the `TypeOracle`/`CallGraphOracle`
//! traits.

mod convert;
mod error;
mod oracle;
mod schema;

#[cfg(any(test, feature = "testutil"))]
pub mod mock;

use std::path::Path;

pub use error::LoadError;
pub use oracle::JsonOracle;

use schema::IrProgram;
use tsgen_ast::{Package, Program};

/// Reads and deserializes `path`, returning the generic `Program` plus the
/// oracle built from the same IR. The two are handed out together because
/// the program's function bodies and the oracle's `defs`/`implements`
/// tables are parsed from the same file and are otherwise meaningless apart.
pub fn load(path: &Path) -> Result<(Program, JsonOracle), LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let ir: IrProgram =
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?;

    let program = Program {
        packages: ir
            .packages
            .iter()
            .map(|pkg| Package {
                name: pkg.name.clone(),
                funcs: pkg.funcs.iter().map(convert::convert_func).collect(),
            })
            .collect(),
    };
    let oracle = JsonOracle::from_ir(&ir);
    Ok((program, oracle))
}
