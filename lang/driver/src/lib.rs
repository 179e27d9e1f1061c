//! Ties the call-site collector and expander driver to a loaded
//! `tsgen-ir` program, and drives the popularity sorter over every switch
//! of a file. This is the crate `tsgen`'s CLI binary calls into directly.

mod collector;
mod errors;
mod expander;
mod io;
mod render_reports;

use std::path::Path;

use tsgen_ast::{Stmt, TypeSwitchStmt};

pub use errors::{AnalysisError, Error, WriteError};
pub use io::{write_file, write_output, write_stdout};
pub use render_reports::{render_reports, render_reports_io, render_reports_to_string};

/// Loads the JSON IR at `path` into a program and its oracles. `main` is
/// accepted for CLI compatibility but does not otherwise affect loading:
/// the call graph the JSON IR carries is already the output of whatever
/// entry-point analysis produced it.
pub fn load_program(path: &Path, _main: &str) -> Result<(tsgen_ast::Program, tsgen_ir::JsonOracle), Error> {
    let (program, oracle) = tsgen_ir::load(path)?;
    Ok((program, oracle))
}

/// Runs the expander over every function of the loaded program and
/// returns the formatted result. Fatal if the program declares no
/// functions at all, since call-graph analysis then has no entry point.
pub fn expand_file(path: &Path, main: &str) -> Result<Vec<u8>, Error> {
    let (mut program, oracle) = load_program(path, main)?;
    if program.functions().next().is_none() {
        return Err(AnalysisError::NoEntryPoint.into());
    }
    expander::expand_program(&mut program, &oracle);
    Ok(tsgen_printer::format(&program))
}

/// Runs the popularity sorter over every type-switch statement in every
/// function of the loaded program and returns the formatted result.
pub fn sort_file(path: &Path, main: &str) -> Result<Vec<u8>, Error> {
    let (mut program, oracle) = load_program(path, main)?;
    for pkg in &mut program.packages {
        for func in &mut pkg.funcs {
            for stmt in &mut func.body {
                if let Stmt::TypeSwitch(switch) = stmt {
                    sort_switch(switch, &oracle);
                }
            }
        }
    }
    Ok(tsgen_printer::format(&program))
}

// Source position metadata (the last step of the sorter's contract) has no
// counterpart on this crate's CaseClause/TypeSwitchStmt: the generic program
// model never carries any, so there is nothing left to strip by the time
// tsgen_transform::sort returns.
fn sort_switch(switch: &mut TypeSwitchStmt, oracle: &tsgen_ir::JsonOracle) {
    tsgen_transform::sort(switch, oracle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn expand_file_end_to_end_against_a_json_fixture() {
        let fixture = write_fixture(
            r#"{
                "packages": [{
                    "name": "demo",
                    "funcs": [{
                        "name": "Handle",
                        "params": [{"name": "v", "ty": {"kind": "interface", "data": []}}],
                        "body": [{
                            "kind": "type_switch",
                            "data": {
                                "target": "v",
                                "clauses": [{
                                    "types": [{"kind": "pointer", "data": {"kind": "ident", "data": "T"}}],
                                    "body": []
                                }],
                                "default": null
                            }
                        }]
                    }]
                }],
                "defs": [{"name": "v", "kind": {"kind": "value", "ty": {"kind": "interface", "data": []}}}],
                "call_graph": [{
                    "caller": "Caller",
                    "callee": "Handle",
                    "site": {"args": [{"kind": "interface_box", "ty": {"kind": "pointer", "data": {"kind": "ident", "data": "int"}}}]}
                }]
            }"#,
        );

        let bytes = expand_file(fixture.path(), "").unwrap();
        let rendered = String::from_utf8(bytes).unwrap();
        assert!(rendered.contains("case *int:"));
        assert!(rendered.contains("case *T:"));
    }

    #[test]
    fn load_program_surfaces_a_load_error_for_malformed_json() {
        let fixture = write_fixture("not json");
        let result = load_program(fixture.path(), "");
        assert!(result.is_err());
    }

    #[test]
    fn expand_file_rejects_a_program_with_no_functions() {
        let fixture = write_fixture(r#"{"packages": [{"name": "demo", "funcs": []}]}"#);
        let result = expand_file(fixture.path(), "");
        assert!(matches!(result, Err(Error::Analysis(AnalysisError::NoEntryPoint))));
    }
}
