use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// The umbrella error type returned by the driver's entry points. Each
/// variant forwards transparently to the leaf error it wraps: one `#[from]`
/// arm per pipeline stage, rendered identically regardless of which stage
/// failed.
#[derive(Error, Diagnostic, Debug)]
#[diagnostic(transparent)]
#[error(transparent)]
pub enum Error {
    Load(#[from] tsgen_ir::LoadError),
    Analysis(#[from] AnalysisError),
    Write(#[from] WriteError),
}

/// Failures specific to the expand analysis itself, as opposed to loading
/// the input or writing the output. Irrelevant to `sort`, which needs no
/// call graph.
#[derive(Error, Diagnostic, Debug)]
pub enum AnalysisError {
    #[error("the loaded program declares no functions, so call-graph analysis has no entry point")]
    NoEntryPoint,
}

/// Failures writing the formatted program back out.
#[derive(Error, Diagnostic, Debug)]
pub enum WriteError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
