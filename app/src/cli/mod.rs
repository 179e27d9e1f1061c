use clap::{Parser, Subcommand};

mod expand;
mod sort;

/// Parses arguments, sets up logging, and dispatches to the chosen mode.
/// Invocation shape: `tsgen [options] <mode> <file>`.
pub fn exec() -> miette::Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    builder.format_timestamp(None).format_level(false).format_target(false);
    builder.filter_level(if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info });
    builder.init();

    match cli.command {
        Command::Expand(args) => expand::exec(args),
        Command::Sort(args) => sort::exec(args),
    }
}

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Enable diagnostic tracing on standard error; does not affect output.
    #[clap(long, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Expand template type-switch clauses against observed call-site types
    Expand(expand::Args),
    /// Reorder a file's type-switch clauses by interface popularity
    Sort(sort::Args),
}
