use std::path::PathBuf;

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
    /// Overwrite the input file instead of writing to standard output
    #[clap(long)]
    write: bool,
    /// Package whose entry point anchors call-graph analysis
    #[clap(long, default_value = "")]
    main: String,
}

pub fn exec(cmd: Args) -> miette::Result<()> {
    let bytes = tsgen_driver::sort_file(&cmd.filepath, &cmd.main)?;
    if cmd.write {
        tsgen_driver::write_file(&cmd.filepath, &bytes)?;
    } else {
        tsgen_driver::write_stdout(&bytes)?;
    }
    Ok(())
}
