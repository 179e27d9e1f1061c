mod cli;

fn main() {
    miette::set_panic_hook();

    if let Err(report) = cli::exec() {
        let mut stderr = std::io::stderr().lock();
        tsgen_driver::render_reports_io(&mut stderr, std::slice::from_ref(&report), true);
        std::process::exit(1);
    }
}
