//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use sitewise_cli::CliError;

fn main() {
    match sitewise_cli::run() {
        Ok(()) => {}
        // Help and version requests are reported by clap with its own exit code.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => report(err),
    }
}

#[expect(clippy::print_stderr, reason = "the binary reports failures on stderr")]
fn report(err: CliError) -> ! {
    let report = eyre::Report::new(err);
    eprintln!("sitewise: {report}");
    for cause in report.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
    std::process::exit(1);
}
