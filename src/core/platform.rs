//! Process-level entry points: argument parsing and error exit

/// Print an error with its full cause chain to stderr and exit with code 1.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error: {error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse the command line. Usage errors exit with clap's message and a
/// non-zero status.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
