//! Convert SVG outlines to UFO glyphs (.glif).

use clap::Parser;
use svg2glif::cli::CliArgs;
use tracing_subscriber::EnvFilter;

/// Set up logging; `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Print an error with usage hints and exit with a non-zero status.
fn handle_error(error: svg2glif::error::ImportError) -> ! {
    eprintln!();
    eprintln!("Error importing SVG:");
    eprintln!("{:#}", anyhow::Error::new(error));
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

fn main() {
    init_logging();
    let args = CliArgs::parse();
    if let Err(message) = args.validate() {
        eprintln!("{message}");
        std::process::exit(2);
    }
    if let Err(error) = svg2glif::run(&args) {
        handle_error(error);
    }
}
