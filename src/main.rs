use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use c4docdrift::cli::Args;

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    match c4docdrift::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(3);
        }
    }
}
