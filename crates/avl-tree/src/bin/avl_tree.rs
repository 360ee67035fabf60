//! `avl-tree`: run a tree command script from stdin (or `--script <path>`).
//!
//! Usage:
//!   avl-tree [--quiet] [--check] [--script <path>]
//!
//! Log verbosity is taken from `RUST_LOG` (default `warn`); logs go to stderr.

use avl_tree::cli::{run_script, CliError, Options, Session};
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let options = Options::parse(std::env::args().skip(1))?;
    let script = options.script.clone();
    let mut session = Session::new(options);
    let stdout = io::stdout().lock();

    match script {
        Some(path) => run_script(&mut session, BufReader::new(File::open(path)?), stdout),
        None => run_script(&mut session, io::stdin().lock(), stdout),
    }
}
