//! Diagram Language Services - Entry Point
//!
//! Lives in the `dgm` facade crate so that linkme registrations of every
//! language front-end are linked into the binary.

// Force-link dgm-providers to ensure linkme registrations are included
extern crate dgm_providers;

use clap::Parser;
use dgm::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
