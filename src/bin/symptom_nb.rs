//! symptom-nb CLI binary.

use clap::Parser;
use symptom_nb::cli::{args::*, commands::*};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = SymptomArgs::parse();

    // Map verbosity to a log filter unless RUST_LOG is already set
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", args.log_filter());
        }
    }
    env_logger::init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
