// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use fix_paths::{app, cli::Args, logger};

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_logger(args.verbose, args.quiet);

    match app::run_with_args(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
