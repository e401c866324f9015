// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use linetally::{Args, logging, run};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
