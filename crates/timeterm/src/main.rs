#![forbid(unsafe_code)]

//! timeterm: an interactive shell under a reserved countdown band.
//!
//! The top two terminal rows show a live countdown and a separator; the
//! rest of the screen is a normal scrolling region running the user's
//! shell. See `timeterm --help` for the surface.

mod cli;
mod error;
mod journal;
mod notify;
mod run;
mod signals;
mod terminal;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    journal::init();
    match run::run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            // The guard has already restored the terminal on any path that
            // captured state before failing.
            eprintln!("timeterm: {err}");
            std::process::exit(error::FATAL_EXIT_CODE);
        }
    }
}
