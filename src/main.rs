use clap::Parser;
use slg2png::cli::{run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("slg2png: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
