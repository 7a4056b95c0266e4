use std::env;
use std::process::ExitCode;

use log::debug;

use shelf_cli::cli::build_cli;
use shelf_cli::program::backend::CrosstermBackend;
use shelf_cli::program::Program;
use shelf_core::error::Result;

fn execute() -> Result<()> {
    let cli = build_cli();

    let matches = match cli.try_get_matches_from(env::args_os()) {
        Ok(matches) => matches,
        Err(e) => e.exit(),
    };
    debug!("Parsed command line: {:?}", matches);

    let mut program = Program::new(CrosstermBackend::new());
    cli.dispatch(&matches, &mut program)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
