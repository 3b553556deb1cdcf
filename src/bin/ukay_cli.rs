use std::env;
use std::process::ExitCode;

use ukay_core::cli::{run_shell, CliContext, CliMode};
use ukay_core::cli::output;

fn main() -> ExitCode {
    ukay_core::init();

    let mode = if env::var_os("UKAY_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = match CliContext::new(mode) {
        Ok(context) => context,
        Err(err) => {
            output::error(format!("startup failed: {}", err));
            return ExitCode::FAILURE;
        }
    };

    match run_shell(&mut context) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(err);
            ExitCode::FAILURE
        }
    }
}
