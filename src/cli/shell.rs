use std::io::{self, BufRead, Write};

use crate::cli::commands;
use crate::cli::context::{CliContext, CliMode};
use crate::cli::output;
use crate::errors::CliError;

/// Reads command lines from stdin until `exit` or end of input.
///
/// Interactive mode prints a prompt and reopens the last inventory; script
/// mode does neither and is what the integration tests drive.
pub fn run_shell(context: &mut CliContext) -> Result<(), CliError> {
    if context.mode == CliMode::Interactive {
        auto_open_last(context);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while context.running {
        if context.mode == CliMode::Interactive {
            print!("ukay> ");
            let _ = io::stdout().flush();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|err| CliError::Command(err.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens = match shell_words::split(trimmed) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::error(format!("cannot parse line: {}", err));
                continue;
            }
        };
        if let Err(err) = commands::dispatch(context, &tokens) {
            output::error(err);
            // A bad script should stop at the first failure instead of
            // running later commands against unexpected state.
            if context.mode == CliMode::Script {
                return Err(CliError::Command(format!("script aborted at `{}`", trimmed)));
            }
        }
    }
    Ok(())
}

fn auto_open_last(context: &mut CliContext) {
    if context.manager.is_loaded() {
        return;
    }
    let Some(name) = context.config.last_opened_inventory.clone() else {
        return;
    };
    match context.manager.load(&name) {
        Ok(()) => output::info(format!("Reopened inventory: {}", name)),
        Err(err) => {
            tracing::debug!(%err, name, "could not reopen last inventory");
        }
    }
}
