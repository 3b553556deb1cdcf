pub mod commands;
pub mod context;
pub mod format;
pub mod output;
pub mod shell;

pub use context::{CliContext, CliMode};
pub use shell::run_shell;
