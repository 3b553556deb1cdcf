pub mod bundle;
pub mod item;
pub mod report;
pub mod sale;
pub mod system;

use uuid::Uuid;

use crate::cli::context::CliContext;
use crate::cli::output;
use crate::errors::CliError;

pub type CommandResult = Result<(), CliError>;

type Handler = fn(&mut CliContext, &[&str]) -> CommandResult;

/// One dispatchable shell command.
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    handler: Handler,
}

impl CommandDefinition {
    pub fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: Handler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub fn registry() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(bundle::definitions());
    commands.extend(item::definitions());
    commands.extend(sale::definitions());
    commands.extend(report::definitions());
    commands
}

/// Dispatches one tokenized command line.
pub fn dispatch(context: &mut CliContext, tokens: &[String]) -> CommandResult {
    let Some(name) = tokens.first() else {
        return Ok(());
    };
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
    let commands = registry();
    match commands.iter().find(|c| c.name == name.as_str()) {
        Some(command) => (command.handler)(context, &args),
        None => Err(CliError::Input(format!(
            "unknown command `{}` (try `help`)",
            name
        ))),
    }
}

pub fn print_help() {
    output::section("Commands");
    for command in registry() {
        println!("  {:<28} {}", command.usage, command.description);
    }
}

// Listings are shown 1-based; these resolve user-supplied positions back to
// entity ids.

pub fn resolve_bundle(context: &CliContext, token: &str) -> Result<Uuid, CliError> {
    let index: usize = token
        .parse()
        .map_err(|_| CliError::Input("bundle index must be numeric".into()))?;
    context
        .manager
        .with_current(|inv| {
            inv.bundles
                .get(index.wrapping_sub(1))
                .map(|bundle| bundle.id)
        })?
        .ok_or_else(|| CliError::Input(format!("no bundle at index {}", index)))
}

pub fn resolve_item(context: &CliContext, token: &str) -> Result<Uuid, CliError> {
    let index: usize = token
        .parse()
        .map_err(|_| CliError::Input("item index must be numeric".into()))?;
    context
        .manager
        .with_current(|inv| inv.items.get(index.wrapping_sub(1)).map(|item| item.id))?
        .ok_or_else(|| CliError::Input(format!("no item at index {}", index)))
}

pub fn resolve_sale(context: &CliContext, token: &str) -> Result<Uuid, CliError> {
    let index: usize = token
        .parse()
        .map_err(|_| CliError::Input("sale index must be numeric".into()))?;
    context
        .manager
        .with_current(|inv| {
            inv.daily_sales
                .get(index.wrapping_sub(1))
                .map(|sale| sale.id)
        })?
        .ok_or_else(|| CliError::Input(format!("no sale at index {}", index)))
}
