use super::{print_help, CommandDefinition, CommandResult};
use crate::cli::context::CliContext;
use crate::cli::output;
use crate::errors::CliError;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("new", "Create a new inventory", "new <name>", cmd_new),
        CommandDefinition::new("open", "Open a saved inventory", "open <name>", cmd_open),
        CommandDefinition::new("save", "Save the current inventory", "save", cmd_save),
        CommandDefinition::new(
            "save-as",
            "Save the current inventory under a new name",
            "save-as <name>",
            cmd_save_as,
        ),
        CommandDefinition::new(
            "backup",
            "Snapshot the current inventory",
            "backup [note]",
            cmd_backup,
        ),
        CommandDefinition::new("backups", "List snapshots", "backups", cmd_backups),
        CommandDefinition::new(
            "restore",
            "Load a snapshot over the current inventory",
            "restore <backup-index>",
            cmd_restore,
        ),
        CommandDefinition::new("help", "Show this help", "help", cmd_help),
        CommandDefinition::new("exit", "Leave the shell", "exit", cmd_exit),
    ]
}

fn cmd_new(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let name = args
        .first()
        .ok_or_else(|| CliError::Input("usage: new <name>".into()))?;
    context.manager.create(name);
    context.remember_inventory(name)?;
    output::success(format!("New inventory created: {}", name));
    Ok(())
}

fn cmd_open(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let name = args
        .first()
        .ok_or_else(|| CliError::Input("usage: open <name>".into()))?;
    context.manager.load(name)?;
    context.remember_inventory(name)?;
    output::success(format!("Inventory opened: {}", name));
    Ok(())
}

fn cmd_save(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    context.manager.save()?;
    output::success("Inventory saved");
    Ok(())
}

fn cmd_save_as(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let name = args
        .first()
        .ok_or_else(|| CliError::Input("usage: save-as <name>".into()))?;
    context.manager.save_as(name)?;
    context.remember_inventory(name)?;
    output::success(format!("Inventory saved as {}", name));
    Ok(())
}

fn cmd_backup(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let note = args.first().copied();
    context.manager.backup(note)?;
    output::success("Backup written");
    Ok(())
}

fn cmd_backups(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    let backups = context.manager.list_backups()?;
    if backups.is_empty() {
        output::info("No backups yet");
        return Ok(());
    }
    output::section("Backups");
    for (index, name) in backups.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, name);
    }
    Ok(())
}

fn cmd_restore(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let token = args
        .first()
        .ok_or_else(|| CliError::Input("usage: restore <backup-index>".into()))?;
    let index: usize = token
        .parse()
        .map_err(|_| CliError::Input("backup index must be numeric".into()))?;
    let backups = context.manager.list_backups()?;
    let backup = backups
        .get(index.wrapping_sub(1))
        .ok_or_else(|| CliError::Input(format!("no backup at index {}", index)))?
        .clone();
    if !context.confirm("Replace the current inventory with this snapshot?")? {
        return Ok(());
    }
    context.manager.restore(&backup)?;
    output::success(format!("Restored from {}", backup));
    Ok(())
}

fn cmd_help(_context: &mut CliContext, _args: &[&str]) -> CommandResult {
    print_help();
    Ok(())
}

fn cmd_exit(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    Ok(())
}
