use super::{resolve_bundle, CommandDefinition, CommandResult};
use crate::cli::context::CliContext;
use crate::cli::format::{format_currency, format_percent};
use crate::cli::output;
use crate::core::services::{BundleService, ReportService};
use crate::domain::{Bundle, BundleCategory};
use crate::errors::CliError;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "bundle",
        "Manage bundles",
        "bundle <add|list|stats|remove>",
        cmd_bundle,
    )]
}

fn cmd_bundle(context: &mut CliContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        Some("add") => add(context, &args[1..]),
        Some("list") => list(context),
        Some("stats") => stats(context, &args[1..]),
        Some("remove") => remove(context, &args[1..]),
        _ => Err(CliError::Input(
            "usage: bundle <add|list|stats|remove>".into(),
        )),
    }
}

fn add(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let [name, category, cost, pieces] = args else {
        return Err(CliError::Input(
            "usage: bundle add <name> <category> <cost> <pieces>".into(),
        ));
    };
    let category = BundleCategory::parse(category).ok_or_else(|| {
        CliError::Input("category must be one of: jackets, hoodies, t-shirts, mixed".into())
    })?;
    let cost: f64 = cost
        .parse()
        .map_err(|_| CliError::Input("cost must be numeric".into()))?;
    let pieces: u32 = pieces
        .parse()
        .map_err(|_| CliError::Input("pieces must be a whole number".into()))?;

    let bundle = Bundle::new(*name, category, cost, pieces);
    context
        .manager
        .with_current_mut(|inv| BundleService::add(inv, bundle))??;
    output::success(format!("Bundle added: {}", name));
    Ok(())
}

fn list(context: &mut CliContext) -> CommandResult {
    context.manager.with_current(|inv| {
        if inv.bundles.is_empty() {
            output::info("No bundles yet");
            return;
        }
        output::section("Bundles");
        for (index, bundle) in inv.bundles.iter().enumerate() {
            println!(
                "  {:>2}. {} [{}] cost {} over {} pcs",
                index + 1,
                bundle.name,
                bundle.category.label(),
                format_currency(bundle.total_cost),
                bundle.total_pieces
            );
        }
    })?;
    Ok(())
}

fn stats(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let token = args
        .first()
        .ok_or_else(|| CliError::Input("usage: bundle stats <index>".into()))?;
    let id = resolve_bundle(context, token)?;
    let (name, stats) = context.manager.with_current(|inv| {
        let name = inv.bundle(id).map(|b| b.name.clone()).unwrap_or_default();
        ReportService::bundle_stats(inv, id).map(|stats| (name, stats))
    })??;

    output::section(&name);
    println!("  sales      {}", format_currency(stats.total_sales));
    println!("  progress   {}", format_percent(stats.progress_percent));
    println!("  unsold     {}", stats.unsold_count);
    if stats.is_breakeven {
        output::success(format!("breakeven passed, profit {}", format_currency(stats.profit)));
    } else {
        output::info(format!(
            "{} to breakeven",
            format_currency(stats.remaining_to_breakeven)
        ));
    }
    Ok(())
}

fn remove(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let token = args
        .first()
        .ok_or_else(|| CliError::Input("usage: bundle remove <index>".into()))?;
    let id = resolve_bundle(context, token)?;
    if !context.confirm("Remove this bundle and all of its items?")? {
        return Ok(());
    }
    let removed = context
        .manager
        .with_current_mut(|inv| BundleService::remove(inv, id))??;
    output::success(format!("Bundle removed: {}", removed.name));
    Ok(())
}
