use super::{resolve_bundle, resolve_item, CommandDefinition, CommandResult};
use crate::cli::context::CliContext;
use crate::cli::format::{format_currency, parse_date};
use crate::cli::output;
use crate::core::services::ItemService;
use crate::domain::{Item, ItemCondition, ItemSource};
use crate::errors::CliError;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "item",
        "Manage items",
        "item <add|list|sell|unsell|remove>",
        cmd_item,
    )]
}

fn cmd_item(context: &mut CliContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        Some("add") => add(context, &args[1..]),
        Some("list") => list(context, &args[1..]),
        Some("sell") => sell(context, &args[1..]),
        Some("unsell") => unsell(context, &args[1..]),
        Some("remove") => remove(context, &args[1..]),
        _ => Err(CliError::Input(
            "usage: item <add|list|sell|unsell|remove>".into(),
        )),
    }
}

fn add(context: &mut CliContext, args: &[&str]) -> CommandResult {
    if args.len() < 3 {
        return Err(CliError::Input(
            "usage: item add <bundle-index> <name> <price> [size] [condition] [source]".into(),
        ));
    }
    let bundle_id = resolve_bundle(context, args[0])?;
    let price: f64 = args[2]
        .parse()
        .map_err(|_| CliError::Input("price must be numeric".into()))?;

    let mut item = Item::new(bundle_id, args[1], price);
    if let Some(size) = args.get(3) {
        item = item.with_size(*size);
    }
    if let Some(condition) = args.get(4) {
        let parsed = ItemCondition::parse(condition)
            .ok_or_else(|| CliError::Input(format!("unknown condition `{}`", condition)))?;
        item = item.with_condition(parsed);
    }
    if let Some(source) = args.get(5) {
        let parsed = ItemSource::parse(source)
            .ok_or_else(|| CliError::Input(format!("unknown source `{}`", source)))?;
        item = item.with_source(parsed);
    }

    let name = item.name.clone();
    context
        .manager
        .with_current_mut(|inv| ItemService::add(inv, item))??;
    output::success(format!("Item added: {}", name));
    Ok(())
}

fn list(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let bundle_filter = match args.first() {
        Some(token) => Some(resolve_bundle(context, token)?),
        None => None,
    };
    context.manager.with_current(|inv| {
        let rows: Vec<(usize, &Item)> = inv
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| bundle_filter.map_or(true, |id| item.bundle_id == id))
            .collect();
        if rows.is_empty() {
            output::info("No items to show");
            return;
        }
        output::section("Items");
        for (index, item) in rows {
            let state = match (item.sold_date, item.sold_price) {
                (Some(date), Some(price)) => {
                    format!("sold {} for {}", date, format_currency(price))
                }
                _ => format!("listed at {}", format_currency(item.selling_price)),
            };
            println!(
                "  {:>2}. {} [{}] {} - {}",
                index + 1,
                item.name,
                item.condition.label(),
                item.size,
                state
            );
        }
    })?;
    Ok(())
}

fn sell(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let [index, date, price] = args else {
        return Err(CliError::Input(
            "usage: item sell <index> <date> <price>".into(),
        ));
    };
    let id = resolve_item(context, index)?;
    let date = parse_date(date)
        .ok_or_else(|| CliError::Input("date must look like 2024-03-05".into()))?;
    let price: f64 = price
        .parse()
        .map_err(|_| CliError::Input("price must be numeric".into()))?;
    context
        .manager
        .with_current_mut(|inv| ItemService::mark_sold(inv, id, date, price))??;
    output::success(format!("Item sold for {}", format_currency(price)));
    Ok(())
}

fn unsell(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let token = args
        .first()
        .ok_or_else(|| CliError::Input("usage: item unsell <index>".into()))?;
    let id = resolve_item(context, token)?;
    context
        .manager
        .with_current_mut(|inv| ItemService::mark_available(inv, id))??;
    output::success("Item back to available");
    Ok(())
}

fn remove(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let token = args
        .first()
        .ok_or_else(|| CliError::Input("usage: item remove <index>".into()))?;
    let id = resolve_item(context, token)?;
    if !context.confirm("Remove this item?")? {
        return Ok(());
    }
    let removed = context
        .manager
        .with_current_mut(|inv| ItemService::remove(inv, id))??;
    output::success(format!("Item removed: {}", removed.name));
    Ok(())
}
