use super::{resolve_item, resolve_sale, CommandDefinition, CommandResult};
use crate::cli::context::CliContext;
use crate::cli::format::{format_currency, parse_date};
use crate::cli::output;
use crate::core::services::SaleService;
use crate::inventory::SaleLine;
use crate::errors::CliError;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "sale",
        "Record or reverse daily sales",
        "sale <record|delete|list>",
        cmd_sale,
    )]
}

fn cmd_sale(context: &mut CliContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        Some("record") => record(context, &args[1..]),
        Some("delete") => delete(context, &args[1..]),
        Some("list") => list(context, &args[1..]),
        _ => Err(CliError::Input("usage: sale <record|delete|list>".into())),
    }
}

/// `sale record <date> <item-index>[:price]...` — every listed item flips to
/// Sold and one sale record lands, or nothing changes at all.
fn record(context: &mut CliContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CliError::Input(
            "usage: sale record <date> <item-index>[:price]...".into(),
        ));
    }
    let date = parse_date(args[0])
        .ok_or_else(|| CliError::Input("date must look like 2024-03-05".into()))?;

    let mut lines = Vec::with_capacity(args.len() - 1);
    for token in &args[1..] {
        let (index, price) = match token.split_once(':') {
            Some((index, price)) => {
                let price: f64 = price
                    .parse()
                    .map_err(|_| CliError::Input(format!("bad price in `{}`", token)))?;
                (index, Some(price))
            }
            None => (*token, None),
        };
        let id = resolve_item(context, index)?;
        lines.push(SaleLine {
            item_id: id,
            sold_price: price,
        });
    }

    context
        .manager
        .with_current_mut(|inv| SaleService::record(inv, date, &lines))??;
    output::success(format!("Sale recorded for {} ({} items)", date, lines.len()));
    Ok(())
}

fn delete(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let token = args
        .first()
        .ok_or_else(|| CliError::Input("usage: sale delete <index>".into()))?;
    let id = resolve_sale(context, token)?;
    if !context.confirm("Delete this sale and restore its items?")? {
        return Ok(());
    }
    let removed = context
        .manager
        .with_current_mut(|inv| SaleService::delete(inv, id))??;
    output::success(format!(
        "Sale deleted; {} items back to available",
        removed.items.len()
    ));
    Ok(())
}

fn list(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let date_filter = match args.first() {
        Some(token) => Some(
            parse_date(token)
                .ok_or_else(|| CliError::Input("date must look like 2024-03-05".into()))?,
        ),
        None => None,
    };
    context.manager.with_current(|inv| {
        let sales = match date_filter {
            Some(date) => SaleService::list_for_date(inv, date),
            None => SaleService::list(inv),
        };
        if sales.is_empty() {
            output::info("No sales to show");
            return;
        }
        output::section("Daily sales");
        for sale in sales {
            let position = inv
                .daily_sales
                .iter()
                .position(|s| s.id == sale.id)
                .map(|p| p + 1)
                .unwrap_or(0);
            println!(
                "  {:>2}. {} - {} items, {}",
                position,
                sale.date,
                sale.items.len(),
                format_currency(sale.total_revenue)
            );
        }
    })?;
    Ok(())
}
