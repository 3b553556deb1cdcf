use chrono::Local;

use super::{CommandDefinition, CommandResult};
use crate::cli::context::CliContext;
use crate::cli::format::{format_currency, format_percent, parse_date};
use crate::cli::output;
use crate::core::services::ReportService;
use crate::errors::CliError;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "report",
            "Revenue and profit for one date",
            "report <date>",
            cmd_report,
        ),
        CommandDefinition::new(
            "dashboard",
            "Whole-inventory overview",
            "dashboard [date]",
            cmd_dashboard,
        ),
    ]
}

fn cmd_report(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let token = args
        .first()
        .ok_or_else(|| CliError::Input("usage: report <date>".into()))?;
    let date = parse_date(token)
        .ok_or_else(|| CliError::Input("date must look like 2024-03-05".into()))?;

    let report = context
        .manager
        .with_current(|inv| ReportService::daily_report(inv, date))??;

    output::section(format!("Sales for {}", report.date));
    println!("  items sold {}", report.items.len());
    println!("  revenue    {}", format_currency(report.revenue));
    println!("  profit     {}", format_currency(report.profit));
    if !report.per_bundle.is_empty() {
        let names = context.manager.with_current(|inv| {
            report
                .per_bundle
                .iter()
                .map(|(id, day)| {
                    let name = inv
                        .bundle(*id)
                        .map(|b| b.name.clone())
                        .unwrap_or_else(|| "Unknown bundle".into());
                    (name, *day)
                })
                .collect::<Vec<_>>()
        })?;
        for (name, day) in names {
            println!(
                "    {} - {} items, {}",
                name,
                day.count,
                format_currency(day.revenue)
            );
        }
    }
    Ok(())
}

fn cmd_dashboard(context: &mut CliContext, args: &[&str]) -> CommandResult {
    // The engine never defaults the date; today is resolved here at the edge.
    let today = match args.first() {
        Some(token) => parse_date(token)
            .ok_or_else(|| CliError::Input("date must look like 2024-03-05".into()))?,
        None => Local::now().date_naive(),
    };

    let summary = context
        .manager
        .with_current(|inv| ReportService::dashboard(inv, today))??;
    let stats = context
        .manager
        .with_current(|inv| {
            ReportService::all_bundle_stats(inv).map(|rows| {
                rows.into_iter()
                    .filter_map(|(id, stats)| {
                        inv.bundle(id).map(|b| (b.name.clone(), stats))
                    })
                    .collect::<Vec<_>>()
            })
        })??;

    output::section("Dashboard");
    println!(
        "  bundles    {} ({} breakeven)",
        summary.bundle_count, summary.breakeven_bundles
    );
    println!(
        "  items      {} ({} available, {} sold)",
        summary.item_count, summary.available_count, summary.sold_count
    );
    println!("  today      {} revenue, {} profit",
        format_currency(summary.today_revenue),
        format_currency(summary.today_profit)
    );
    println!("  profit     {}", format_currency(summary.total_profit));
    for (name, stats) in stats {
        let tail = if stats.is_breakeven {
            format!("profit {}", format_currency(stats.profit))
        } else {
            format!(
                "{} to breakeven",
                format_currency(stats.remaining_to_breakeven)
            )
        };
        println!(
            "    {} - {} sales, {}, {}",
            name,
            format_currency(stats.total_sales),
            format_percent(stats.progress_percent),
            tail
        );
    }
    Ok(())
}
