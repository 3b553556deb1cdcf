//! Pure breakeven/profit accounting over bundles and their items.
//!
//! Every caller (dashboard, daily report, CLI) goes through these functions;
//! the arithmetic lives nowhere else. Both functions are deterministic, take
//! all inputs explicitly, and never touch the system clock.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{Bundle, BundleDaySales, BundleStats, DailyReport, DashboardSummary, Item};
use crate::errors::{InventoryError, Result};

/// Computes the financial snapshot of one bundle against the item collection.
///
/// Items not belonging to the bundle are ignored, so callers may pass the full
/// inventory. A bundle with `total_cost <= 0` is rejected as malformed rather
/// than letting the progress division produce a non-finite value.
pub fn bundle_stats(bundle: &Bundle, items: &[Item]) -> Result<BundleStats> {
    if bundle.total_cost <= 0.0 {
        return Err(InventoryError::MalformedBundle(format!(
            "bundle `{}` has non-positive cost",
            bundle.name
        )));
    }

    let bundle_items: Vec<&Item> = items.iter().filter(|i| i.bundle_id == bundle.id).collect();

    let total_sales: f64 = bundle_items
        .iter()
        .filter(|i| i.is_sold())
        .map(|i| i.sold_price.unwrap_or(0.0))
        .sum();
    let remaining_to_breakeven = bundle.total_cost - total_sales;
    let is_breakeven = remaining_to_breakeven <= 0.0;
    let profit = if is_breakeven {
        total_sales - bundle.total_cost
    } else {
        0.0
    };
    let unsold_count = bundle_items.iter().filter(|i| i.is_available()).count();
    let progress_percent = ((total_sales / bundle.total_cost) * 100.0).min(100.0);

    Ok(BundleStats {
        total_sales,
        remaining_to_breakeven,
        is_breakeven,
        profit,
        unsold_count,
        progress_percent,
    })
}

/// Computes revenue and attributable profit for one calendar date.
///
/// Profit only accrues to the portion of a sale past its bundle's breakeven
/// point. Three cases per sold item:
/// - the bundle's cumulative revenue through `date` has not exceeded its cost:
///   no profit from this item;
/// - breakeven was already reached before `date`: the item contributes its
///   price minus the per-piece cost (possibly negative);
/// - breakeven falls within `date` itself: the item contributes whatever part
///   of its price exceeds the cost still unrecovered at the start of the day.
///   That remainder is compared per item without decrementing, so same-day
///   items crossing breakeven are each credited against the full remainder.
pub fn daily_report(date: NaiveDate, bundles: &[Bundle], items: &[Item]) -> Result<DailyReport> {
    let day_sales: Vec<&Item> = items
        .iter()
        .filter(|i| i.is_sold() && i.sold_date == Some(date))
        .collect();

    let revenue: f64 = day_sales.iter().map(|i| i.sold_price.unwrap_or(0.0)).sum();

    let mut profit = 0.0;
    let mut per_bundle: BTreeMap<_, BundleDaySales> = BTreeMap::new();

    for item in &day_sales {
        let Some(bundle) = bundles.iter().find(|b| b.id == item.bundle_id) else {
            continue;
        };
        let sold_price = item.sold_price.unwrap_or(0.0);

        let slot = per_bundle.entry(bundle.id).or_default();
        slot.revenue += sold_price;
        slot.count += 1;

        let revenue_to_date: f64 = items
            .iter()
            .filter(|i| {
                i.bundle_id == bundle.id
                    && i.is_sold()
                    && i.sold_date.is_some_and(|d| d <= date)
            })
            .map(|i| i.sold_price.unwrap_or(0.0))
            .sum();
        if revenue_to_date <= bundle.total_cost {
            continue;
        }

        let cost_per_item = bundle.cost_per_piece()?;
        let revenue_before: f64 = items
            .iter()
            .filter(|i| {
                i.bundle_id == bundle.id
                    && i.is_sold()
                    && i.sold_date.is_some_and(|d| d < date)
            })
            .map(|i| i.sold_price.unwrap_or(0.0))
            .sum();

        if revenue_before >= bundle.total_cost {
            profit += sold_price - cost_per_item;
        } else {
            let remaining_cost = bundle.total_cost - revenue_before;
            if sold_price > remaining_cost {
                profit += sold_price - remaining_cost;
            }
        }
    }

    Ok(DailyReport {
        date,
        items: day_sales.iter().map(|i| i.id).collect(),
        revenue,
        profit,
        per_bundle,
    })
}

/// Rolls the whole inventory up into the dashboard view for `today`.
pub fn dashboard_summary(
    today: NaiveDate,
    bundles: &[Bundle],
    items: &[Item],
) -> Result<DashboardSummary> {
    let report = daily_report(today, bundles, items)?;

    let mut breakeven_bundles = 0;
    let mut total_profit = 0.0;
    for bundle in bundles {
        let stats = bundle_stats(bundle, items)?;
        if stats.is_breakeven {
            breakeven_bundles += 1;
            total_profit += stats.profit;
        }
    }

    Ok(DashboardSummary {
        bundle_count: bundles.len(),
        item_count: items.len(),
        available_count: items.iter().filter(|i| i.is_available()).count(),
        sold_count: items.iter().filter(|i| i.is_sold()).count(),
        today_revenue: report.revenue,
        today_profit: report.profit,
        breakeven_bundles,
        total_profit,
    })
}
