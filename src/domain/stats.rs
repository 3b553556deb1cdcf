use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Financial snapshot of a single bundle. Derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleStats {
    pub total_sales: f64,
    /// Cost still to recover; negative once breakeven is passed.
    pub remaining_to_breakeven: f64,
    pub is_breakeven: bool,
    /// Zero until breakeven; pre-breakeven shortfall shows only in
    /// `remaining_to_breakeven`.
    pub profit: f64,
    pub unsold_count: usize,
    /// Sales progress toward the acquisition cost, capped at 100.
    pub progress_percent: f64,
}

/// Per-bundle slice of one day's sales.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BundleDaySales {
    pub revenue: f64,
    pub count: usize,
}

/// Revenue and attributable profit for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    /// Items sold on the date, in encountered order.
    pub items: Vec<Uuid>,
    pub revenue: f64,
    /// Only the portion of each sale past its bundle's breakeven point.
    pub profit: f64,
    pub per_bundle: BTreeMap<Uuid, BundleDaySales>,
}

/// Aggregate view across the whole inventory, as rendered on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub bundle_count: usize,
    pub item_count: usize,
    pub available_count: usize,
    pub sold_count: usize,
    pub today_revenue: f64,
    pub today_profit: f64,
    pub breakeven_bundles: usize,
    /// Sum of per-bundle profit over bundles that have reached breakeven.
    pub total_profit: f64,
}
