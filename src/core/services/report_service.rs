use chrono::NaiveDate;
use uuid::Uuid;

use crate::accounting;
use crate::domain::{BundleStats, DailyReport, DashboardSummary};
use crate::inventory::Inventory;

use super::{ServiceError, ServiceResult};

/// Uniform entry point to the accounting engine for every caller. Dashboard,
/// daily view, and CLI all come through here rather than re-deriving stats.
pub struct ReportService;

impl ReportService {
    pub fn bundle_stats(inventory: &Inventory, bundle_id: Uuid) -> ServiceResult<BundleStats> {
        let bundle = inventory
            .bundle(bundle_id)
            .ok_or_else(|| ServiceError::Invalid("Bundle not found".into()))?;
        accounting::bundle_stats(bundle, &inventory.items).map_err(ServiceError::from)
    }

    /// Stats for every bundle, in inventory order.
    pub fn all_bundle_stats(inventory: &Inventory) -> ServiceResult<Vec<(Uuid, BundleStats)>> {
        inventory
            .bundles
            .iter()
            .map(|bundle| {
                accounting::bundle_stats(bundle, &inventory.items)
                    .map(|stats| (bundle.id, stats))
                    .map_err(ServiceError::from)
            })
            .collect()
    }

    pub fn daily_report(inventory: &Inventory, date: NaiveDate) -> ServiceResult<DailyReport> {
        accounting::daily_report(date, &inventory.bundles, &inventory.items)
            .map_err(ServiceError::from)
    }

    pub fn dashboard(inventory: &Inventory, today: NaiveDate) -> ServiceResult<DashboardSummary> {
        accounting::dashboard_summary(today, &inventory.bundles, &inventory.items)
            .map_err(ServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bundle, BundleCategory, Item};
    use crate::inventory::SaleLine;

    #[test]
    fn reports_flow_from_recorded_sales() {
        let mut inventory = Inventory::new("Shop");
        let bundle_id =
            inventory.add_bundle(Bundle::new("Lot", BundleCategory::Mixed, 600.0, 6));
        let item_ids: Vec<Uuid> = (0..3)
            .map(|n| {
                inventory
                    .add_item(Item::new(bundle_id, format!("piece {}", n), 400.0))
                    .unwrap()
            })
            .collect();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        inventory
            .record_daily_sale(
                day,
                &[
                    SaleLine::at_listed_price(item_ids[0]),
                    SaleLine::at_listed_price(item_ids[1]),
                ],
            )
            .unwrap();

        let stats = ReportService::bundle_stats(&inventory, bundle_id).unwrap();
        assert!(stats.is_breakeven);
        assert_eq!(stats.profit, 200.0);
        assert_eq!(stats.unsold_count, 1);

        let report = ReportService::daily_report(&inventory, day).unwrap();
        assert_eq!(report.revenue, 800.0);

        let dashboard = ReportService::dashboard(&inventory, day).unwrap();
        assert_eq!(dashboard.breakeven_bundles, 1);
        assert_eq!(dashboard.today_revenue, 800.0);
    }

    #[test]
    fn unknown_bundle_is_invalid() {
        let inventory = Inventory::new("Shop");
        let err = ReportService::bundle_stats(&inventory, Uuid::new_v4())
            .expect_err("unknown bundle must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }
}
