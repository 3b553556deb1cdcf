use chrono::NaiveDate;
use uuid::Uuid;

use ukay_core::core::services::{BundleService, ItemService, ReportService, SaleService};
use ukay_core::domain::{Bundle, BundleCategory, Item, ItemStatus};
use ukay_core::inventory::{Inventory, SaleLine};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded() -> (Inventory, Uuid, Vec<Uuid>) {
    let mut inventory = Inventory::new("Suite");
    let bundle_id = BundleService::add(
        &mut inventory,
        Bundle::new("Lot A", BundleCategory::Mixed, 1200.0, 12),
    )
    .unwrap();
    let item_ids = (0..3)
        .map(|n| {
            ItemService::add(
                &mut inventory,
                Item::new(bundle_id, format!("piece {}", n), 500.0),
            )
            .unwrap()
        })
        .collect();
    (inventory, bundle_id, item_ids)
}

#[test]
fn sale_record_then_delete_round_trip() {
    let (mut inventory, _, item_ids) = seeded();
    let day = date(2024, 7, 1);
    let lines: Vec<SaleLine> = item_ids
        .iter()
        .map(|id| SaleLine::at_listed_price(*id))
        .collect();

    let sale_id = SaleService::record(&mut inventory, day, &lines).unwrap();
    for id in &item_ids {
        let item = inventory.item(*id).unwrap();
        assert_eq!(item.status, ItemStatus::Sold);
        assert_eq!(item.sold_date, Some(day));
    }

    SaleService::delete(&mut inventory, sale_id).unwrap();
    for id in &item_ids {
        let item = inventory.item(*id).unwrap();
        assert_eq!(item.status, ItemStatus::Available);
        assert_eq!(item.sold_date, None);
        assert_eq!(item.sold_price, None);
    }
}

#[test]
fn reports_reflect_recorded_sales() {
    let (mut inventory, bundle_id, item_ids) = seeded();
    let day = date(2024, 7, 1);
    SaleService::record(
        &mut inventory,
        day,
        &[
            SaleLine::at_listed_price(item_ids[0]),
            SaleLine::at_listed_price(item_ids[1]),
            SaleLine::at_listed_price(item_ids[2]),
        ],
    )
    .unwrap();

    // 1500 sold against 1200 cost, all on one day.
    let stats = ReportService::bundle_stats(&inventory, bundle_id).unwrap();
    assert!(stats.is_breakeven);
    assert_eq!(stats.profit, 300.0);

    let report = ReportService::daily_report(&inventory, day).unwrap();
    assert_eq!(report.revenue, 1500.0);
    let day_slice = report.per_bundle.get(&bundle_id).unwrap();
    assert_eq!(day_slice.count, 3);

    let dashboard = ReportService::dashboard(&inventory, day).unwrap();
    assert_eq!(dashboard.sold_count, 3);
    assert_eq!(dashboard.breakeven_bundles, 1);
    assert_eq!(dashboard.total_profit, 300.0);
}

#[test]
fn bundle_removal_cascades_through_services() {
    let (mut inventory, bundle_id, item_ids) = seeded();
    let day = date(2024, 7, 1);
    SaleService::record(
        &mut inventory,
        day,
        &[SaleLine::at_listed_price(item_ids[0])],
    )
    .unwrap();

    BundleService::remove(&mut inventory, bundle_id).unwrap();
    assert!(ItemService::list(&inventory).is_empty());
    let sales = SaleService::list(&inventory);
    assert_eq!(sales.len(), 1);
    assert!(sales[0].items.is_empty());
}

#[test]
fn malformed_bundle_is_rejected_before_it_can_poison_reports() {
    let mut inventory = Inventory::new("Suite");
    let err = BundleService::add(
        &mut inventory,
        Bundle::new("Bad lot", BundleCategory::Mixed, 500.0, 0),
    )
    .unwrap_err();
    assert!(err.to_string().contains("piece"));
}
