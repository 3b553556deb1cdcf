use chrono::NaiveDate;
use ukay_core::accounting::{bundle_stats, daily_report};
use ukay_core::domain::{Bundle, BundleCategory, Item};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sold(bundle: &Bundle, price: f64, on: NaiveDate) -> Item {
    let mut item = Item::new(bundle.id, "piece", price);
    item.mark_sold(on, price);
    item
}

#[test]
fn breakeven_scenario_from_ledger_notes() {
    // 6000 over 20 pieces, ten pieces out at 700.
    let bundle = Bundle::new("Jacket lot", BundleCategory::Jackets, 6000.0, 20);
    let day = date(2024, 1, 10);
    let items: Vec<Item> = (0..10).map(|_| sold(&bundle, 700.0, day)).collect();

    let stats = bundle_stats(&bundle, &items).unwrap();
    assert!(stats.is_breakeven);
    assert_eq!(stats.profit, 1000.0);
    assert_eq!(stats.remaining_to_breakeven, -1000.0);
    assert_eq!(stats.progress_percent, 100.0);
}

#[test]
fn partial_progress_scenario() {
    let bundle = Bundle::new("Jacket lot", BundleCategory::Jackets, 6000.0, 20);
    let day = date(2024, 1, 10);
    let items: Vec<Item> = (0..5).map(|_| sold(&bundle, 500.0, day)).collect();

    let stats = bundle_stats(&bundle, &items).unwrap();
    assert!(!stats.is_breakeven);
    assert_eq!(stats.remaining_to_breakeven, 3500.0);
    assert!((stats.progress_percent - 2500.0 / 6000.0 * 100.0).abs() < 1e-9);
}

#[test]
fn breakeven_day_attribution_scenario() {
    let bundle = Bundle::new("Hoodie lot", BundleCategory::Hoodies, 1000.0, 10);
    let items = vec![
        sold(&bundle, 600.0, date(2024, 1, 1)),
        sold(&bundle, 700.0, date(2024, 1, 2)),
    ];
    let report = daily_report(date(2024, 1, 2), std::slice::from_ref(&bundle), &items).unwrap();
    assert_eq!(report.revenue, 700.0);
    assert_eq!(report.profit, 300.0);
}

#[test]
fn breakeven_iff_sales_reach_cost() {
    // Sweep sale totals across the cost boundary.
    let bundle = Bundle::new("Lot", BundleCategory::Mixed, 900.0, 9);
    let day = date(2024, 1, 5);
    for sold_count in 0..6 {
        let items: Vec<Item> = (0..sold_count).map(|_| sold(&bundle, 300.0, day)).collect();
        let stats = bundle_stats(&bundle, &items).unwrap();
        let total: f64 = 300.0 * sold_count as f64;
        assert_eq!(stats.is_breakeven, total >= 900.0, "at {} sold", sold_count);
        assert!(stats.profit >= 0.0);
        if stats.is_breakeven {
            assert_eq!(stats.profit, total - 900.0);
        } else {
            assert_eq!(stats.profit, 0.0);
        }
        assert!(stats.progress_percent >= 0.0 && stats.progress_percent <= 100.0);
    }
}

#[test]
fn counts_partition_items() {
    let bundle = Bundle::new("Lot", BundleCategory::Mixed, 900.0, 9);
    let day = date(2024, 1, 5);
    let mut items: Vec<Item> = (0..4).map(|_| sold(&bundle, 100.0, day)).collect();
    items.push(Item::new(bundle.id, "still here", 150.0));
    items.push(Item::new(bundle.id, "also here", 150.0));

    let stats = bundle_stats(&bundle, &items).unwrap();
    let sold_count = items.iter().filter(|i| i.is_sold()).count();
    assert_eq!(stats.unsold_count + sold_count, items.len());
}

#[test]
fn daily_profit_ignores_other_days() {
    let bundle = Bundle::new("Lot", BundleCategory::Mixed, 500.0, 5);
    let items = vec![
        sold(&bundle, 400.0, date(2024, 1, 1)),
        sold(&bundle, 400.0, date(2024, 1, 2)),
        sold(&bundle, 400.0, date(2024, 1, 3)),
    ];
    // Day 2 crosses breakeven (800 > 500); only day-2 items may contribute.
    let report = daily_report(date(2024, 1, 2), std::slice::from_ref(&bundle), &items).unwrap();
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.revenue, 400.0);
    // Remaining cost at start of day 2 is 100; 400 exceeds it by 300.
    assert_eq!(report.profit, 300.0);
}
