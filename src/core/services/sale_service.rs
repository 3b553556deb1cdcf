use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::DailySale;
use crate::inventory::{Inventory, SaleLine};

use super::{ServiceError, ServiceResult};

/// Records and reverses batch daily sales. The aggregate enforces the
/// all-or-nothing contract; this layer adds lookups and listing.
pub struct SaleService;

impl SaleService {
    /// Records a sale of the given lines and returns its identifier.
    pub fn record(
        inventory: &mut Inventory,
        date: NaiveDate,
        lines: &[SaleLine],
    ) -> ServiceResult<Uuid> {
        inventory
            .record_daily_sale(date, lines)
            .map_err(ServiceError::from)
    }

    /// Deletes a sale, reverting its items to Available.
    pub fn delete(inventory: &mut Inventory, id: Uuid) -> ServiceResult<DailySale> {
        inventory.delete_daily_sale(id).map_err(ServiceError::from)
    }

    /// Sales for one date, newest record first.
    pub fn list_for_date(inventory: &Inventory, date: NaiveDate) -> Vec<&DailySale> {
        let mut sales: Vec<&DailySale> = inventory
            .daily_sales
            .iter()
            .filter(|sale| sale.date == date)
            .collect();
        sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sales
    }

    /// All sales, newest date first.
    pub fn list(inventory: &Inventory) -> Vec<&DailySale> {
        let mut sales: Vec<&DailySale> = inventory.daily_sales.iter().collect();
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        sales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bundle, BundleCategory, Item};

    fn seeded() -> (Inventory, Vec<Uuid>) {
        let mut inventory = Inventory::new("Shop");
        let bundle_id =
            inventory.add_bundle(Bundle::new("Lot", BundleCategory::Mixed, 1000.0, 10));
        let ids = (0..2)
            .map(|n| {
                inventory
                    .add_item(Item::new(bundle_id, format!("piece {}", n), 300.0))
                    .unwrap()
            })
            .collect();
        (inventory, ids)
    }

    #[test]
    fn record_and_list_by_date() {
        let (mut inventory, ids) = seeded();
        let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        SaleService::record(&mut inventory, day, &[SaleLine::at_listed_price(ids[0])]).unwrap();
        SaleService::record(&mut inventory, day, &[SaleLine::at_listed_price(ids[1])]).unwrap();
        assert_eq!(SaleService::list_for_date(&inventory, day).len(), 2);
        let other = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert!(SaleService::list_for_date(&inventory, other).is_empty());
    }

    #[test]
    fn delete_unknown_sale_fails() {
        let (mut inventory, _) = seeded();
        let err = SaleService::delete(&mut inventory, Uuid::new_v4())
            .expect_err("unknown sale must fail");
        assert!(matches!(err, ServiceError::Core(_)));
    }
}
