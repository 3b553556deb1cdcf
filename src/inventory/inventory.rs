use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Bundle, DailySale, Item};
use crate::errors::{InventoryError, Result};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The full store of bundles, items, and daily sales for one business.
///
/// All mutations go through this aggregate. The sale recording/deletion pair
/// validates every reference before touching any state, so a failed call
/// leaves the aggregate exactly as it was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub bundles: Vec<Bundle>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub daily_sales: Vec<DailySale>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Inventory::schema_version_default")]
    pub schema_version: u8,
}

/// One line of a daily sale: which item, and at what price. A missing price
/// falls back to the item's listed selling price.
#[derive(Debug, Clone, Copy)]
pub struct SaleLine {
    pub item_id: Uuid,
    pub sold_price: Option<f64>,
}

impl SaleLine {
    pub fn at_listed_price(item_id: Uuid) -> Self {
        Self {
            item_id,
            sold_price: None,
        }
    }

    pub fn at_price(item_id: Uuid, price: f64) -> Self {
        Self {
            item_id,
            sold_price: Some(price),
        }
    }
}

impl Inventory {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            bundles: Vec::new(),
            items: Vec::new(),
            daily_sales: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    // ----- bundles -----

    pub fn add_bundle(&mut self, bundle: Bundle) -> Uuid {
        let id = bundle.id;
        self.bundles.push(bundle);
        self.touch();
        id
    }

    pub fn bundle(&self, id: Uuid) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.id == id)
    }

    pub fn bundle_mut(&mut self, id: Uuid) -> Option<&mut Bundle> {
        self.bundles.iter_mut().find(|b| b.id == id)
    }

    pub fn update_bundle(&mut self, bundle: Bundle) -> Result<()> {
        let slot = self
            .bundle_mut(bundle.id)
            .ok_or_else(|| InventoryError::BundleNotFound(bundle.id.to_string()))?;
        *slot = bundle;
        self.touch();
        Ok(())
    }

    /// Removes a bundle and cascades to its items. Item ids are also dropped
    /// from daily-sale lists; recorded revenue on those sales stays as the
    /// snapshot taken at recording time.
    pub fn remove_bundle(&mut self, id: Uuid) -> Result<Bundle> {
        let index = self
            .bundles
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| InventoryError::BundleNotFound(id.to_string()))?;
        let removed = self.bundles.remove(index);
        let orphaned: Vec<Uuid> = self
            .items
            .iter()
            .filter(|i| i.bundle_id == id)
            .map(|i| i.id)
            .collect();
        self.items.retain(|i| i.bundle_id != id);
        for sale in &mut self.daily_sales {
            sale.items.retain(|item_id| !orphaned.contains(item_id));
        }
        tracing::debug!(
            bundle = %removed.name,
            cascaded_items = orphaned.len(),
            "bundle removed"
        );
        self.touch();
        Ok(removed)
    }

    // ----- items -----

    pub fn add_item(&mut self, item: Item) -> Result<Uuid> {
        if self.bundle(item.bundle_id).is_none() {
            return Err(InventoryError::InvalidReference(format!(
                "item `{}` references unknown bundle {}",
                item.name, item.bundle_id
            )));
        }
        let id = item.id;
        self.items.push(item);
        self.touch();
        Ok(id)
    }

    pub fn item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn update_item(&mut self, item: Item) -> Result<()> {
        let slot = self
            .item_mut(item.id)
            .ok_or_else(|| InventoryError::ItemNotFound(item.id.to_string()))?;
        *slot = item;
        self.touch();
        Ok(())
    }

    pub fn remove_item(&mut self, id: Uuid) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| InventoryError::ItemNotFound(id.to_string()))?;
        let removed = self.items.remove(index);
        for sale in &mut self.daily_sales {
            sale.items.retain(|item_id| *item_id != id);
        }
        self.touch();
        Ok(removed)
    }

    pub fn bundle_items(&self, bundle_id: Uuid) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| i.bundle_id == bundle_id)
            .collect()
    }

    /// Individual-edit path of the Available -> Sold transition.
    pub fn mark_item_sold(&mut self, id: Uuid, date: NaiveDate, price: f64) -> Result<()> {
        let item = self
            .item_mut(id)
            .ok_or_else(|| InventoryError::ItemNotFound(id.to_string()))?;
        item.mark_sold(date, price);
        self.touch();
        Ok(())
    }

    pub fn mark_item_available(&mut self, id: Uuid) -> Result<()> {
        let item = self
            .item_mut(id)
            .ok_or_else(|| InventoryError::ItemNotFound(id.to_string()))?;
        item.mark_available();
        self.touch();
        Ok(())
    }

    // ----- daily sales -----

    pub fn daily_sale(&self, id: Uuid) -> Option<&DailySale> {
        self.daily_sales.iter().find(|s| s.id == id)
    }

    /// Records a batch sale: flips every referenced item to Sold and appends
    /// the sale record. Validation runs before any mutation; either every
    /// effect lands or none does.
    pub fn record_daily_sale(&mut self, date: NaiveDate, lines: &[SaleLine]) -> Result<Uuid> {
        if lines.is_empty() {
            return Err(InventoryError::SaleError("a sale needs at least one item".into()));
        }

        let mut resolved: Vec<(Uuid, f64)> = Vec::with_capacity(lines.len());
        for line in lines {
            let item = self
                .item(line.item_id)
                .ok_or_else(|| InventoryError::ItemNotFound(line.item_id.to_string()))?;
            if !item.is_available() {
                return Err(InventoryError::SaleError(format!(
                    "item `{}` is not available",
                    item.name
                )));
            }
            if resolved.iter().any(|(id, _)| *id == item.id) {
                return Err(InventoryError::SaleError(format!(
                    "item `{}` listed twice in one sale",
                    item.name
                )));
            }
            resolved.push((item.id, line.sold_price.unwrap_or(item.selling_price)));
        }

        let total_revenue: f64 = resolved.iter().map(|(_, price)| price).sum();
        for (id, price) in &resolved {
            if let Some(item) = self.item_mut(*id) {
                item.mark_sold(date, *price);
            }
        }
        let sale = DailySale::new(date, resolved.iter().map(|(id, _)| *id).collect(), total_revenue);
        let sale_id = sale.id;
        tracing::info!(%date, items = resolved.len(), revenue = total_revenue, "daily sale recorded");
        self.daily_sales.push(sale);
        self.touch();
        Ok(sale_id)
    }

    /// Reverses a recorded sale: referenced items go back to Available with
    /// their sold fields cleared, and the record is removed.
    pub fn delete_daily_sale(&mut self, id: Uuid) -> Result<DailySale> {
        let index = self
            .daily_sales
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| InventoryError::SaleNotFound(id.to_string()))?;
        let sale = self.daily_sales.remove(index);
        for item_id in &sale.items {
            if let Some(item) = self.item_mut(*item_id) {
                item.mark_available();
            }
        }
        tracing::info!(date = %sale.date, items = sale.items.len(), "daily sale deleted");
        self.touch();
        Ok(sale)
    }
}
