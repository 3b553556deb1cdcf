use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::Item;
use crate::inventory::Inventory;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for items, including the individual
/// Available <-> Sold transition.
pub struct ItemService;

impl ItemService {
    /// Adds a new item and returns its identifier.
    pub fn add(inventory: &mut Inventory, item: Item) -> ServiceResult<Uuid> {
        Self::validate(&item)?;
        inventory.add_item(item).map_err(ServiceError::from)
    }

    /// Updates the item identified by `id` via the provided mutator.
    pub fn update<F>(inventory: &mut Inventory, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Item),
    {
        let mut changed = inventory
            .item(id)
            .cloned()
            .ok_or_else(|| ServiceError::Invalid("Item not found".into()))?;
        let original_bundle = changed.bundle_id;
        mutator(&mut changed);
        Self::validate(&changed)?;
        if changed.bundle_id != original_bundle {
            return Err(ServiceError::Invalid(
                "An item cannot move to another bundle".into(),
            ));
        }
        inventory.update_item(changed)?;
        Ok(())
    }

    /// Removes the item identified by `id`, returning the removed instance.
    pub fn remove(inventory: &mut Inventory, id: Uuid) -> ServiceResult<Item> {
        inventory.remove_item(id).map_err(ServiceError::from)
    }

    pub fn list(inventory: &Inventory) -> Vec<&Item> {
        inventory.items.iter().collect()
    }

    pub fn list_for_bundle(inventory: &Inventory, bundle_id: Uuid) -> Vec<&Item> {
        inventory.bundle_items(bundle_id)
    }

    /// Marks one item sold outside of a batch daily sale.
    pub fn mark_sold(
        inventory: &mut Inventory,
        id: Uuid,
        date: NaiveDate,
        price: f64,
    ) -> ServiceResult<()> {
        if price < 0.0 {
            return Err(ServiceError::Invalid(
                "Sold price cannot be negative".into(),
            ));
        }
        inventory
            .mark_item_sold(id, date, price)
            .map_err(ServiceError::from)
    }

    pub fn mark_available(inventory: &mut Inventory, id: Uuid) -> ServiceResult<()> {
        inventory.mark_item_available(id).map_err(ServiceError::from)
    }

    fn validate(item: &Item) -> ServiceResult<()> {
        if item.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Item name is required".into()));
        }
        if item.selling_price < 0.0 {
            return Err(ServiceError::Invalid(
                "Selling price cannot be negative".into(),
            ));
        }
        if let Some(cost) = item.estimated_cost {
            if cost < 0.0 {
                return Err(ServiceError::Invalid(
                    "Estimated cost cannot be negative".into(),
                ));
            }
        }
        Ok(())
    }
}
