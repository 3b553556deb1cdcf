use uuid::Uuid;

use crate::domain::Bundle;
use crate::inventory::Inventory;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for bundles.
pub struct BundleService;

impl BundleService {
    /// Adds a new bundle and returns its identifier.
    pub fn add(inventory: &mut Inventory, bundle: Bundle) -> ServiceResult<Uuid> {
        Self::validate(inventory, None, &bundle)?;
        Ok(inventory.add_bundle(bundle))
    }

    /// Updates the bundle identified by `id` via the provided mutator.
    pub fn update<F>(inventory: &mut Inventory, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Bundle),
    {
        let mut changed = inventory
            .bundle(id)
            .cloned()
            .ok_or_else(|| ServiceError::Invalid("Bundle not found".into()))?;
        mutator(&mut changed);
        Self::validate(inventory, Some(id), &changed)?;
        inventory.update_bundle(changed)?;
        Ok(())
    }

    /// Removes a bundle, cascading to its items.
    pub fn remove(inventory: &mut Inventory, id: Uuid) -> ServiceResult<Bundle> {
        inventory.remove_bundle(id).map_err(ServiceError::from)
    }

    pub fn list(inventory: &Inventory) -> Vec<&Bundle> {
        inventory.bundles.iter().collect()
    }

    fn validate(
        inventory: &Inventory,
        exclude: Option<Uuid>,
        candidate: &Bundle,
    ) -> ServiceResult<()> {
        if candidate.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Bundle name is required".into()));
        }
        if candidate.total_cost <= 0.0 {
            return Err(ServiceError::Invalid(
                "Bundle cost must be greater than zero".into(),
            ));
        }
        if candidate.total_pieces == 0 {
            return Err(ServiceError::Invalid(
                "Bundle must contain at least one piece".into(),
            ));
        }
        let normalized = candidate.name.trim().to_ascii_lowercase();
        let duplicate = inventory.bundles.iter().any(|bundle| {
            let name = bundle.name.trim().to_ascii_lowercase();
            name == normalized && exclude.map_or(true, |id| bundle.id != id)
        });
        if duplicate {
            return Err(ServiceError::Invalid(format!(
                "Bundle `{}` already exists",
                candidate.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BundleCategory;

    fn base_inventory() -> Inventory {
        Inventory::new("Shop")
    }

    #[test]
    fn add_rejects_zero_cost() {
        let mut inventory = base_inventory();
        let err = BundleService::add(
            &mut inventory,
            Bundle::new("Lot", BundleCategory::Mixed, 0.0, 10),
        )
        .expect_err("zero cost must be rejected");
        assert!(matches!(err, ServiceError::Invalid(ref m) if m.contains("cost")));
    }

    #[test]
    fn add_rejects_zero_pieces() {
        let mut inventory = base_inventory();
        let err = BundleService::add(
            &mut inventory,
            Bundle::new("Lot", BundleCategory::Mixed, 500.0, 0),
        )
        .expect_err("zero pieces must be rejected");
        assert!(matches!(err, ServiceError::Invalid(ref m) if m.contains("piece")));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut inventory = base_inventory();
        BundleService::add(
            &mut inventory,
            Bundle::new("Lot A", BundleCategory::Mixed, 500.0, 5),
        )
        .unwrap();
        let err = BundleService::add(
            &mut inventory,
            Bundle::new("lot a", BundleCategory::Jackets, 800.0, 8),
        )
        .expect_err("duplicate name must be rejected");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn update_validates_the_changed_bundle() {
        let mut inventory = base_inventory();
        let id = BundleService::add(
            &mut inventory,
            Bundle::new("Lot A", BundleCategory::Mixed, 500.0, 5),
        )
        .unwrap();
        let err = BundleService::update(&mut inventory, id, |bundle| bundle.total_pieces = 0)
            .expect_err("update to zero pieces must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert_eq!(inventory.bundle(id).unwrap().total_pieces, 5);
    }
}
