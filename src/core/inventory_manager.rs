use crate::errors::{InventoryError, Result};
use crate::inventory::{Inventory, CURRENT_SCHEMA_VERSION};
use crate::storage::StorageBackend;

/// Facade that coordinates inventory state, persistence, and backups.
///
/// Holds at most one loaded inventory. Callers mutate through
/// `with_current_mut` and persist with `save`; the storage backend's atomic
/// writes make each save all-or-nothing on disk.
pub struct InventoryManager {
    current: Option<Inventory>,
    current_name: Option<String>,
    storage: Box<dyn StorageBackend>,
}

impl InventoryManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            current: None,
            current_name: None,
            storage,
        }
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Creates a fresh inventory and makes it current (not yet saved).
    pub fn create(&mut self, name: &str) -> &Inventory {
        tracing::info!(name, "inventory created");
        self.current_name = Some(name.to_string());
        self.current.insert(Inventory::new(name))
    }

    pub fn load(&mut self, name: &str) -> Result<()> {
        let inventory = self.storage.load(name)?;
        self.ensure_schema_support(inventory.schema_version)?;
        tracing::info!(name, "inventory loaded");
        self.current = Some(inventory);
        self.current_name = Some(name.to_string());
        self.storage.record_last_inventory(Some(name))?;
        Ok(())
    }

    /// Loads the last-opened inventory when one is recorded.
    pub fn load_last(&mut self) -> Result<bool> {
        match self.storage.last_inventory()? {
            Some(name) => {
                self.load(&name)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn save(&mut self) -> Result<()> {
        let name = self
            .current_name
            .clone()
            .ok_or(InventoryError::InventoryNotLoaded)?;
        let inventory = self
            .current
            .as_mut()
            .ok_or(InventoryError::InventoryNotLoaded)?;
        inventory.touch();
        self.storage.save(inventory, &name)?;
        self.storage.record_last_inventory(Some(&name))?;
        Ok(())
    }

    pub fn save_as(&mut self, name: &str) -> Result<()> {
        if self.current.is_none() {
            return Err(InventoryError::InventoryNotLoaded);
        }
        self.current_name = Some(name.to_string());
        self.save()
    }

    pub fn close(&mut self) {
        self.current = None;
        self.current_name = None;
    }

    pub fn backup(&self, note: Option<&str>) -> Result<()> {
        let name = self
            .current_name
            .as_deref()
            .ok_or(InventoryError::InventoryNotLoaded)?;
        let inventory = self
            .current
            .as_ref()
            .ok_or(InventoryError::InventoryNotLoaded)?;
        self.storage.backup(inventory, name, note)
    }

    pub fn list_backups(&self) -> Result<Vec<String>> {
        let name = self
            .current_name
            .as_deref()
            .ok_or(InventoryError::InventoryNotLoaded)?;
        self.storage.list_backups(name)
    }

    pub fn restore(&mut self, backup_name: &str) -> Result<()> {
        let name = self
            .current_name
            .clone()
            .ok_or(InventoryError::InventoryNotLoaded)?;
        let inventory = self.storage.restore(&name, backup_name)?;
        self.ensure_schema_support(inventory.schema_version)?;
        self.current = Some(inventory);
        Ok(())
    }

    pub fn with_current<T>(&self, f: impl FnOnce(&Inventory) -> T) -> Result<T> {
        self.current
            .as_ref()
            .map(f)
            .ok_or(InventoryError::InventoryNotLoaded)
    }

    pub fn with_current_mut<T>(&mut self, f: impl FnOnce(&mut Inventory) -> T) -> Result<T> {
        self.current
            .as_mut()
            .map(f)
            .ok_or(InventoryError::InventoryNotLoaded)
    }

    fn ensure_schema_support(&self, version: u8) -> Result<()> {
        if version > CURRENT_SCHEMA_VERSION {
            return Err(InventoryError::StorageError(format!(
                "inventory schema version {} is newer than supported {}",
                version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(())
    }
}
