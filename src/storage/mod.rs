pub mod json_backend;

use std::path::Path;

use crate::{errors::InventoryError, inventory::Inventory};

pub type Result<T> = std::result::Result<T, InventoryError>;

/// Abstraction over persistence backends capable of storing inventories and
/// snapshots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, inventory: &Inventory, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Inventory>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, inventory: &Inventory, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<Inventory>;
    fn last_inventory(&self) -> Result<Option<String>>;
    fn record_last_inventory(&self, name: Option<&str>) -> Result<()>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to the plain JSON codec when not overridden.
    fn save_to_path(&self, inventory: &Inventory, path: &Path) -> Result<()> {
        json_backend::save_inventory_to_path(inventory, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Inventory> {
        json_backend::load_inventory_from_path(path)
    }
}

pub use json_backend::JsonStorage;
