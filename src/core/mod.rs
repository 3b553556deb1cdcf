pub mod inventory_manager;
pub mod services;

pub use inventory_manager::InventoryManager;
