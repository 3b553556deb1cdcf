pub mod inventory;

pub use inventory::{Inventory, SaleLine, CURRENT_SCHEMA_VERSION};
