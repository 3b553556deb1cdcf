use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for core/domain/storage layers.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Inventory not loaded")]
    InventoryNotLoaded,
    #[error("Bundle not found: {0}")]
    BundleNotFound(String),
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    #[error("Daily sale not found: {0}")]
    SaleNotFound(String),
    #[error("Malformed bundle: {0}")]
    MalformedBundle(String),
    #[error("Sale failed: {0}")]
    SaleError(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

pub type Result<T> = StdResult<T, InventoryError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] InventoryError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::StorageError(err.to_string())
    }
}
