pub mod bundle_service;
pub mod item_service;
pub mod report_service;
pub mod sale_service;

pub use bundle_service::BundleService;
pub use item_service::ItemService;
pub use report_service::ReportService;
pub use sale_service::SaleService;

use crate::errors::InventoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] InventoryError),
    #[error("{0}")]
    Invalid(String),
}

impl From<ServiceError> for crate::errors::CliError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(core) => crate::errors::CliError::Core(core),
            ServiceError::Invalid(message) => crate::errors::CliError::Input(message),
        }
    }
}
