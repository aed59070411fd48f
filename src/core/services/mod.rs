pub mod category_service;
pub mod report_service;

pub use category_service::CategoryService;
pub use report_service::ReportService;

use crate::errors::ValidationError;

pub type ValidationResult<T> = Result<T, ValidationError>;
