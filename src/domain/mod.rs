//! Pure domain models (Category, MonthlyReport, AppData snapshot).
//! No I/O, no services. Only data types and helpers.

pub mod app_data;
pub mod category;
pub mod common;
pub mod month;
pub mod report;

pub use app_data::AppData;
pub use category::{Category, CategoryDraft};
pub use common::{Displayable, Identifiable};
pub use month::MonthKey;
pub use report::{BreakdownItem, MonthlyReport, SavingsSign};
