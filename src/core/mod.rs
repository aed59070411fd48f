//! Business logic over the application data snapshot.
//! Depends on `domain`. No terminal I/O, no storage interactions.

pub mod services;

pub use services::{CategoryService, ReportService, ValidationResult};
