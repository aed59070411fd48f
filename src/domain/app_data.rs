use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::report::MonthlyReport;

/// The application data snapshot handed to the services.
///
/// Loaded and persisted by the surrounding application; every service treats
/// it as read-only for the duration of a call. The only mutation path this
/// crate offers is [`AppData::upsert_category`], used on the accept path of a
/// validated edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub monthly_reports: Vec<MonthlyReport>,
}

impl AppData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Inserts the record, or replaces the record with the same id. Returns
    /// the stored id.
    pub fn upsert_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        match self.categories.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => *slot = category,
            None => self.categories.push(category),
        }
        id
    }
}
