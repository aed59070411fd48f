//! Domain types for expense and income categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog;
use crate::domain::common::{Displayable, Identifiable};

/// A user-defined label for classifying income or expense entries,
/// optionally nested under a parent category.
///
/// `id` and `is_income_source` are fixed once the record exists; edits go
/// through `CategoryService`, which preserves both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub is_income_source: bool,
}

impl Category {
    /// New top-level expense category with a fresh id.
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            icon: icon.into(),
            parent_id: None,
            is_income_source: false,
        }
    }

    /// New top-level income source with a fresh id.
    pub fn income_source(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            is_income_source: true,
            ..Self::new(label, icon)
        }
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        if self.is_income_source {
            format!("{} (Income)", self.label)
        } else {
            format!("{} (Expense)", self.label)
        }
    }
}

/// Proposed field values for creating or editing a category, as submitted by
/// an editing surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub is_income_source: bool,
}

impl CategoryDraft {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            parent_id: None,
            is_income_source: false,
        }
    }

    /// Draft reproducing an existing category's current field values.
    pub fn from_category(category: &Category) -> Self {
        Self {
            label: category.label.clone(),
            icon: category.icon.clone(),
            parent_id: category.parent_id,
            is_income_source: category.is_income_source,
        }
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn as_income_source(mut self) -> Self {
        self.is_income_source = true;
        self
    }
}

impl Default for CategoryDraft {
    /// Creation defaults: empty name, the catalog's default icon, top-level,
    /// expense.
    fn default() -> Self {
        Self::new("", catalog::DEFAULT_ICON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_source_constructor_stays_top_level() {
        let salary = Category::income_source("Salary", "Banknote");
        assert!(salary.is_income_source);
        assert_eq!(salary.parent_id, None);
        assert_eq!(salary.display_label(), "Salary (Income)");
    }

    #[test]
    fn default_draft_uses_catalog_default_icon() {
        let draft = CategoryDraft::default();
        assert_eq!(draft.icon, catalog::DEFAULT_ICON);
        assert!(draft.label.is_empty());
        assert!(!draft.is_income_source);
    }

    #[test]
    fn draft_from_category_mirrors_fields() {
        let groceries = Category::new("Groceries", "ShoppingCart");
        let draft = CategoryDraft::from_category(&groceries);
        assert_eq!(draft.label, "Groceries");
        assert_eq!(draft.icon, "ShoppingCart");
        assert_eq!(draft.parent_id, None);
    }
}
