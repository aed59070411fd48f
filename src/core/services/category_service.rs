use tracing::debug;
use uuid::Uuid;

use crate::catalog;
use crate::domain::app_data::AppData;
use crate::domain::category::{Category, CategoryDraft};
use crate::errors::ValidationError;

use super::ValidationResult;

const LABEL_MAX_CHARS: usize = 50;

/// Stateless validation and accept-path logic for category edits.
pub struct CategoryService;

impl CategoryService {
    /// Validates a draft against the full category collection.
    ///
    /// `existing` is the category being edited, `None` for creation. Checks
    /// run in a fixed order, first failure wins: label and icon schema rules,
    /// then self-parent, income-source-with-parent, and
    /// expense-under-income-parent. A `parent_id` that resolves to no known
    /// category carries no parent constraint.
    ///
    /// On acceptance the returned record keeps the existing category's `id`
    /// and `is_income_source` regardless of the draft; creation assigns a
    /// fresh id and takes `is_income_source` from the draft.
    pub fn validate(
        draft: &CategoryDraft,
        existing: Option<&Category>,
        categories: &[Category],
    ) -> ValidationResult<Category> {
        if let Err(error) =
            Self::check_schema(draft).and_then(|()| Self::check_parent(draft, existing, categories))
        {
            debug!(field = error.field(), %error, "category draft rejected");
            return Err(error);
        }

        let record = match existing {
            Some(current) => Category {
                id: current.id,
                label: draft.label.clone(),
                icon: draft.icon.clone(),
                parent_id: draft.parent_id,
                is_income_source: current.is_income_source,
            },
            None => Category {
                id: Uuid::new_v4(),
                label: draft.label.clone(),
                icon: draft.icon.clone(),
                parent_id: draft.parent_id,
                is_income_source: draft.is_income_source,
            },
        };
        debug!(category = %record.label, id = %record.id, "category draft accepted");
        Ok(record)
    }

    /// Validates and upserts in one step, returning the stored id.
    ///
    /// An `existing_id` that is not present in the snapshot is treated as
    /// creation.
    pub fn save(
        data: &mut AppData,
        existing_id: Option<Uuid>,
        draft: &CategoryDraft,
    ) -> ValidationResult<Uuid> {
        let existing = existing_id.and_then(|id| data.category(id));
        let record = Self::validate(draft, existing, &data.categories)?;
        Ok(data.upsert_category(record))
    }

    /// Categories that may be offered as a parent: non-income categories,
    /// excluding the category currently being edited. Original order is
    /// preserved.
    pub fn eligible_parents<'a>(
        categories: &'a [Category],
        editing: Option<&Category>,
    ) -> Vec<&'a Category> {
        let editing_id = editing.map(|category| category.id);
        categories
            .iter()
            .filter(|category| !category.is_income_source && Some(category.id) != editing_id)
            .collect()
    }

    fn check_schema(draft: &CategoryDraft) -> ValidationResult<()> {
        if draft.label.is_empty() {
            return Err(ValidationError::LabelRequired);
        }
        if draft.label.chars().count() > LABEL_MAX_CHARS {
            return Err(ValidationError::LabelTooLong);
        }
        if draft.icon.is_empty() {
            return Err(ValidationError::IconRequired);
        }
        if !catalog::is_known(&draft.icon) {
            return Err(ValidationError::UnknownIcon(draft.icon.clone()));
        }
        Ok(())
    }

    fn check_parent(
        draft: &CategoryDraft,
        existing: Option<&Category>,
        categories: &[Category],
    ) -> ValidationResult<()> {
        if let Some(current) = existing {
            if draft.parent_id == Some(current.id) {
                return Err(ValidationError::SelfParent);
            }
        }
        if draft.is_income_source && draft.parent_id.is_some() {
            return Err(ValidationError::IncomeSourceWithParent);
        }
        let parent = draft
            .parent_id
            .and_then(|id| categories.iter().find(|category| category.id == id));
        if let Some(parent) = parent {
            if parent.is_income_source && !draft.is_income_source {
                return Err(ValidationError::ExpenseUnderIncomeParent);
            }
        }
        Ok(())
    }
}
