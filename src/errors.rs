use thiserror::Error;

/// Rejection reasons for a proposed category edit.
///
/// The `Display` message is the user-facing inline text; [`field`] names the
/// form field the message belongs next to. Aggregation has no error path, so
/// this is the crate's only error type.
///
/// [`field`]: ValidationError::field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Category name is required")]
    LabelRequired,
    #[error("Name max 50 chars")]
    LabelTooLong,
    #[error("Icon is required")]
    IconRequired,
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
    #[error("Cannot set category as its own parent.")]
    SelfParent,
    #[error("Income source categories cannot be sub-categories.")]
    IncomeSourceWithParent,
    #[error("Expense categories cannot have an income source as parent.")]
    ExpenseUnderIncomeParent,
}

impl ValidationError {
    /// Form field the rejection should be attached to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::LabelRequired | Self::LabelTooLong => "label",
            Self::IconRequired | Self::UnknownIcon(_) => "icon",
            Self::SelfParent | Self::IncomeSourceWithParent | Self::ExpenseUnderIncomeParent => {
                "parentId"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_names_a_field() {
        assert_eq!(ValidationError::LabelRequired.field(), "label");
        assert_eq!(ValidationError::UnknownIcon("Foo".into()).field(), "icon");
        assert_eq!(ValidationError::SelfParent.field(), "parentId");
        assert_eq!(ValidationError::IncomeSourceWithParent.field(), "parentId");
        assert_eq!(ValidationError::ExpenseUnderIncomeParent.field(), "parentId");
    }

    #[test]
    fn messages_match_the_inline_text() {
        assert_eq!(
            ValidationError::SelfParent.to_string(),
            "Cannot set category as its own parent."
        );
        assert_eq!(
            ValidationError::IncomeSourceWithParent.to_string(),
            "Income source categories cannot be sub-categories."
        );
        assert_eq!(
            ValidationError::ExpenseUnderIncomeParent.to_string(),
            "Expense categories cannot have an income source as parent."
        );
    }
}
