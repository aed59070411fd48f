//! Immutable monthly report snapshots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Displayable;
use crate::domain::month::MonthKey;

/// Pre-aggregated income, expenses, and per-category breakdown for one
/// calendar month. Generated externally; this crate only reads and reorders
/// copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: MonthKey,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_savings: f64,
    #[serde(default)]
    pub expense_breakdown: Vec<BreakdownItem>,
}

impl MonthlyReport {
    pub fn new(month: MonthKey, total_income: f64, total_expenses: f64) -> Self {
        Self {
            month,
            total_income,
            total_expenses,
            net_savings: total_income - total_expenses,
            expense_breakdown: Vec::new(),
        }
    }

    pub fn with_breakdown(mut self, items: Vec<BreakdownItem>) -> Self {
        self.expense_breakdown = items;
        self
    }
}

impl Displayable for MonthlyReport {
    fn display_label(&self) -> String {
        self.month.display_name()
    }
}

/// One category's share of a month's expenses. Unique per `category_id`
/// within a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub category_id: Uuid,
    pub category_label: String,
    pub amount: f64,
}

impl BreakdownItem {
    pub fn new(category_id: Uuid, category_label: impl Into<String>, amount: f64) -> Self {
        Self {
            category_id,
            category_label: category_label.into(),
            amount,
        }
    }
}

/// Display classification for a month's net savings. Zero counts as
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsSign {
    Positive,
    Negative,
}
