use tracing::debug;

use crate::domain::month::MonthKey;
use crate::domain::report::{BreakdownItem, MonthlyReport, SavingsSign};

/// Read-only derivations over pre-generated monthly reports.
///
/// Every operation is total: absent or empty input degrades to an empty or
/// unfiltered result.
pub struct ReportService;

impl ReportService {
    /// Reports whose month satisfies `from <= month <= to` under the key's
    /// lexicographic ordering. Either bound absent means no filtering.
    /// Output keeps the input order.
    pub fn select_range<'a>(
        reports: &'a [MonthlyReport],
        from: Option<&MonthKey>,
        to: Option<&MonthKey>,
    ) -> Vec<&'a MonthlyReport> {
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            _ => return reports.iter().collect(),
        };
        let selected: Vec<&MonthlyReport> = reports
            .iter()
            .filter(|report| report.month >= *from && report.month <= *to)
            .collect();
        debug!(
            %from,
            %to,
            selected = selected.len(),
            total = reports.len(),
            "report range selected"
        );
        selected
    }

    /// Distinct months present, most recent first, for range selectors.
    pub fn available_months(reports: &[MonthlyReport]) -> Vec<MonthKey> {
        let mut months: Vec<MonthKey> = reports.iter().map(|report| report.month.clone()).collect();
        months.sort();
        months.dedup();
        months.reverse();
        months
    }

    /// Months at or after `from`, in the given order; the options for the end
    /// of a range once its start is chosen. `None` keeps everything.
    pub fn months_from(months: &[MonthKey], from: Option<&MonthKey>) -> Vec<MonthKey> {
        months
            .iter()
            .filter(|month| from.map_or(true, |from| *month >= from))
            .cloned()
            .collect()
    }

    /// Earliest and latest month present, for an initial range selection.
    pub fn default_range(reports: &[MonthlyReport]) -> Option<(MonthKey, MonthKey)> {
        let earliest = reports.iter().map(|report| &report.month).min()?;
        let latest = reports.iter().map(|report| &report.month).max()?;
        Some((earliest.clone(), latest.clone()))
    }

    /// The report's breakdown sorted by amount, largest first. Ties keep
    /// their original relative order; the stored breakdown is untouched.
    pub fn ordered_breakdown(report: &MonthlyReport) -> Vec<BreakdownItem> {
        let mut items = report.expense_breakdown.clone();
        items.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        debug!(month = %report.month, entries = items.len(), "breakdown ordered");
        items
    }

    /// Classifies net savings for display. Zero counts as positive.
    pub fn net_savings_sign(report: &MonthlyReport) -> SavingsSign {
        if report.net_savings >= 0.0 {
            SavingsSign::Positive
        } else {
            SavingsSign::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn report(month: &str) -> MonthlyReport {
        MonthlyReport::new(MonthKey::from(month), 3000.0, 2000.0)
    }

    fn months(reports: &[&MonthlyReport]) -> Vec<String> {
        reports
            .iter()
            .map(|report| report.month.as_str().to_string())
            .collect()
    }

    #[test]
    fn select_range_is_inclusive_and_order_preserving() {
        let reports = vec![report("2024-01"), report("2024-02"), report("2024-03")];
        let from = MonthKey::new("2024-02");
        let to = MonthKey::new("2024-03");
        let selected = ReportService::select_range(&reports, Some(&from), Some(&to));
        assert_eq!(months(&selected), ["2024-02", "2024-03"]);
    }

    #[test]
    fn select_range_without_bounds_returns_everything() {
        let reports = vec![report("2024-03"), report("2024-01")];
        let to = MonthKey::new("2024-01");
        assert_eq!(ReportService::select_range(&reports, None, None).len(), 2);
        assert_eq!(ReportService::select_range(&reports, None, Some(&to)).len(), 2);
    }

    #[test]
    fn select_range_is_idempotent() {
        let reports = vec![report("2023-12"), report("2024-01"), report("2024-02")];
        let from = MonthKey::new("2024-01");
        let to = MonthKey::new("2024-02");
        let once: Vec<MonthlyReport> = ReportService::select_range(&reports, Some(&from), Some(&to))
            .into_iter()
            .cloned()
            .collect();
        let twice = ReportService::select_range(&once, Some(&from), Some(&to));
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(once.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn available_months_deduplicates_and_sorts_descending() {
        let reports = vec![
            report("2024-01"),
            report("2024-03"),
            report("2024-01"),
            report("2023-11"),
        ];
        let months = ReportService::available_months(&reports);
        let keys: Vec<&str> = months.iter().map(MonthKey::as_str).collect();
        assert_eq!(keys, ["2024-03", "2024-01", "2023-11"]);
    }

    #[test]
    fn months_from_keeps_months_at_or_after_the_start() {
        let all: Vec<MonthKey> = ["2024-03", "2024-02", "2024-01"]
            .iter()
            .map(|key| MonthKey::new(*key))
            .collect();
        let from = MonthKey::new("2024-02");
        let options = ReportService::months_from(&all, Some(&from));
        let keys: Vec<&str> = options.iter().map(MonthKey::as_str).collect();
        assert_eq!(keys, ["2024-03", "2024-02"]);
        assert_eq!(ReportService::months_from(&all, None).len(), 3);
    }

    #[test]
    fn default_range_spans_earliest_to_latest() {
        let reports = vec![report("2024-02"), report("2023-09"), report("2024-01")];
        let (from, to) = ReportService::default_range(&reports).unwrap();
        assert_eq!(from.as_str(), "2023-09");
        assert_eq!(to.as_str(), "2024-02");
        assert!(ReportService::default_range(&[]).is_none());
    }

    #[test]
    fn ordered_breakdown_sorts_descending_and_keeps_ties_stable() {
        let id = Uuid::new_v4;
        let stored = vec![
            BreakdownItem::new(id(), "Rent", 10.0),
            BreakdownItem::new(id(), "Food", 50.0),
            BreakdownItem::new(id(), "Fuel", 30.0),
            BreakdownItem::new(id(), "Vet", 30.0),
        ];
        let report = report("2024-01").with_breakdown(stored.clone());
        let ordered = ReportService::ordered_breakdown(&report);
        let amounts: Vec<f64> = ordered.iter().map(|item| item.amount).collect();
        assert_eq!(amounts, [50.0, 30.0, 30.0, 10.0]);
        // Stable: Fuel entered before Vet and stays first among the ties.
        assert_eq!(ordered[1].category_label, "Fuel");
        assert_eq!(ordered[2].category_label, "Vet");
        // The stored breakdown is untouched.
        assert_eq!(report.expense_breakdown, stored);
    }

    #[test]
    fn net_savings_sign_treats_zero_as_positive() {
        let surplus = MonthlyReport::new(MonthKey::new("2024-01"), 3000.0, 2000.0);
        let balanced = MonthlyReport::new(MonthKey::new("2024-02"), 2000.0, 2000.0);
        let deficit = MonthlyReport::new(MonthKey::new("2024-03"), 2000.0, 2600.0);
        assert_eq!(ReportService::net_savings_sign(&surplus), SavingsSign::Positive);
        assert_eq!(ReportService::net_savings_sign(&balanced), SavingsSign::Positive);
        assert_eq!(ReportService::net_savings_sign(&deficit), SavingsSign::Negative);
    }
}
