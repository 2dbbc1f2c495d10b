use crate::models::{Report, SeoStatus};

/// Point contribution of one leaf check toward the aggregate score.
pub fn status_weight(status: SeoStatus) -> f64 {
    match status {
        SeoStatus::Good => 1.0,
        SeoStatus::Improvement => 0.5,
        SeoStatus::Error => 0.0,
    }
}

/// Reduces leaf-check statuses to a single 0-100 score: the weighted mean
/// scaled to a percentage and rounded. An empty set scores 0 rather than
/// dividing by zero.
pub fn aggregate_score<I>(statuses: I) -> u8
where
    I: IntoIterator<Item = SeoStatus>,
{
    let mut sum = 0.0;
    let mut count = 0u32;

    for status in statuses {
        sum += status_weight(status);
        count += 1;
    }

    if count == 0 {
        return 0;
    }

    (sum / f64::from(count) * 100.0).round() as u8
}

/// Convenience: the score a report's leaf checks imply. Traverses both
/// groups down to leaf checks only, never counting a parent group.
pub fn score_report_checks(report: &Report) -> u8 {
    let statuses = report
        .on_page
        .leaf_statuses()
        .into_iter()
        .chain(report.technical.leaf_statuses());
    aggregate_score(statuses)
}
