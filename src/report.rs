//! Markdown report generation
//!
//! Merges the reportable diff categories, orders them, and renders the
//! table published as the `stats_message` output.

use crate::diff::{DiffEntry, StatsDiff};
use crate::error::StatsDiffError;
use crate::fmt::{format_bytes, format_signed_bytes};

/// Table header shared by every report
const REPORT_HEADER: &str = "| Asset | New size | Old size | Diff |\n| --- | --- | --- | --- |\n";

/// Render the markdown size report for a computed diff.
///
/// Removed assets are excluded. Rows are ordered by `new_size` descending;
/// ties keep the concatenation order added, bigger, smaller, same-size.
/// Fails when the diff carries no usable aggregate.
pub fn render_report(stats: &StatsDiff) -> Result<String, StatsDiffError> {
    if stats.total.is_none() {
        return Err(StatsDiffError::StatsConversion);
    }

    let mut message = String::from(REPORT_HEADER);
    for entry in reportable_entries(stats) {
        message.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            entry.name,
            format_bytes(entry.new_size),
            format_bytes(entry.old_size),
            format_signed_bytes(entry.diff),
        ));
    }

    Ok(message)
}

/// Merge the reportable categories and sort for display.
///
/// Vec::sort_by is stable, so equal-sized entries keep category order.
pub fn reportable_entries(stats: &StatsDiff) -> Vec<&DiffEntry> {
    let mut entries: Vec<&DiffEntry> = stats
        .added
        .iter()
        .chain(stats.bigger.iter())
        .chain(stats.smaller.iter())
        .chain(stats.same_size.iter())
        .collect();

    entries.sort_by(|a, b| b.new_size.cmp(&a.new_size));
    entries
}
