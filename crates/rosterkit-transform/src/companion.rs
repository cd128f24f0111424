//! Companion ("plus-one") contact extraction.
//!
//! Two-person group tickets capture the second attendee's email in its
//! own column. The companion list is built from the untouched raw table,
//! not the projected rows, so it sees the column even though the primary
//! output drops it.

use std::collections::BTreeSet;

use rosterkit_ingest::RawTable;
use rosterkit_model::{COMPANION_NAME, CompanionRow, columns, norm_email};

/// Outcome of companion extraction, with the counts the run summary
/// reports.
#[derive(Debug, Clone, Default)]
pub struct CompanionList {
    pub rows: Vec<CompanionRow>,
    /// Whether the group-ticket column was present at all.
    pub column_present: bool,
    /// Non-empty companion emails before subscriber exclusion.
    pub raw_count: usize,
    /// Rows removed because the email was already a subscriber.
    pub excluded: usize,
}

/// Extract the companion list from the raw table.
///
/// Every value in the group-ticket column is normalized as an email and
/// empty results are dropped. When a subscriber set is supplied, emails
/// already in it are excluded. Source order is kept and duplicate
/// companion emails are NOT collapsed against each other; only the
/// subscriber set filters them.
pub fn extract_companions(
    table: &RawTable,
    subscribers: Option<&BTreeSet<String>>,
    activity: &str,
) -> CompanionList {
    if !table.has_column(columns::GROUP_EMAIL) {
        tracing::warn!(
            column = columns::GROUP_EMAIL,
            "group-ticket column missing, companion list will be empty"
        );
        return CompanionList::default();
    }

    let emails: Vec<String> = table
        .column(columns::GROUP_EMAIL)
        .into_iter()
        .map(norm_email)
        .filter(|email| !email.is_empty())
        .collect();
    let raw_count = emails.len();

    let kept: Vec<String> = match subscribers {
        Some(set) => emails
            .into_iter()
            .filter(|email| !set.contains(email))
            .collect(),
        None => emails,
    };
    let excluded = raw_count - kept.len();

    let rows = kept
        .into_iter()
        .map(|email| CompanionRow {
            group_ticket_email: email,
            name: COMPANION_NAME.to_string(),
            tags: activity.to_string(),
        })
        .collect();

    CompanionList {
        rows,
        column_present: true,
        raw_count,
        excluded,
    }
}
