//! Existing-subscriber list loading.
//!
//! The subscriber export is whatever the CRM produced, so the email
//! column is located by name rather than position: an exact
//! case-insensitive `email` header wins, otherwise the first header that
//! contains `email` is used.

use std::collections::BTreeSet;
use std::path::Path;

use rosterkit_model::norm_email;

use crate::error::{IngestError, Result};
use crate::table::read_csv_table;

/// Locate the email column among the given headers.
pub fn find_email_column(headers: &[String]) -> Option<&str> {
    if let Some(exact) = headers
        .iter()
        .find(|h| h.trim().eq_ignore_ascii_case("email"))
    {
        return Some(exact);
    }
    headers
        .iter()
        .find(|h| h.trim().to_lowercase().contains("email"))
        .map(String::as_str)
}

/// Load the subscriber email set from a CSV export.
///
/// Every value in the detected email column is normalized (trimmed,
/// lower-cased); empty results are dropped. Returns `NoEmailColumn` when
/// detection fails so the caller can decide to skip exclusion.
pub fn load_subscriber_set(path: &Path) -> Result<BTreeSet<String>> {
    let table = read_csv_table(path)?;
    let column = find_email_column(&table.headers)
        .ok_or_else(|| IngestError::NoEmailColumn {
            path: path.to_path_buf(),
        })?
        .to_string();

    let set: BTreeSet<String> = table
        .column(&column)
        .into_iter()
        .map(norm_email)
        .filter(|email| !email.is_empty())
        .collect();

    tracing::debug!(
        path = %path.display(),
        column = %column,
        subscribers = set.len(),
        "loaded subscriber set"
    );

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn exact_email_header_wins_over_substring() {
        let cols = headers(&["Subscriber Email", "EMAIL", "name"]);
        assert_eq!(find_email_column(&cols), Some("EMAIL"));
    }

    #[test]
    fn substring_match_is_the_fallback() {
        let cols = headers(&["name", "Email Address"]);
        assert_eq!(find_email_column(&cols), Some("Email Address"));
    }

    #[test]
    fn no_email_header_yields_none() {
        let cols = headers(&["name", "phone"]);
        assert_eq!(find_email_column(&cols), None);
    }

    #[test]
    fn loads_normalized_unique_emails() {
        let file = create_temp_csv(
            "name,Email\nAmy, User@Example.com \nBob,bob@test.com\nDup,USER@EXAMPLE.COM\nBlank,\n",
        );
        let set = load_subscriber_set(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("user@example.com"));
        assert!(set.contains("bob@test.com"));
    }

    #[test]
    fn missing_email_column_is_an_error() {
        let file = create_temp_csv("name,phone\nAmy,123\n");
        let result = load_subscriber_set(file.path());
        assert!(matches!(result, Err(IngestError::NoEmailColumn { .. })));
    }
}
