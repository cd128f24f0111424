//! Tag string assembly.

use rosterkit_model::norm_str;

/// Join tag components with commas, skipping components that are empty
/// after trimming. Field order is preserved; skipped components leave no
/// separator behind.
pub fn build_tag<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(norm_str)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
