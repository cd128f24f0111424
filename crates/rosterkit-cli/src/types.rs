use std::path::PathBuf;

/// Everything a convert run produced, for the summary and exit code.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub group_output: PathBuf,
    pub activity: String,
    /// Rows read from the registration export.
    pub input_rows: usize,
    /// Rows written to the primary output.
    pub kit_rows: usize,
    /// Rows written to the companion output.
    pub companion_rows: usize,
    /// Non-empty companion emails before subscriber exclusion.
    pub companion_raw: usize,
    /// Companion rows removed by the subscriber set.
    pub companion_excluded: usize,
    /// Size of the subscriber set, when one was loaded.
    pub subscriber_count: Option<usize>,
}
