//! Convert pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the registration export through the encoding chain
//! 2. **Transform**: Project, remap, reconcile, and tag every row
//! 3. **Subscribers**: Load the exclusion set (degraded to none on failure)
//! 4. **Companions**: Extract and filter the plus-one contact list
//! 5. **Output**: Write both BOM-prefixed CSVs
//!
//! Only stage 1 and stage 5 failures abort the run; the subscriber stage
//! degrades with a warning.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use rosterkit_ingest::{load_subscriber_set, read_csv_table};
use rosterkit_output::{write_companion_csv, write_kit_csv};
use rosterkit_transform::{convert_rows, extract_companions};

use crate::types::ConvertResult;

/// A fully resolved convert request: all paths decided, activity label
/// already resolved. The pipeline never prompts.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub group_output: PathBuf,
    pub subscribers: Option<PathBuf>,
    pub activity: String,
}

/// Run the full convert pipeline.
pub fn run_convert_pipeline(request: &ConvertRequest) -> Result<ConvertResult> {
    // Stage 1: Ingest
    let ingest_span = info_span!("ingest", input = %request.input.display());
    let ingest_start = Instant::now();
    let table = ingest_span
        .in_scope(|| read_csv_table(&request.input))
        .with_context(|| format!("read registration export {}", request.input.display()))?;
    info!(
        rows = table.len(),
        columns = table.headers.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // Stage 2: Transform
    let transform_span = info_span!("transform");
    let kit_rows = transform_span.in_scope(|| convert_rows(&table, &request.activity));

    // Stage 3: Subscribers (warn-and-continue on every failure)
    let subscribers = request
        .subscribers
        .as_deref()
        .and_then(load_subscribers_degraded);
    let subscriber_count = subscribers.as_ref().map(BTreeSet::len);

    // Stage 4: Companions
    let companion_span = info_span!("companions");
    let companions = companion_span
        .in_scope(|| extract_companions(&table, subscribers.as_ref(), &request.activity));
    if companions.column_present {
        info!(
            raw = companions.raw_count,
            excluded = companions.excluded,
            kept = companions.rows.len(),
            "companion list built"
        );
    }

    // Stage 5: Output
    let output_span = info_span!("output");
    output_span.in_scope(|| -> Result<()> {
        write_kit_csv(&request.output, &kit_rows)
            .with_context(|| format!("write primary output {}", request.output.display()))?;
        write_companion_csv(&request.group_output, &companions.rows).with_context(|| {
            format!("write companion output {}", request.group_output.display())
        })?;
        Ok(())
    })?;

    Ok(ConvertResult {
        input: request.input.clone(),
        output: request.output.clone(),
        group_output: request.group_output.clone(),
        activity: request.activity.clone(),
        input_rows: table.len(),
        kit_rows: kit_rows.len(),
        companion_rows: companions.rows.len(),
        companion_raw: companions.raw_count,
        companion_excluded: companions.excluded,
        subscriber_count,
    })
}

/// Load the subscriber set, degrading to `None` with a warning on any
/// failure: a missing or unreadable list, or one without an email
/// column, skips the exclusion step rather than aborting the run.
fn load_subscribers_degraded(path: &Path) -> Option<BTreeSet<String>> {
    match load_subscriber_set(path) {
        Ok(set) => {
            info!(path = %path.display(), subscribers = set.len(), "subscriber set loaded");
            Some(set)
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "skipping subscriber exclusion"
            );
            None
        }
    }
}

/// Default primary-output path: `<stem>_kit.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    with_stem_suffix(input, "_kit.csv")
}

/// Default companion-output path: `<stem>_group_new_list.csv` next to the
/// input.
pub fn default_group_output_path(input: &Path) -> PathBuf {
    with_stem_suffix(input, "_group_new_list.csv")
}

fn with_stem_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}{suffix}"))
}
