use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::debug;

use rosterkit_cli::pipeline::{
    ConvertRequest, default_group_output_path, default_output_path, run_convert_pipeline,
};
use rosterkit_cli::types::ConvertResult;
use rosterkit_model::{FREQ_MAP, SENIORITY_MAP, TITLE_MAP};

use crate::cli::ConvertArgs;
use crate::summary::apply_table_style;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    if !args.input.exists() {
        bail!("input file not found: {}", args.input.display());
    }

    let request = ConvertRequest {
        input: args.input.clone(),
        output: args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input)),
        group_output: args
            .group_output
            .clone()
            .unwrap_or_else(|| default_group_output_path(&args.input)),
        subscribers: args.subscribers.clone(),
        activity: resolve_activity(args.activity.as_deref()),
    };
    debug!(
        output = %request.output.display(),
        group_output = %request.group_output.display(),
        activity = %request.activity,
        "resolved convert request"
    );

    run_convert_pipeline(&request)
}

pub fn run_mappings() -> Result<()> {
    print_map("Job title", &TITLE_MAP);
    print_map("Seniority", &SENIORITY_MAP);
    print_map("Attendance", &FREQ_MAP);
    Ok(())
}

fn print_map(label: &str, map: &std::collections::HashMap<&'static str, &'static str>) {
    let mut entries: Vec<(&str, &str)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_unstable();
    let mut table = Table::new();
    table.set_header(vec!["Survey answer", "Tag"]);
    apply_table_style(&mut table);
    for (raw, tag) in entries {
        table.add_row(vec![raw, tag]);
    }
    println!("{label}:");
    println!("{table}");
}

/// Resolve the activity label: the flag wins and is passed through
/// verbatim; otherwise ask interactively when stdin is a terminal;
/// otherwise fall back to an empty label. Only the prompted answer is
/// trimmed, since it ends with the newline the user typed.
fn resolve_activity(flag: Option<&str>) -> String {
    if let Some(activity) = flag {
        return activity.to_string();
    }
    if !io::stdin().is_terminal() {
        return String::new();
    }
    prompt_activity().unwrap_or_default()
}

fn prompt_activity() -> Option<String> {
    eprint!("Activity label (e.g. 講座型(202506數創小聚)): ");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    Some(line.trim().to_string())
}
