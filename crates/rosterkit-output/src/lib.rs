//! CSV output generation.
//!
//! Both outputs are written as UTF-8 with a byte-order mark so that
//! spreadsheet tools on Traditional Chinese systems pick the right
//! encoding when double-clicked.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use rosterkit_model::{COMPANION_HEADERS, CompanionRow, KIT_HEADERS, KitRow};

/// UTF-8 byte-order mark prepended to every output file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors that can occur while writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create or write the output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a row as CSV.
    #[error("failed to serialize CSV for {path}: {message}")]
    CsvSerialize { path: PathBuf, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Write the primary CRM-import CSV. An empty row set still produces a
/// header-only file with the fixed column order.
pub fn write_kit_csv(path: &Path, rows: &[KitRow]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    if rows.is_empty() {
        writer
            .write_record(KIT_HEADERS)
            .map_err(|e| csv_error(path, &e))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| csv_error(path, &e))?;
    }
    finish(writer, path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote kit csv");
    Ok(())
}

/// Write the companion-contact CSV. An empty row set still produces a
/// header-only file so downstream imports see a well-formed table.
pub fn write_companion_csv(path: &Path, rows: &[CompanionRow]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    if rows.is_empty() {
        writer
            .write_record(COMPANION_HEADERS)
            .map_err(|e| csv_error(path, &e))?;
    } else {
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| csv_error(path, &e))?;
        }
    }
    finish(writer, path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote companion csv");
    Ok(())
}

fn bom_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
    let file = File::create(path).map_err(|e| OutputError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut inner = BufWriter::new(file);
    inner.write_all(UTF8_BOM).map_err(|e| OutputError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(csv::Writer::from_writer(inner))
}

fn finish(writer: csv::Writer<BufWriter<File>>, path: &Path) -> Result<()> {
    writer
        .into_inner()
        .map_err(|e| OutputError::CsvSerialize {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .flush()
        .map_err(|e| OutputError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

fn csv_error(path: &Path, error: &csv::Error) -> OutputError {
    OutputError::CsvSerialize {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterkit_model::COMPANION_NAME;
    use tempfile::tempdir;

    fn kit_row() -> KitRow {
        KitRow {
            purchaser_name: "王小美".to_string(),
            purchaser_email: "a@Test.com".to_string(),
            attendee_name: "王小美".to_string(),
            attendee_email: "a@test.com ".to_string(),
            title: "學生 Student".to_string(),
            seniority: "10年以上".to_string(),
            frequency: "1次".to_string(),
            title_new: "仍在學：學生".to_string(),
            seniority_new: "年資：我還是學生".to_string(),
            frequency_new: "參與頻率：參加 2 次".to_string(),
            activity: "講座型".to_string(),
            tag: "仍在學：學生,年資：我還是學生".to_string(),
            name_eq: 1,
            email_eq: 1,
            name_email_label: "同一個人".to_string(),
        }
    }

    #[test]
    fn kit_csv_starts_with_bom_and_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_kit_csv(&path, &[kit_row()]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("訂購人姓名,訂購人Email"));
        let data = lines.next().unwrap();
        assert!(data.contains("同一個人"));
        assert!(data.contains("1,1"));
    }

    #[test]
    fn companion_csv_serializes_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("group.csv");
        let rows = vec![CompanionRow {
            group_ticket_email: "new@test.com".to_string(),
            name: COMPANION_NAME.to_string(),
            tags: "講座型".to_string(),
        }];
        write_companion_csv(&path, &rows).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text.lines().next().unwrap(), "group_ticket_email,name,tags");
        assert!(text.contains("new@test.com,數創夥伴,講座型"));
    }

    #[test]
    fn empty_kit_list_is_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_kit_csv(&path, &[]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text.trim_end(), KIT_HEADERS.join(","));
    }

    #[test]
    fn empty_companion_list_is_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("group.csv");
        write_companion_csv(&path, &[]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text.trim_end(), "group_ticket_email,name,tags");
    }

    #[test]
    fn unwritable_path_is_a_file_write_error() {
        let result = write_companion_csv(Path::new("/nonexistent/dir/out.csv"), &[]);
        assert!(matches!(result, Err(OutputError::FileWrite { .. })));
    }
}
