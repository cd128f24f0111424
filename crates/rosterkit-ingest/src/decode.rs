//! Byte-level file reading with a fixed encoding fallback chain.
//!
//! Registration exports arrive either as UTF-8 (with or without a BOM) or
//! as Big5/CP950 when the platform export was opened and re-saved through
//! a Traditional Chinese spreadsheet. The chain tries, in order:
//! UTF-8 with BOM, plain UTF-8, Big5. The first strict decode wins; if
//! all three fail the file is unreadable and the run aborts.

use std::path::Path;

use crate::error::{IngestError, Result};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Names of the attempted encodings, in attempt order.
pub const ENCODING_ATTEMPTS: [&str; 3] = ["utf-8-sig", "utf-8", "big5"];

/// A decoded text file together with the encoding that succeeded.
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
}

/// Read a file and decode it through the fallback chain.
pub fn read_to_string(path: &Path) -> Result<DecodedText> {
    let bytes = read_bytes(path)?;
    let decoded = decode(&bytes).ok_or_else(|| IngestError::Decode {
        path: path.to_path_buf(),
        tried: ENCODING_ATTEMPTS.join(", "),
    })?;
    tracing::debug!(
        path = %path.display(),
        encoding = decoded.encoding,
        bytes = bytes.len(),
        "decoded input file"
    );
    Ok(decoded)
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn decode(bytes: &[u8]) -> Option<DecodedText> {
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM)
        && let Ok(text) = std::str::from_utf8(rest)
    {
        return Some(DecodedText {
            text: text.to_string(),
            encoding: "utf-8-sig",
        });
    }
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(DecodedText {
            text: text.to_string(),
            encoding: "utf-8",
        });
    }
    encoding_rs::BIG5
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| DecodedText {
            text: text.into_owned(),
            encoding: "big5",
        })
}
