//! Registration data ingestion.
//!
//! Reads the registration export and the optional subscriber list into
//! memory. All reads go through a fixed encoding fallback chain (UTF-8
//! with BOM, plain UTF-8, Big5) before CSV parsing; a file that fails
//! every decode is a fatal ingest error.

pub mod decode;
pub mod error;
pub mod subscribers;
pub mod table;

pub use decode::{DecodedText, ENCODING_ATTEMPTS, read_to_string};
pub use error::{IngestError, Result};
pub use subscribers::{find_email_column, load_subscriber_set};
pub use table::{RawTable, get_field, read_csv_table};
