//! Registration row transformation.
//!
//! Pure, single-pass derivation of the two output tables from the loaded
//! registration export: categorical remapping through the static lookup
//! tables (with the student override), purchaser/attendee reconciliation,
//! tag assembly, and companion extraction with subscriber filtering.
//!
//! The activity label is threaded in as a plain parameter; resolving it
//! (flag, prompt, or default) is the caller's concern.

pub mod companion;
pub mod convert;
pub mod tag;

pub use companion::{CompanionList, extract_companions};
pub use convert::{convert_row, convert_rows};
pub use tag::build_tag;
