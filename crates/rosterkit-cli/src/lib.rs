//! Library side of the rosterkit CLI: logging setup and the convert
//! pipeline, exposed for integration tests.

pub mod logging;
pub mod pipeline;
pub mod types;
