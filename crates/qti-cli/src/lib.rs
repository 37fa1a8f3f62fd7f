//! Library side of the `qti-studio` command line.

pub mod ingest;
pub mod logging;
pub mod output;
