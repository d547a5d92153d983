//! File-level driver around the pure [`crate::strings`] functions.
//!
//! Everything that touches the file system lives here: reading the previous
//! and extracted tables, writing the merged result, discovering sidecar files
//! and running a batch with per-file failure isolation.

mod batch;
mod discovery;
mod error;
mod pipeline;

pub use batch::{
    BatchReport,
    run_batch,
};
pub use discovery::{
    JobMode,
    MergeJob,
    discover_jobs,
};
pub use error::MergeError;
pub use pipeline::{
    MergeOutcome,
    adopt_file,
    merge_files,
    read_table,
};
