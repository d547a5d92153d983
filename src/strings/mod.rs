//! `.strings` table model, parser, merge and writer.
//!
//! The functions here are pure: no file system access, no external processes.

mod entry;
mod error;
mod merge;
mod parser;
mod table;
mod writer;

pub use entry::Entry;
pub use error::FormatError;
pub use merge::merge;
pub use parser::parse;
pub use table::Table;
pub use writer::serialize;
