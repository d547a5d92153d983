//! strings-merge
//!
//! Incremental localization for `.strings` tables: merges a freshly extracted
//! table with the previously translated one, keeping existing translations and
//! adopting the new comments and ordering.

pub mod config;
pub mod driver;
pub mod strings;

pub use strings::{
    Entry,
    FormatError,
    Table,
    merge,
    parse,
    serialize,
};
