//! Read → parse → merge → serialize → write, for one file.

use std::fs;
use std::io::{
    self,
    Write,
};
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::MergeError;
use crate::strings::{
    FormatError,
    Table,
    merge,
    parse,
    serialize,
};

/// What [`merge_files`] or [`adopt_file`] wrote to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Existing translations were merged into the extracted table.
    Merged { entries: usize },
    /// The extracted table was written as-is (no previous table, or
    /// development language).
    Adopted { entries: usize },
}

impl MergeOutcome {
    #[must_use]
    pub const fn entries(self) -> usize {
        match self {
            Self::Merged { entries } | Self::Adopted { entries } => entries,
        }
    }
}

/// Reads and parses one strings table file.
///
/// # Errors
/// - `MergeError::MissingInput` if the file does not exist
/// - `MergeError::Format` if it is not UTF-8 or not well-formed
/// - `MergeError::Io` for any other read failure
pub fn read_table(path: &Path) -> Result<Table, MergeError> {
    let bytes = fs::read(path).map_err(|e| MergeError::from_io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| MergeError::Format {
        path: path.to_path_buf(),
        source: FormatError::from(e),
    })?;

    tracing::debug!("Parsing {}", path.display());
    parse(&text).map_err(|source| MergeError::Format { path: path.to_path_buf(), source })
}

/// Serializes `table` and replaces `path` with it.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over `path`, so `path` holds either the old or the complete new
/// content. An existing file's permissions are carried over.
fn write_table(path: &Path, table: &Table) -> Result<(), MergeError> {
    let io_error = |source: io::Error| MergeError::Io { path: path.to_path_buf(), source };
    let dir =
        path.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(serialize(table).as_bytes()).map_err(io_error)?;
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions()).map_err(io_error)?;
    }
    file.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}

/// Merges the translations in `old` into the freshly extracted `new` and
/// writes the result to `dest`.
///
/// When `old` does not exist (first run for a language) the extracted table
/// is adopted instead. Both inputs are parsed before anything is written, so a
/// failure leaves `dest` untouched.
///
/// # Errors
/// - `MergeError::MissingInput` if `new` does not exist
/// - `MergeError::Format` if either input is malformed
/// - `MergeError::Io` for other read/write failures
pub fn merge_files(old: &Path, new: &Path, dest: &Path) -> Result<MergeOutcome, MergeError> {
    let new_table = read_table(new)?;

    let old_table = match read_table(old) {
        Ok(table) => table,
        Err(e) if e.is_missing_file() => {
            tracing::info!("No previous table at {}, adopting extracted strings", old.display());
            write_table(dest, &new_table)?;
            return Ok(MergeOutcome::Adopted { entries: new_table.len() });
        }
        Err(e) => return Err(e),
    };

    let merged = merge(&old_table, &new_table);
    write_table(dest, &merged)?;
    tracing::info!("Merged {} entries into {}", merged.len(), dest.display());

    Ok(MergeOutcome::Merged { entries: merged.len() })
}

/// Writes the extracted table `new` to `dest` without merging.
///
/// The table is still parsed, so a malformed file is reported rather than
/// copied.
///
/// # Errors
/// Same as [`read_table`], plus `MergeError::Io` on write failure.
pub fn adopt_file(new: &Path, dest: &Path) -> Result<MergeOutcome, MergeError> {
    let table = read_table(new)?;
    write_table(dest, &table)?;
    tracing::info!("Adopted {} entries into {}", table.len(), dest.display());

    Ok(MergeOutcome::Adopted { entries: table.len() })
}
