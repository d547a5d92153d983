use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::strings::FormatError;

/// Failure of one file in the merge pipeline.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Input file does not exist
    #[error("File {} does not exist", path.display())]
    MissingInput { path: PathBuf },

    /// Input file exists but is not a well-formed strings table
    #[error("Invalid format in {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// Any other I/O failure (permissions, write errors, ...)
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    /// I/O エラーをパス付きで変換する。`NotFound` は `MissingInput` になる
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingInput { path: path.to_path_buf() }
        } else {
            Self::Io { path: path.to_path_buf(), source }
        }
    }

    /// `true` for the expected "file not there yet" case, as opposed to a
    /// corrupt or unreadable file.
    #[must_use]
    pub const fn is_missing_file(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingInput { path } | Self::Format { path, .. } | Self::Io { path, .. } => {
                path.as_path()
            }
        }
    }
}
