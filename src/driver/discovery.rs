//! Finds `.old`/`.new` sidecar pairs inside language directories.
//!
//! The extraction tools (genstrings, ibtool) and the UTF-16 → UTF-8 conversion
//! run before this step. Discovery only looks at files that already exist.

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use super::error::MergeError;
use crate::config::{
    MergeSettings,
    NameMatcher,
};

/// How a discovered file is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobMode {
    /// Merge existing translations into the extracted table.
    Merge,
    /// Development language: the extracted table is the translation.
    Adopt,
}

/// One strings file to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeJob {
    /// Language directory name without extension (`fr` for `fr.lproj`)
    pub language: String,
    /// Previously translated table
    pub old: PathBuf,
    /// Freshly extracted table
    pub new: PathBuf,
    /// Destination, i.e. the strings file itself
    pub dest: PathBuf,
    pub mode: JobMode,
}

/// Lists merge jobs for every language directory directly under `root`.
///
/// A job is created for each `<name><newSuffix>` file whose `<name>` matches
/// `stringsFilePatterns`. Jobs are sorted by destination path.
///
/// # Errors
/// `MergeError::Io` / `MergeError::MissingInput` if `root` or a language
/// directory cannot be listed.
pub fn discover_jobs(
    root: &Path,
    settings: &MergeSettings,
    matcher: &NameMatcher,
) -> Result<Vec<MergeJob>, MergeError> {
    let mut jobs = Vec::new();

    for dir in list_dir(root)? {
        let Some(dir_name) = file_name(&dir) else { continue };
        if !dir.is_dir() || !matcher.is_language_dir(dir_name) {
            continue;
        }

        let language = language_of(dir_name).to_string();
        let mode = if settings.development_language.as_deref() == Some(language.as_str()) {
            JobMode::Adopt
        } else {
            JobMode::Merge
        };

        for new in list_dir(&dir)? {
            let Some(strings_name) =
                file_name(&new).and_then(|name| name.strip_suffix(settings.new_suffix.as_str()))
            else {
                continue;
            };
            if !new.is_file() || !matcher.is_strings_file(strings_name) {
                continue;
            }

            let dest = dir.join(strings_name);
            let old = dir.join(format!("{strings_name}{}", settings.old_suffix));
            tracing::debug!("Found {} ({:?})", dest.display(), mode);
            jobs.push(MergeJob { language: language.clone(), old, new, dest, mode });
        }
    }

    jobs.sort_by(|a, b| a.dest.cmp(&b.dest));
    tracing::debug!("Discovered {} jobs under {}", jobs.len(), root.display());
    Ok(jobs)
}

/// ディレクトリ直下のパス一覧
fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, MergeError> {
    fs::read_dir(dir)
        .and_then(|entries| {
            entries.map(|entry| entry.map(|e| e.path())).collect::<std::io::Result<Vec<_>>>()
        })
        .map_err(|e| MergeError::from_io(dir, e))
}

/// UTF-8 でないファイル名は対象外
fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// `fr.lproj` → `fr`, `zh-Hans.lproj` → `zh-Hans`
fn language_of(dir_name: &str) -> &str {
    dir_name.split_once('.').map_or(dir_name, |(language, _)| language)
}
