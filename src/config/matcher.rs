//! Name matcher for language directories and strings table files.

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::MergeSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid language directory pattern '{pattern}': {source}")]
    InvalidLanguageDirPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid strings file pattern '{pattern}': {source}")]
    InvalidStringsFilePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches directory and file names against the configured glob patterns.
///
/// Only bare names are matched (`fr.lproj`, `Localizable.strings`), never paths.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    /// `languageDirPatterns`
    language_dir_set: GlobSet,
    /// `stringsFilePatterns`
    strings_file_set: GlobSet,
}

impl NameMatcher {
    /// Creates a new matcher from settings.
    pub fn new(settings: &MergeSettings) -> Result<Self, MatcherError> {
        let language_dir_set =
            Self::build_glob_set(&settings.language_dir_patterns, |pattern, source| {
                MatcherError::InvalidLanguageDirPattern { pattern, source }
            })?;

        let strings_file_set =
            Self::build_glob_set(&settings.strings_file_patterns, |pattern, source| {
                MatcherError::InvalidStringsFilePattern { pattern, source }
            })?;

        Ok(Self { language_dir_set, strings_file_set })
    }

    /// パターン一覧から `GlobSet` を組み立てる
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn is_language_dir(&self, dir_name: &str) -> bool {
        self.language_dir_set.is_match(dir_name)
    }

    #[must_use]
    pub fn is_strings_file(&self, file_name: &str) -> bool {
        self.strings_file_set.is_match(file_name)
    }
}
