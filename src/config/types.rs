use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languageDirPatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 複数のバリデーションエラーを番号付きで整形する
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings of the `.strings-merge.json` file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeSettings {
    /// Directory names treated as language directories (matched on the name only).
    pub language_dir_patterns: Vec<String>,

    /// Strings table file names inside a language directory.
    pub strings_file_patterns: Vec<String>,

    /// Suffix of the previously translated table, e.g. `Localizable.strings.old`.
    pub old_suffix: String,

    /// Suffix of the freshly extracted table, e.g. `Localizable.strings.new`.
    pub new_suffix: String,

    /// Language whose extracted table is adopted as-is instead of merged.
    ///
    /// Matched against the language directory name without its extension
    /// (`en` for `en.lproj`). `None` merges every language.
    pub development_language: Option<String>,

    /// Delete the `.old`/`.new` sidecars once a file has been merged.
    pub remove_intermediates: bool,
}

/// Command line flags that take precedence over `.strings-merge.json`.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// `--keep-intermediates`
    pub keep_intermediates: bool,
    /// `--development-language`
    pub development_language: Option<String>,
}

impl MergeSettings {
    /// Applies command line flags; unset flags leave the file's values alone.
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if overrides.keep_intermediates {
            self.remove_intermediates = false;
        }
        if let Some(language) = &overrides.development_language {
            self.development_language = Some(language.clone());
        }
    }

    /// # Errors
    /// - Empty or identical suffixes
    /// - Empty pattern list
    /// - Invalid glob pattern
    /// - Empty development language
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.old_suffix.is_empty() {
            errors.push(ValidationError::new(
                "oldSuffix",
                "The suffix cannot be empty. Example: \".old\"",
            ));
        }

        if self.new_suffix.is_empty() {
            errors.push(ValidationError::new(
                "newSuffix",
                "The suffix cannot be empty. Example: \".new\"",
            ));
        }

        if !self.old_suffix.is_empty() && self.old_suffix == self.new_suffix {
            errors.push(ValidationError::new(
                "oldSuffix/newSuffix",
                format!("'oldSuffix' and 'newSuffix' must differ, both are '{}'", self.old_suffix),
            ));
        }

        validate_patterns(
            &mut errors,
            "languageDirPatterns",
            &self.language_dir_patterns,
            "[\"*.lproj\"]",
        );
        validate_patterns(
            &mut errors,
            "stringsFilePatterns",
            &self.strings_file_patterns,
            "[\"*.strings\"]",
        );

        if let Some(language) = &self.development_language
            && language.is_empty()
        {
            errors.push(ValidationError::new(
                "developmentLanguage",
                "The language cannot be empty. Specify a language (e.g., \"en\"), or set it to null",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// パターン一覧が空でなく、すべて有効な glob であることを確認する
fn validate_patterns(
    errors: &mut Vec<ValidationError>,
    field: &str,
    patterns: &[String],
    example: &str,
) {
    if patterns.is_empty() {
        errors.push(ValidationError::new(
            field,
            format!("At least one pattern is required. Example: {example}"),
        ));
    }

    for (index, pattern) in patterns.iter().enumerate() {
        if let Err(e) = globset::Glob::new(pattern) {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                format!("Invalid glob pattern '{pattern}': {e}"),
            ));
        }
    }
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            language_dir_patterns: vec!["*.lproj".to_string()],
            strings_file_patterns: vec!["*.strings".to_string()],
            old_suffix: ".old".to_string(),
            new_suffix: ".new".to_string(),
            development_language: Some("en".to_string()),
            remove_intermediates: true,
        }
    }
}
