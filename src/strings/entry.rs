//! Entry model: one translation record of a `.strings` table.

use std::sync::LazyLock;

use regex::Regex;

use super::error::FormatError;

/// `"<key>" = "<value>";` over a whole line (terminator already removed).
#[allow(clippy::expect_used)]
static TRANSLATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"(.+)" = "(.+)";$"#).expect("translation line pattern is valid")
});

/// Splits a translation line into its key and value.
///
/// The line must not carry its `\n` terminator. Returns `None` when the line
/// does not match the translation line grammar.
fn split_translation_line(line: &str) -> Option<(&str, &str)> {
    let captures = TRANSLATION_LINE.captures(line)?;
    let key = captures.get(1)?.as_str();
    let value = captures.get(2)?.as_str();
    Some((key, value))
}

/// One localization record.
///
/// `key` and `value` are always derived from `raw_line`; the only way to build an
/// `Entry` is through [`Entry::new`], which rejects lines outside the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// コメントブロックの各行（改行込み、そのまま保持）
    comments: Vec<String>,
    /// キー名
    key: String,
    /// 翻訳値
    value: String,
    /// 元の翻訳行（改行なし）
    raw_line: String,
}

impl Entry {
    /// Builds an entry from its comment block and translation line.
    ///
    /// # Errors
    /// `FormatError::InvalidTranslationLine` if `raw_line` does not match the grammar.
    pub fn new(comments: Vec<String>, raw_line: impl Into<String>) -> Result<Self, FormatError> {
        let raw_line = raw_line.into();
        let (key, value) = split_translation_line(&raw_line)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .ok_or_else(|| FormatError::InvalidTranslationLine { line: raw_line.clone() })?;

        Ok(Self { comments, key, value, raw_line })
    }

    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Returns this entry with its comment block replaced.
    ///
    /// Key, value and translation line are untouched.
    #[must_use]
    pub fn with_comments(self, comments: Vec<String>) -> Self {
        Self { comments, ..self }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(r#""hi" = "Hi";"#, "hi", "Hi")]
    #[case(r#""Welcome %@" = "Bienvenue %@";"#, "Welcome %@", "Bienvenue %@")]
    #[case(r#""a" = "b" = "c";"#, r#"a" = "b"#, "c")]
    #[case(r#""こんにちは" = "你好";"#, "こんにちは", "你好")]
    fn split_translation_line_matches(
        #[case] line: &str,
        #[case] key: &str,
        #[case] value: &str,
    ) {
        assert_eq!(split_translation_line(line), Some((key, value)));
    }

    #[rstest]
    #[case(r#""" = "empty key";"#)]
    #[case(r#""key" = "";"#)]
    #[case(r#""key" = "value""#)]
    #[case(r#""key"="value";"#)]
    #[case(r#" "key" = "value";"#)]
    #[case("\"key\" = \"value\";\r")]
    #[case("/* comment */")]
    #[case("")]
    fn split_translation_line_rejects(#[case] line: &str) {
        assert_eq!(split_translation_line(line), None);
    }

    #[rstest]
    fn new_derives_key_and_value() {
        let entry = Entry::new(vec!["/* Greeting */\n".to_string()], r#""hi" = "Hi";"#).unwrap();

        assert_that!(entry.key(), eq("hi"));
        assert_that!(entry.value(), eq("Hi"));
        assert_that!(entry.raw_line(), eq(r#""hi" = "Hi";"#));
        assert_eq!(entry.comments(), ["/* Greeting */\n".to_string()]);
    }

    #[rstest]
    fn new_rejects_line_outside_grammar() {
        let result = Entry::new(vec![], "hi = Hi");

        assert!(matches!(
            result,
            Err(FormatError::InvalidTranslationLine { line }) if line == "hi = Hi"
        ));
    }

    #[rstest]
    fn with_comments_keeps_translation() {
        let entry = Entry::new(vec!["/* old */\n".to_string()], r#""hi" = "Bonjour";"#).unwrap();

        let entry = entry.with_comments(vec!["/* new */\n".to_string()]);

        assert_eq!(entry.comments(), ["/* new */\n".to_string()]);
        assert_that!(entry.value(), eq("Bonjour"));
        assert_that!(entry.raw_line(), eq(r#""hi" = "Bonjour";"#));
    }
}
