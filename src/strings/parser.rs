//! Line-oriented `.strings` parser.
//!
//! Single forward pass: comment block, translation line, optional blank lines,
//! repeated until the input is exhausted.

use std::iter::Peekable;

use super::entry::Entry;
use super::error::FormatError;
use super::table::Table;

/// 1 始まりの行番号と、改行を含む行本体
type NumberedLine<'a> = (usize, &'a str);

/// Parses `.strings` text into a [`Table`].
///
/// Empty input yields an empty table. Duplicate keys are kept in order and
/// only shadowed in the key index.
///
/// # Errors
/// - `FormatError::UnterminatedComment` when input ends inside a comment block
/// - `FormatError::MissingTranslationLine` when a comment block is not followed
///   by a translation line
pub fn parse(text: &str) -> Result<Table, FormatError> {
    let mut lines = text.split_inclusive('\n').enumerate().map(|(i, line)| (i + 1, line)).peekable();
    let mut table = Table::new();

    while let Some(first) = lines.next() {
        let (comments, block_end) = collect_comment_block(first, &mut lines)?;

        let Some((number, line)) = lines.next() else {
            return Err(FormatError::MissingTranslationLine { line: block_end + 1 });
        };
        let entry = Entry::new(comments, strip_terminator(line))
            .map_err(|_| FormatError::MissingTranslationLine { line: number })?;

        skip_blank_lines(&mut lines);

        let key = entry.key().to_string();
        if table.push(entry) {
            tracing::warn!("Duplicate key {:?}: later occurrence shadows earlier one", key);
        }
    }

    tracing::debug!("Parsed {} entries ({} unique keys)", table.len(), table.unique_keys());
    Ok(table)
}

/// Collects the comment block starting at `first`.
///
/// The first line is taken as-is. A self-closing `/* ... */` line is a block on
/// its own; otherwise lines accumulate until one ends with `*/`, whatever lies
/// in between. Returns the block and the number of its last line.
fn collect_comment_block<'a, I>(
    first: NumberedLine<'a>,
    lines: &mut I,
) -> Result<(Vec<String>, usize), FormatError>
where
    I: Iterator<Item = NumberedLine<'a>>,
{
    let (start, mut line) = first;
    let mut block = vec![line.to_string()];
    let mut end = start;

    if is_single_line_comment(strip_terminator(line)) {
        return Ok((block, end));
    }

    while !is_comment_end(strip_terminator(line)) {
        (end, line) = lines.next().ok_or(FormatError::UnterminatedComment { line: start })?;
        block.push(line.to_string());
    }

    Ok((block, end))
}

/// 翻訳行の直後に続く空行（`"\n"` のみの行）を読み飛ばす
fn skip_blank_lines<'a, I>(lines: &mut Peekable<I>)
where
    I: Iterator<Item = NumberedLine<'a>>,
{
    while lines.next_if(|&(_, line)| line == "\n").is_some() {}
}

/// `/*` で始まり `*/` で終わる 1 行コメント
fn is_single_line_comment(line: &str) -> bool {
    line.len() >= 4 && line.starts_with("/*") && line.ends_with("*/")
}

/// `*/` で終わる行
fn is_comment_end(line: &str) -> bool {
    line.ends_with("*/")
}

/// Removes a trailing `\n`, if any.
fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    fn parse_empty_input() {
        let table = parse("").unwrap();

        assert_that!(table.is_empty(), eq(true));
    }

    #[rstest]
    fn parse_single_line_comments_and_blank_separators() {
        let text = "/* Greeting */\n\"hi\" = \"Hi\";\n\n\n/* Farewell */\n\"bye\" = \"Bye\";\n";

        let table = parse(text).unwrap();

        assert_that!(table.keys().collect::<Vec<_>>(), elements_are![eq(&"hi"), eq(&"bye")]);
        let hi = table.get("hi").unwrap();
        assert_eq!(hi.comments(), ["/* Greeting */\n".to_string()]);
        assert_that!(hi.raw_line(), eq("\"hi\" = \"Hi\";"));
        assert_that!(table.get("bye").map(Entry::value), some(eq("Bye")));
    }

    #[rstest]
    fn parse_multi_line_comment_block() {
        let text = "/* Class = \"UILabel\";\n   text = \"Title\";\n   ObjectID = \"abc\"; */\n\"abc.text\" = \"Title\";\n";

        let table = parse(text).unwrap();

        let entry = table.get("abc.text").unwrap();
        assert_eq!(
            entry.comments(),
            [
                "/* Class = \"UILabel\";\n".to_string(),
                "   text = \"Title\";\n".to_string(),
                "   ObjectID = \"abc\"; */\n".to_string(),
            ]
        );
    }

    #[rstest]
    fn parse_accepts_arbitrary_lines_inside_comment_block() {
        let text = "/*\n\"not\" = \"a translation\";\n\n*/\n\"k\" = \"v\";\n";

        let table = parse(text).unwrap();

        assert_that!(table.len(), eq(1));
        assert_that!(table.entries()[0].comments().len(), eq(4));
        assert_that!(table.entries()[0].key(), eq("k"));
    }

    #[rstest]
    fn parse_block_opened_without_delimiter() {
        // 先頭行は区切り記号がなくてもブロックの開始として扱われる
        let text = "note\nmore */\n\"k\" = \"v\";\n";

        let table = parse(text).unwrap();

        assert_eq!(table.entries()[0].comments(), ["note\n".to_string(), "more */\n".to_string()]);
    }

    #[rstest]
    fn parse_leading_blank_line_joins_comment_block() {
        let table = parse("\n/* a */\n\"k\" = \"v\";\n").unwrap();

        assert_eq!(table.entries()[0].comments(), ["\n".to_string(), "/* a */\n".to_string()]);
    }

    #[rstest]
    fn parse_last_line_without_terminator() {
        let table = parse("/* c */\n\"k\" = \"v\";").unwrap();

        assert_that!(table.get("k").map(Entry::raw_line), some(eq("\"k\" = \"v\";")));
    }

    #[rstest]
    fn parse_keeps_duplicate_keys_in_order() {
        let text = "/* a */\n\"dup\" = \"one\";\n/* b */\n\"dup\" = \"two\";\n";

        let table = parse(text).unwrap();

        assert_that!(table.len(), eq(2));
        assert_that!(table.unique_keys(), eq(1));
        assert_that!(table.get("dup").map(Entry::value), some(eq("two")));
    }

    #[rstest]
    #[case::trailing_comment("/* a */\n\"k\" = \"v\";\n/* dangling */\n", 4)]
    #[case::comment_then_garbage("/* a */\nnot a translation\n", 2)]
    #[case::comment_then_blank("/* a */\n\n\"k\" = \"v\";\n", 2)]
    #[case::comment_at_eof_without_newline("/* a */", 2)]
    fn parse_missing_translation_line(#[case] text: &str, #[case] line: usize) {
        assert_eq!(parse(text), Err(FormatError::MissingTranslationLine { line }));
    }

    #[rstest]
    #[case::open_comment("/* never closed\n\"k\" = \"v\";\n", 1)]
    #[case::only_blank_line("\n", 1)]
    #[case::second_entry("/* a */\n\"k\" = \"v\";\n/* b\n", 3)]
    fn parse_unterminated_comment(#[case] text: &str, #[case] line: usize) {
        assert_eq!(parse(text), Err(FormatError::UnterminatedComment { line }));
    }

    #[rstest]
    fn parse_is_repeatable() {
        let text = "/* a */\n\"k\" = \"v\";\n";

        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }
}
