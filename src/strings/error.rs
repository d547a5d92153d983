use thiserror::Error;

/// Text that does not conform to the `.strings` grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// コメントブロックの直後に翻訳行がない
    #[error("line {line}: expected translation line after comment block")]
    MissingTranslationLine { line: usize },

    /// `*/` で閉じられないままファイルが終わった
    #[error("line {line}: comment block is not terminated before end of input")]
    UnterminatedComment { line: usize },

    /// Entry built from a line outside the translation line grammar
    #[error("not a translation line: {line:?}")]
    InvalidTranslationLine { line: String },

    /// Input bytes are not UTF-8
    #[error("input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}
