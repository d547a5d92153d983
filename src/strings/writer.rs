//! Serialization of a [`Table`] back to `.strings` text.

use super::table::Table;

/// Writes every entry's comment lines followed by its translation line and `\n`.
///
/// No blank separator lines are emitted.
#[must_use]
pub fn serialize(table: &Table) -> String {
    let mut out = String::new();
    for entry in table.entries() {
        for comment in entry.comments() {
            out.push_str(comment);
        }
        out.push_str(entry.raw_line());
        out.push('\n');
    }
    out
}
