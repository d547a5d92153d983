//! Key-based merge of a previously translated table with a freshly extracted one.

use super::table::Table;

/// Merges `old` (authoritative for values) into the structure of `new`.
///
/// The result follows `new.entries()` exactly. For a key known to `old`, the
/// comments come from `new` and key/value/translation line from `old`; any
/// other entry is taken from `new` unchanged. Keys present only in `old` are
/// dropped.
#[must_use]
pub fn merge(old: &Table, new: &Table) -> Table {
    let mut merged = Table::new();
    let mut preserved = 0_usize;

    for entry in new.entries() {
        let entry = match old.get(entry.key()) {
            Some(translated) => {
                preserved += 1;
                translated.clone().with_comments(entry.comments().to_vec())
            }
            None => entry.clone(),
        };
        merged.push(entry);
    }

    let dropped = old.keys().filter(|key| !new.contains_key(key)).count();
    tracing::debug!(
        "Merged {} entries: {} translations preserved, {} new, {} stale dropped",
        merged.len(),
        preserved,
        merged.len() - preserved,
        dropped
    );

    merged
}
