//! In-memory representation of one `.strings` file.

use std::collections::HashMap;

use super::entry::Entry;

/// Ordered entries plus a key index.
///
/// `entries` keeps every parsed record in order of appearance and drives output
/// order. `by_key` resolves each key to its *latest* occurrence, so a table with
/// a duplicated key lists both records but looks up only the later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// 出現順のエントリ
    entries: Vec<Entry>,
    /// キー → `entries` 内の位置（重複時は後勝ち）
    by_key: HashMap<String, usize>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and points its key at it.
    ///
    /// Returns `true` when the key was already present, i.e. an earlier entry
    /// has just been shadowed in the index.
    pub(crate) fn push(&mut self, entry: Entry) -> bool {
        let index = self.entries.len();
        let shadowed = self.by_key.insert(entry.key().to_string(), index).is_some();
        self.entries.push(entry);
        shadowed
    }

    /// Entries in output order, duplicates included.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks up the latest entry recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.by_key.get(key).and_then(|&index| self.entries.get(index))
    }

    #[must_use]
    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Keys in output order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn unique_keys(&self) -> usize {
        self.by_key.len()
    }
}
