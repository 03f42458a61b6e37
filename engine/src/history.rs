//! FILENAME: engine/src/history.rs
//! PURPOSE: Append-only record of successful calculations.
//! CONTEXT: Every successful evaluation appends one entry. Entries are
//! never mutated or removed; insertion order is chronological order.
//! In-memory only, lifetime tied to the running session.

use serde::{Deserialize, Serialize};

/// An immutable record of a past equation and its formatted result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The equation exactly as it stood before evaluation (unsanitized).
    pub equation: String,
    /// The formatted result that replaced it on the display.
    pub result: String,
}

impl HistoryEntry {
    pub fn new(equation: impl Into<String>, result: impl Into<String>) -> Self {
        HistoryEntry {
            equation: equation.into(),
            result: result.into(),
        }
    }
}

/// The append-only history of successful calculations.
///
/// No deduplication, no capacity limit, no persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. This is the only mutation history supports.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterates over entries in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
