//! Record score leaderboard
//!
//! Tracks the top 10 scores. A freshly earned record enters the table as a
//! pending entry with no name; the name-entry flow fills it in before the
//! table is persisted.

/// Maximum number of records to keep
pub const MAX_RECORDS: usize = 10;

/// A single record entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub score: u32,
    /// None while the player is still typing a name for it
    pub name: Option<String>,
}

/// Record leaderboard, sorted descending by score
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    entries: Vec<RecordEntry>,
}

impl RecordTable {
    /// Build a table from persisted (score, name) pairs, restoring the
    /// descending sort in case the file was edited by hand.
    pub fn from_pairs(pairs: Vec<(u32, String)>) -> Self {
        let mut entries: Vec<RecordEntry> = pairs
            .into_iter()
            .map(|(score, name)| RecordEntry {
                score,
                name: Some(name),
            })
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_RECORDS);
        Self { entries }
    }

    /// Named entries as persistable (score, name) pairs. A still-pending
    /// entry is skipped rather than saved without a name.
    pub fn to_pairs(&self) -> Vec<(u32, String)> {
        self.entries
            .iter()
            .filter_map(|e| e.name.clone().map(|name| (e.score, name)))
            .collect()
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Check if a score qualifies for the table
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_RECORDS {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't
    /// qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert a qualifying score as a nameless placeholder at its rank.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn insert_pending(&mut self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = RecordEntry { score, name: None };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_RECORDS);
        Some(rank)
    }

    /// Fill in the pending entry's name. Returns false when no entry is
    /// pending (the placeholder may have been pushed off the table).
    pub fn commit_pending(&mut self, name: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.name.is_none()) {
            Some(entry) => {
                entry.name = Some(name.to_string());
                true
            }
            None => false,
        }
    }

    /// Whether a placeholder is still awaiting a name
    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(|e| e.name.is_none())
    }
}
