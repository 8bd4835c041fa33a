//! Session input history.
//!
//! Lines typed during the session can be recalled with Up/Down. Nothing is
//! written to disk; history ends with the process.

/// Default number of entries kept per session.
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// Input history with bounded storage.
#[derive(Debug)]
pub struct InputHistory {
    /// Stored history entries (oldest first).
    entries: Vec<String>,
    /// Maximum number of entries; zero disables history.
    capacity: usize,
    /// Current position in history (None = at newest/draft position).
    position: Option<usize>,
    /// Unsaved input, restored when navigating back past the newest entry.
    draft: String,
}

impl Default for InputHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_SIZE)
    }
}

impl InputHistory {
    /// Creates a new empty input history with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty input history holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            position: None,
            draft: String::new(),
        }
    }

    /// Adds an entry to the history.
    /// Skips blank entries and consecutive duplicates.
    pub fn push(&mut self, entry: &str) {
        self.reset_position();

        let entry = entry.trim();
        if entry.is_empty() || self.capacity == 0 {
            return;
        }

        if self.entries.last().map(String::as_str) == Some(entry) {
            return;
        }

        self.entries.push(entry.to_string());

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
    }

    /// Navigates to the previous (older) entry in history.
    /// Returns the entry to display, or None if at the oldest entry.
    pub fn previous(&mut self, current_input: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        match self.position {
            None => {
                self.draft = current_input.to_string();
                self.position = Some(self.entries.len() - 1);
            }
            Some(pos) if pos > 0 => {
                self.position = Some(pos - 1);
            }
            Some(_) => return None,
        }

        self.position.map(|pos| self.entries[pos].as_str())
    }

    /// Navigates to the next (newer) entry in history.
    /// Returns the draft when stepping past the newest entry, or None if
    /// not navigating.
    pub fn next(&mut self) -> Option<&str> {
        match self.position {
            None => None,
            Some(pos) if pos + 1 < self.entries.len() => {
                self.position = Some(pos + 1);
                Some(self.entries[pos + 1].as_str())
            }
            Some(_) => {
                self.position = None;
                Some(self.draft.as_str())
            }
        }
    }

    /// Resets the navigation position without clearing history.
    pub fn reset_position(&mut self) {
        self.position = None;
        self.draft.clear();
    }

    /// Returns the number of entries in history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all history entries (oldest first).
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_push() {
        let mut history = InputHistory::new();
        history.push("first");
        history.push("second");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_history_skip_blank() {
        let mut history = InputHistory::new();
        history.push("");
        history.push("   ");
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_skip_consecutive_duplicates() {
        let mut history = InputHistory::new();
        history.push("same");
        history.push("same");
        history.push("  same ");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_allows_non_consecutive_duplicates() {
        let mut history = InputHistory::new();
        history.push("first");
        history.push("second");
        history.push("first");
        assert_eq!(history.entries(), &["first", "second", "first"]);
    }

    #[test]
    fn test_history_navigation() {
        let mut history = InputHistory::new();
        history.push("first");
        history.push("second");
        history.push("third");

        assert_eq!(history.previous("current"), Some("third"));
        assert_eq!(history.previous("current"), Some("second"));
        assert_eq!(history.previous("current"), Some("first"));
        assert_eq!(history.previous("current"), None);

        assert_eq!(history.next(), Some("second"));
        assert_eq!(history.next(), Some("third"));
        assert_eq!(history.next(), Some("current"));
        assert_eq!(history.next(), None);
    }

    #[test]
    fn test_history_capacity() {
        let mut history = InputHistory::with_capacity(3);
        for i in 0..10 {
            history.push(&format!("entry{i}"));
        }
        assert_eq!(history.entries(), &["entry7", "entry8", "entry9"]);
    }

    #[test]
    fn test_history_zero_capacity_disables() {
        let mut history = InputHistory::with_capacity(0);
        history.push("anything");
        assert!(history.is_empty());
        assert_eq!(history.previous(""), None);
    }

    #[test]
    fn test_push_resets_navigation() {
        let mut history = InputHistory::new();
        history.push("old");
        history.previous("draft");
        history.push("new");
        assert_eq!(history.previous(""), Some("new"));
    }

    #[test]
    fn test_empty_history_navigation() {
        let mut history = InputHistory::new();
        assert_eq!(history.previous("input"), None);
        assert_eq!(history.next(), None);
    }
}
