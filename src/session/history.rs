//! Submitted-line history with Up/Down recall.
//!
//! Uses the stub type pattern: the struct always exists, behavior is
//! feature-gated.

#![cfg_attr(not(feature = "history"), allow(unused_variables))]

use crate::config::MAX_INPUT;

/// One submitted line, stored trimmed.
pub type HistoryEntry = heapless::String<MAX_INPUT>;

/// Result of moving the history cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Cursor moved; the input becomes this entry
    Entry(&'a str),

    /// Cursor left the history; the session restores the line typed
    /// before browsing started
    Cleared,

    /// Nothing to do
    Unchanged,
}

/// Command history storage.
///
/// When the `history` feature is enabled, keeps up to `N` entries
/// newest-first. When disabled, a zero-size stub that no-ops every
/// operation.
#[derive(Debug, Clone)]
pub struct CommandHistory<const N: usize> {
    #[cfg(feature = "history")]
    entries: heapless::Vec<HistoryEntry, N>,

    #[cfg(feature = "history")]
    cursor: Option<usize>,
}

impl<const N: usize> CommandHistory<N> {
    /// Create empty history.
    #[cfg(feature = "history")]
    pub fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
            cursor: None,
        }
    }

    /// Create empty history (stub version).
    #[cfg(not(feature = "history"))]
    pub fn new() -> Self {
        Self {}
    }

    /// Record a submitted line as the newest entry.
    ///
    /// Blank lines are ignored. Consecutive duplicates are kept.
    #[cfg(feature = "history")]
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || N == 0 {
            return;
        }

        let mut entry = HistoryEntry::new();
        for c in line.chars() {
            if entry.push(c).is_err() {
                break;
            }
        }

        if self.entries.is_full()
            && let Some(evicted) = self.entries.pop()
        {
            tracing::trace!(entry = %evicted, "history full, evicted oldest entry");
        }
        // Cannot fail: a slot was just freed if the buffer was full.
        let _ = self.entries.insert(0, entry);
        self.cursor = None;
    }

    /// Record a submitted line (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn push(&mut self, line: &str) {}

    /// Move towards older entries (Up).
    #[cfg(feature = "history")]
    pub fn recall_older(&mut self) -> Recall<'_> {
        let next = match self.cursor {
            None => 0,
            Some(i) => i + 1,
        };
        if next >= self.entries.len() {
            return Recall::Unchanged;
        }

        self.cursor = Some(next);
        Recall::Entry(&self.entries[next])
    }

    /// Move towards older entries (stub version).
    #[cfg(not(feature = "history"))]
    pub fn recall_older(&mut self) -> Recall<'_> {
        Recall::Unchanged
    }

    /// Move towards newer entries (Down).
    ///
    /// Stepping past the newest entry leaves the history; the caller puts
    /// back whatever was typed before browsing.
    #[cfg(feature = "history")]
    pub fn recall_newer(&mut self) -> Recall<'_> {
        match self.cursor {
            None => Recall::Unchanged,
            Some(0) => {
                self.cursor = None;
                Recall::Cleared
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                Recall::Entry(&self.entries[i - 1])
            }
        }
    }

    /// Move towards newer entries (stub version).
    #[cfg(not(feature = "history"))]
    pub fn recall_newer(&mut self) -> Recall<'_> {
        Recall::Unchanged
    }

    /// Stop browsing.
    #[cfg(feature = "history")]
    pub fn reset_position(&mut self) {
        self.cursor = None;
    }

    /// Stop browsing (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn reset_position(&mut self) {}

    /// Cursor position, `None` when not browsing.
    #[cfg(feature = "history")]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Cursor position (stub version - never browsing).
    #[cfg(not(feature = "history"))]
    pub fn cursor(&self) -> Option<usize> {
        None
    }

    /// Entries, newest first.
    #[cfg(feature = "history")]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries (stub version - always empty).
    #[cfg(not(feature = "history"))]
    pub fn entries(&self) -> &[HistoryEntry] {
        &[]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Forget every entry and stop browsing.
    #[cfg(feature = "history")]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Forget every entry (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn clear(&mut self) {}
}

impl<const N: usize> Default for CommandHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}
