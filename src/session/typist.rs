//! Placeholder typist.
//!
//! Types the configured phrases one character per tick, lingers on a
//! finished phrase for the configured pause, then starts the next phrase.

use alloc::string::String;
use alloc::vec::Vec;

/// Placeholder animation state.
#[derive(Debug, Clone, Default)]
pub struct Typist {
    phrases: Vec<String>,
    index: usize,
    typed: String,
    typed_chars: usize,
    completed_at: Option<u64>,
    pause_ms: u64,
}

impl Typist {
    /// Create a typist cycling through `phrases`.
    pub fn new(phrases: Vec<String>, pause_ms: u64) -> Self {
        Self {
            phrases,
            pause_ms,
            ..Self::default()
        }
    }

    /// Advance one tick at session time `now_ms`.
    ///
    /// Returns true if the typed text changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(phrase) = self.phrases.get(self.index) else {
            return false;
        };

        if let Some(done) = self.completed_at {
            if now_ms.saturating_sub(done) < self.pause_ms {
                return false;
            }
            self.index = (self.index + 1) % self.phrases.len();
            self.typed.clear();
            self.typed_chars = 0;
            self.completed_at = None;
            return true;
        }

        match phrase.chars().nth(self.typed_chars) {
            Some(c) => {
                self.typed.push(c);
                self.typed_chars += 1;
                if self.typed_chars == phrase.chars().count() {
                    self.completed_at = Some(now_ms);
                }
                true
            }
            // Empty phrase: finished before it started.
            None => {
                self.completed_at = Some(now_ms);
                false
            }
        }
    }

    /// Replace the phrase list and restart from the first phrase.
    pub fn set_phrases(&mut self, phrases: Vec<String>) {
        self.phrases = phrases;
        self.reset();
    }

    /// Restart from the first phrase.
    pub fn reset(&mut self) {
        self.index = 0;
        self.typed.clear();
        self.typed_chars = 0;
        self.completed_at = None;
    }

    /// Text typed so far.
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Index of the phrase being typed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True when there is nothing to type.
    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }
}
