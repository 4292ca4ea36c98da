//! Response types for command execution.
//!
//! `Response` is what a command handler hands back to the session: the
//! records to append, an optional deferred action, and whether the log
//! should be cleared instead.

use crate::output::{AnimationRef, OutputRecord, RecordKind};
use alloc::string::String;
use alloc::vec::Vec;

/// Side effect fired after a command's output has been shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Navigate to a site path
    Navigate(String),

    /// Open an external URL
    External(String),
}

impl DeferredAction {
    /// Target path or URL.
    pub fn target(&self) -> &str {
        match self {
            DeferredAction::Navigate(target) | DeferredAction::External(target) => target,
        }
    }
}

/// Command execution response.
///
/// Built with [`Response::lines`] (or one of the record-specific
/// constructors) and chained builder methods.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Records to append, in order
    pub records: Vec<OutputRecord>,

    /// Action to schedule after the output is shown
    pub action: Option<DeferredAction>,

    /// Replace the whole log with an empty one (records are ignored)
    pub clear_log: bool,
}

impl Response {
    /// Response with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single `CommandResult` record.
    pub fn lines(command: &str, lines: Vec<String>) -> Self {
        Self::record(OutputRecord::result(command, lines))
    }

    /// Single record of any kind.
    pub fn record(record: OutputRecord) -> Self {
        Self {
            records: alloc::vec![record],
            action: None,
            clear_log: false,
        }
    }

    /// Single record of `kind` with the given lines.
    pub fn kind(kind: RecordKind, command: &str, lines: Vec<String>) -> Self {
        Self::record(OutputRecord::new(kind, command, lines))
    }

    /// Single `Parrot` record.
    pub fn parrot(command: &str, animation: AnimationRef) -> Self {
        Self::record(OutputRecord::parrot(command, animation))
    }

    /// Clear the log.
    pub fn clear() -> Self {
        Self {
            records: Vec::new(),
            action: None,
            clear_log: true,
        }
    }

    /// Builder method to attach a deferred action.
    pub fn then(mut self, action: DeferredAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Builder method to schedule navigation to `path`.
    pub fn then_navigate(self, path: &str) -> Self {
        self.then(DeferredAction::Navigate(path.into()))
    }
}
