//! Output log model.
//!
//! Every submit appends display records to the log. Records are immutable
//! once appended; the whole log can only be cleared at once.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Display record kind. Renderers use it to pick a style.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// Prompt plus the raw submitted text
    InputEcho,

    /// Response lines of a command
    CommandResult,

    /// System information next to ASCII art
    Neofetch,

    /// Profile fields
    Profile,

    /// Embedded animation
    Parrot,

    /// Candidate list printed by an ambiguous Tab
    CompletionHint,
}

/// Opaque reference to an animation the host knows how to render.
///
/// The session carries it through the `Parrot` record and never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct AnimationRef(pub String);

/// One display record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// Record kind
    pub kind: RecordKind,

    /// Command the record belongs to (empty when not tied to one)
    pub command: String,

    /// Text lines, in display order
    pub lines: Vec<String>,

    /// Animation for `Parrot` records
    pub animation: Option<AnimationRef>,
}

impl OutputRecord {
    /// Create a record of `kind` for `command`.
    pub fn new(kind: RecordKind, command: &str, lines: Vec<String>) -> Self {
        Self {
            kind,
            command: command.into(),
            lines,
            animation: None,
        }
    }

    /// Create a `CommandResult` record.
    pub fn result(command: &str, lines: Vec<String>) -> Self {
        Self::new(RecordKind::CommandResult, command, lines)
    }

    /// Create the echo of a submitted line.
    pub fn input_echo(prompt: &str, command: &str, raw: &str) -> Self {
        let mut line = String::with_capacity(prompt.len() + 1 + raw.len());
        line.push_str(prompt);
        line.push(' ');
        line.push_str(raw);
        Self::new(RecordKind::InputEcho, command, alloc::vec![line])
    }

    /// Create a `Parrot` record carrying `animation`.
    pub fn parrot(command: &str, animation: AnimationRef) -> Self {
        Self {
            kind: RecordKind::Parrot,
            command: command.into(),
            lines: Vec::new(),
            animation: Some(animation),
        }
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Ordered record log.
///
/// Stored oldest-first. Renderers that show the newest block on top use
/// [`newest_first`](Self::newest_first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLog {
    records: Vec<OutputRecord>,
}

impl OutputLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: OutputRecord) {
        self.records.push(record);
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records oldest-first.
    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    /// Records newest-first.
    pub fn newest_first(&self) -> impl Iterator<Item = &OutputRecord> {
        self.records.iter().rev()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&OutputRecord> {
        self.records.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_input_echo_joins_prompt_and_raw_text() {
        let record = OutputRecord::input_echo("guest@folio:~$", "ls", "ls  -la");
        assert_eq!(record.kind, RecordKind::InputEcho);
        assert_eq!(record.command, "ls");
        assert_eq!(record.lines, vec!["guest@folio:~$ ls  -la".to_string()]);
        assert!(record.animation.is_none());
    }

    #[test]
    fn test_parrot_carries_animation() {
        let record = OutputRecord::parrot("parrot", AnimationRef("party".into()));
        assert_eq!(record.kind, RecordKind::Parrot);
        assert!(record.lines.is_empty());
        assert_eq!(record.animation, Some(AnimationRef("party".into())));
    }

    #[test]
    fn test_log_ordering() {
        let mut log = OutputLog::new();
        log.push(OutputRecord::result("a", vec!["1".into()]));
        log.push(OutputRecord::result("b", vec!["2".into()]));

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].command, "a");
        assert_eq!(log.last().map(|r| r.command.as_str()), Some("b"));

        let newest: Vec<&str> = log.newest_first().map(|r| r.command.as_str()).collect();
        assert_eq!(newest, ["b", "a"]);
    }

    #[test]
    fn test_clear() {
        let mut log = OutputLog::new();
        log.push(OutputRecord::result("a", Vec::new()));
        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn test_contains() {
        let record = OutputRecord::result("zz", vec!["zz: command not found".into()]);
        assert!(record.contains("command not found"));
        assert!(!record.contains("help"));
    }
}
