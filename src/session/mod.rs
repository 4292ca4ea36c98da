//! Session orchestration.
//!
//! `Session` owns everything one mounted terminal widget needs: the input
//! line, the history ring and cursor, the output log, the placeholder typist
//! and the timers behind it. The host feeds it keys, advances its clock and
//! renders what it exposes.

use crate::commands::{Context, Dispatcher};
use crate::config::{DefaultConfig, HISTORY_SIZE, MAX_INPUT, SessionConfig};
use crate::content::Content;
use crate::host::Host;
use crate::output::{OutputLog, OutputRecord, RecordKind};
use crate::response::DeferredAction;
use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

// Sub-modules
pub mod completion;
pub mod history;
pub mod observer;
pub mod timers;
pub mod typist;

// Re-export key types
pub use completion::{Completion, suggest_completions};
pub use history::{CommandHistory, HistoryEntry, Recall};
pub use observer::{Change, Observers, SubscriptionId};
pub use timers::{TimerId, Timers};
pub use typist::Typist;

/// Input line buffer.
pub type InputLine = heapless::String<MAX_INPUT>;

/// Mount state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Not on screen; keys and time are ignored
    Unmounted,

    /// Live
    Mounted,
}

/// Key event delivered by the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// Printable character
    Char(char),

    /// Delete the last character
    Backspace,

    /// Submit the input line
    Enter,

    /// Complete the command name
    Tab,

    /// Recall an older history entry
    Up,

    /// Recall a newer history entry
    Down,

    /// Discard the input line
    Escape,
}

/// What the host should do with the key event it delivered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Suppress the key's default behavior (focus traversal, caret moves)
    pub prevent_default: bool,
}

impl KeyOutcome {
    const HANDLED: Self = Self {
        prevent_default: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    TypistTick,
    Deferred(DeferredAction),
}

/// Headless command-line session.
///
/// Generic over:
/// - `H`: Host receiving deferred actions and supplying clock/entropy
/// - `C`: SessionConfig implementation (timer periods, placeholder policy)
///
/// Starts `Unmounted`. Call [`mount`](Self::mount) before feeding keys.
pub struct Session<H, C = DefaultConfig>
where
    H: Host,
    C: SessionConfig,
{
    content: Content,
    state: SessionState,

    input: InputLine,

    /// Input saved when history browsing starts, restored when it ends
    draft: InputLine,

    history: CommandHistory<HISTORY_SIZE>,

    log: OutputLog,
    typist: Typist,
    timers: Timers<Task>,

    /// Session time of the last mount
    mounted_at: u64,

    /// Fallback entropy when the host has none
    sequence: u32,

    observers: Observers,
    host: H,
    _config: PhantomData<C>,
}

// ============================================================================
// Debug implementation
// ============================================================================

impl<H, C> core::fmt::Debug for Session<H, C>
where
    H: Host,
    C: SessionConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("input", &self.input.as_str())
            .field("history", &self.history.len())
            .field("log", &self.log.len())
            .field("pending_timers", &self.timers.pending())
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

impl<H, C> Session<H, C>
where
    H: Host,
    C: SessionConfig,
{
    /// Create a session over `content`.
    ///
    /// Starts in `Unmounted` state. Call `mount()` to start the placeholder.
    pub fn new(content: Content, host: H) -> Self {
        let content = content.normalized();
        let typist = Typist::new(content.canned.placeholders.clone(), C::TYPIST_PAUSE_MS);

        Self {
            content,
            state: SessionState::Unmounted,
            input: InputLine::new(),
            draft: InputLine::new(),
            history: CommandHistory::new(),
            log: OutputLog::new(),
            typist,
            timers: Timers::new(),
            mounted_at: 0,
            sequence: 0,
            observers: Observers::default(),
            host,
            _config: PhantomData,
        }
    }

    /// Mount the session and start the placeholder typist.
    ///
    /// Mounting a mounted session does nothing.
    pub fn mount(&mut self) {
        if self.state == SessionState::Mounted {
            return;
        }

        self.state = SessionState::Mounted;
        self.mounted_at = self.timers.now();
        self.typist.reset();
        self.timers.schedule_every(C::TYPIST_TICK_MS, Task::TypistTick);

        tracing::debug!(prompt = %self.content.terminal.prompt(), "session mounted");
        self.notify(Change::Mounted);
    }

    /// Unmount the session.
    ///
    /// Cancels the typist and every pending deferred action, and resets the
    /// input, history and log. Time advanced while unmounted is ignored.
    pub fn unmount(&mut self) {
        if self.state == SessionState::Unmounted {
            return;
        }

        self.timers.cancel_all();
        self.input.clear();
        self.draft.clear();
        self.history.clear();
        self.log.clear();
        self.typist.reset();
        self.state = SessionState::Unmounted;

        tracing::debug!("session unmounted");
        self.notify(Change::Unmounted);
    }

    /// Current mount state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn is_mounted(&self) -> bool {
        self.state == SessionState::Mounted
    }
}

// ============================================================================
// Input
// ============================================================================

impl<H, C> Session<H, C>
where
    H: Host,
    C: SessionConfig,
{
    /// Handle one key event.
    ///
    /// Tab, Up and Down always ask the host to suppress their default
    /// behavior. Keys delivered while unmounted are ignored.
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        if !self.is_mounted() {
            return KeyOutcome::default();
        }

        match key {
            Key::Char(c) => {
                if c.is_control() {
                    return KeyOutcome::default();
                }
                if self.input.push(c).is_err() {
                    tracing::trace!("input full, keystroke dropped");
                    return KeyOutcome::default();
                }
                self.notify(Change::Input);
                KeyOutcome::default()
            }

            Key::Backspace => {
                if self.input.pop().is_some() {
                    self.notify(Change::Input);
                }
                KeyOutcome::default()
            }

            Key::Escape => {
                if !self.input.is_empty() {
                    self.input.clear();
                    self.notify(Change::Input);
                }
                KeyOutcome::default()
            }

            Key::Enter => {
                let line = core::mem::take(&mut self.input);
                self.submit(&line);
                KeyOutcome::default()
            }

            Key::Tab => {
                self.complete();
                KeyOutcome::HANDLED
            }

            Key::Up => {
                self.recall_older();
                KeyOutcome::HANDLED
            }

            Key::Down => {
                self.recall_newer();
                KeyOutcome::HANDLED
            }
        }
    }

    /// Replace the input line (e.g. from a host text field).
    ///
    /// Text beyond `MAX_INPUT` bytes is dropped. The history cursor does not
    /// move.
    pub fn set_input(&mut self, text: &str) {
        if !self.is_mounted() {
            return;
        }
        replace(&mut self.input, text);
        self.notify(Change::Input);
    }

    /// Submit `line`.
    ///
    /// Clears the input and stops history browsing regardless of content. A
    /// blank line stops there. Otherwise the line is recorded in history,
    /// echoed to the log and dispatched; the command's records follow the
    /// echo and its deferred action, if any, is scheduled
    /// `ACTION_DELAY_MS` later.
    pub fn submit(&mut self, line: &str) {
        if !self.is_mounted() {
            return;
        }

        self.input.clear();
        self.draft.clear();
        self.history.reset_position();
        self.notify(Change::Input);

        let trimmed = line.trim();
        if trimmed.is_empty() {
            tracing::trace!("blank input");
            return;
        }

        tracing::debug!(line = trimmed, "submit");
        self.history.push(trimmed);

        let name = trimmed
            .split_whitespace()
            .next()
            .map(|first| first.to_lowercase())
            .unwrap_or_default();
        let prompt = self.content.terminal.prompt();
        self.log
            .push(OutputRecord::input_echo(&prompt, &name, line.trim_end()));

        let entropy = self.next_entropy();
        let wall_clock = self.host.wall_clock();
        let response = {
            let ctx = Context {
                content: &self.content,
                history: self.history.entries(),
                uptime_ms: self.uptime_ms(),
                wall_clock,
                entropy,
            };
            Dispatcher::new(&self.content.terminal).dispatch(trimmed, &ctx)
        };

        if response.clear_log {
            self.log.clear();
            self.notify(Change::Cleared);
        } else {
            for record in response.records {
                self.log.push(record);
            }
            self.notify(Change::Output);
        }

        if let Some(action) = response.action {
            tracing::debug!(
                path = action.target(),
                delay_ms = C::ACTION_DELAY_MS,
                "deferred action scheduled"
            );
            self.timers
                .schedule_once(C::ACTION_DELAY_MS, Task::Deferred(action));
        }
    }

    /// Complete the input line against the enabled command names.
    ///
    /// One match replaces the input. Several matches append a
    /// `CompletionHint` record and leave the input alone. No match does
    /// nothing.
    pub fn complete(&mut self) {
        if !self.is_mounted() {
            return;
        }

        let hint = match suggest_completions(&self.content.terminal.enabled_commands, &self.input)
        {
            Completion::None => return,
            Completion::Unique(name) => {
                replace(&mut self.input, name);
                None
            }
            Completion::Ambiguous(matches) => Some(matches.join(", ")),
        };

        match hint {
            None => self.notify(Change::Input),
            Some(hint) => {
                self.log.push(OutputRecord::new(
                    RecordKind::CompletionHint,
                    "",
                    alloc::vec![hint],
                ));
                self.notify(Change::Output);
            }
        }
    }

    /// Recall the next older history entry (Up).
    pub fn recall_older(&mut self) {
        if !self.is_mounted() {
            return;
        }

        let browsing = self.history.cursor().is_some();
        match self.history.recall_older() {
            Recall::Entry(entry) => {
                if !browsing {
                    self.draft = self.input.clone();
                }
                replace(&mut self.input, entry);
            }
            Recall::Cleared | Recall::Unchanged => return,
        }
        self.notify(Change::Input);
    }

    /// Recall the next newer history entry (Down).
    ///
    /// Stepping past the newest entry restores what was typed before
    /// browsing started.
    pub fn recall_newer(&mut self) {
        if !self.is_mounted() {
            return;
        }

        match self.history.recall_newer() {
            Recall::Entry(entry) => replace(&mut self.input, entry),
            Recall::Cleared => self.input = core::mem::take(&mut self.draft),
            Recall::Unchanged => return,
        }
        self.notify(Change::Input);
    }

    fn next_entropy(&mut self) -> u32 {
        let fallback = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        self.host.entropy().unwrap_or(fallback)
    }
}

// ============================================================================
// Time
// ============================================================================

impl<H, C> Session<H, C>
where
    H: Host,
    C: SessionConfig,
{
    /// Advance the session clock by `elapsed_ms` and fire every task that
    /// became due, in order.
    ///
    /// Does nothing while unmounted.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if !self.is_mounted() {
            return;
        }

        let target = self.timers.now().saturating_add(elapsed_ms);
        while let Some(task) = self.timers.next_due(target) {
            match task {
                Task::TypistTick => {
                    let now = self.timers.now();
                    if self.typist.tick(now) {
                        self.notify(Change::Placeholder);
                    }
                }
                Task::Deferred(action) => self.fire(action),
            }
        }
    }

    fn fire(&mut self, action: DeferredAction) {
        tracing::debug!(path = action.target(), "deferred action fired");
        match &action {
            DeferredAction::Navigate(path) => self.host.navigate(path),
            DeferredAction::External(url) => self.host.open_external(url),
        }
        self.notify(Change::ActionFired(action));
    }

    /// Milliseconds since the last mount.
    pub fn uptime_ms(&self) -> u64 {
        self.timers.now().saturating_sub(self.mounted_at)
    }

    /// Deferred actions waiting to fire, in scheduling order.
    pub fn pending_actions(&self) -> impl Iterator<Item = &DeferredAction> {
        self.timers.tasks().filter_map(|task| match task {
            Task::Deferred(action) => Some(action),
            Task::TypistTick => None,
        })
    }
}

// ============================================================================
// Presentation
// ============================================================================

impl<H, C> Session<H, C>
where
    H: Host,
    C: SessionConfig,
{
    /// Placeholder text to show in the empty input field.
    ///
    /// `None` when the input is not empty, when no phrases are configured,
    /// or (with `HIDE_PLACEHOLDER_AFTER_OUTPUT`) once the log has records.
    pub fn placeholder(&self) -> Option<&str> {
        if !self.is_mounted() || !self.input.is_empty() || self.typist.is_idle() {
            return None;
        }
        if C::HIDE_PLACEHOLDER_AFTER_OUTPUT && !self.log.is_empty() {
            return None;
        }
        Some(self.typist.typed())
    }

    /// Replace the placeholder phrases and restart the typist.
    pub fn set_placeholders(&mut self, phrases: Vec<String>) {
        self.typist.set_phrases(phrases);
        self.notify(Change::Placeholder);
    }

    /// Index of the placeholder phrase being typed.
    pub fn placeholder_index(&self) -> usize {
        self.typist.index()
    }

    /// Current input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// History cursor, `None` when not browsing.
    pub fn cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    /// Submitted lines, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Output log.
    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    /// Prompt string, e.g. `guest@folio:~$`.
    pub fn prompt(&self) -> String {
        self.content.terminal.prompt()
    }

    /// Welcome lines to show above the log.
    pub fn welcome(&self) -> &[String] {
        &self.content.terminal.welcome_message
    }

    /// Content the session was built from.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Host collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Host collaborator (mutable).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

// ============================================================================
// Observers
// ============================================================================

impl<H, C> Session<H, C>
where
    H: Host,
    C: SessionConfig,
{
    /// Call `callback` on every state change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Change) + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Stop calling a subscribed callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&mut self, change: Change) {
        self.observers.notify(&change);
    }
}

/// Replace `buffer` with as much of `text` as fits.
fn replace(buffer: &mut InputLine, text: &str) {
    buffer.clear();
    for c in text.chars() {
        if buffer.push(c).is_err() {
            tracing::warn!(len = text.len(), "text truncated to input capacity");
            break;
        }
    }
}
