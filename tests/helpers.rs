//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::{RecordingHost, fixture_content};
use folio_term::{Content, DefaultConfig, Key, KeyOutcome, RecordKind, Session, SessionConfig};

/// Session type used by most tests.
pub type TestSession = Session<RecordingHost, DefaultConfig>;

// ============================================================================
// Session Creation Helpers
// ============================================================================

/// Create a mounted session over the fixture content.
pub fn create_test_session() -> TestSession {
    create_session(fixture_content(), RecordingHost::new())
}

/// Create a mounted session with any content, host and config.
pub fn create_session<C: SessionConfig>(
    content: Content,
    host: RecordingHost,
) -> Session<RecordingHost, C> {
    let mut session = Session::new(content, host);
    session.mount();
    session
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Type input without submitting.
pub fn type_input<C: SessionConfig>(session: &mut Session<RecordingHost, C>, input: &str) {
    for c in input.chars() {
        session.press(Key::Char(c));
    }
}

/// Press Tab.
pub fn press_tab<C: SessionConfig>(session: &mut Session<RecordingHost, C>) -> KeyOutcome {
    session.press(Key::Tab)
}

/// Type `cmd`, press Enter and return the lines the command printed
/// (everything after its input echo), joined by newlines.
pub fn execute_command<C: SessionConfig>(
    session: &mut Session<RecordingHost, C>,
    cmd: &str,
) -> String {
    let before = session.log().len();
    type_input(session, cmd);
    session.press(Key::Enter);

    session
        .log()
        .records()
        .get(before..)
        .unwrap_or(&[])
        .iter()
        .filter(|record| record.kind != RecordKind::InputEcho)
        .flat_map(|record| record.lines.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every line in the log, oldest first, joined by newlines.
pub fn log_text<C: SessionConfig>(session: &Session<RecordingHost, C>) -> String {
    session
        .log()
        .records()
        .iter()
        .flat_map(|record| record.lines.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {}",
            forbid,
            output
        );
    }
}
