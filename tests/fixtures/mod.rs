//! Test fixtures for folio-term testing.
//!
//! Provides:
//! - `RecordingHost`: Test implementation of the Host trait
//! - `fixture_content()`: Content with blog posts and custom commands
//! - `FIXTURE_TOML`: The same kind of content as a TOML document

#![allow(dead_code)]

use folio_term::{BlogPost, Content, CustomCommand, DeferredAction, Host};

// ============================================================================
// RecordingHost - Test Host Implementation
// ============================================================================

/// Host that records every deferred action it receives.
///
/// Clock and entropy are fixed values (or absent) so output is
/// deterministic.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Actions in the order they fired
    pub actions: Vec<DeferredAction>,

    /// Value returned by `wall_clock()`
    pub clock: Option<i64>,

    /// Value returned by `entropy()`
    pub entropy: Option<u32>,
}

impl RecordingHost {
    /// Host with no clock and no entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose wall clock is frozen at `secs`.
    pub fn with_clock(secs: i64) -> Self {
        Self {
            clock: Some(secs),
            ..Self::default()
        }
    }

    /// Host returning `value` as entropy.
    pub fn with_entropy(value: u32) -> Self {
        Self {
            entropy: Some(value),
            ..Self::default()
        }
    }

    /// Targets of every fired action.
    pub fn targets(&self) -> Vec<&str> {
        self.actions.iter().map(DeferredAction::target).collect()
    }
}

impl Host for RecordingHost {
    fn navigate(&mut self, path: &str) {
        self.actions.push(DeferredAction::Navigate(path.to_string()));
    }

    fn open_external(&mut self, url: &str) {
        self.actions.push(DeferredAction::External(url.to_string()));
    }

    fn wall_clock(&self) -> Option<i64> {
        self.clock
    }

    fn entropy(&mut self) -> Option<u32> {
        self.entropy
    }
}

// ============================================================================
// Fixture content
// ============================================================================

/// Default content plus two blog posts and three custom commands:
/// - `resume`: navigates to `/resume`
/// - `github`: opens `https://github.com/example`
/// - `motd`: dynamic output
pub fn fixture_content() -> Content {
    let mut content = Content::default();

    content.canned.blogs = vec![
        BlogPost {
            file: "hello-world.md".into(),
            title: "Hello, World".into(),
            slug: "hello-world".into(),
        },
        BlogPost {
            file: "rust-in-production.md".into(),
            title: "Rust in Production".into(),
            slug: "rust-in-production".into(),
        },
    ];

    content.terminal = content
        .terminal
        .with_command(
            "resume",
            CustomCommand::lines(["Opening resume..."])
                .with_action(DeferredAction::Navigate("/resume".into())),
        )
        .with_command(
            "GitHub",
            CustomCommand::lines(["Opening GitHub..."])
                .with_action(DeferredAction::External("https://github.com/example".into())),
        )
        .with_command(
            "motd",
            CustomCommand::producer(|| vec!["Message of the day".to_string()]),
        );

    content
}

/// Content document exercising every bundle.
pub const FIXTURE_TOML: &str = r#"
[terminal]
username = "ada"
hostname = "engine"
welcomeMessage = ["Analytical engine online."]
enabledCommands = ["help", "projects", "profile", "parrot", "resume"]

[terminal.customCommands.Resume]
output = ["Opening resume..."]
action = "navigate"
target = "/resume"

[terminal.customCommands.mastodon]
output = ["Opening Mastodon..."]
action = "external"
target = "https://example.social/@ada"

[systemInfo]
os = "EngineOS"
memory = "1KiB / 2KiB"
asciiArt = ["[#]", "[#]"]

[profile]
name = "Ada"
title = "Mathematician"

[canned]
fortunes = ["The engine weaves algebraic patterns."]
placeholders = ["Run 'help'"]
parrot = "party-parrot"

[[canned.blogs]]
file = "notes.md"
title = "Notes on the Engine"
slug = "notes"

[canned.files]
"readme.txt" = ["Programs are punched cards."]
"#;
