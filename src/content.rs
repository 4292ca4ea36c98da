//! Content bundles a session is built from.
//!
//! Everything a command prints comes from here: the terminal config
//! (identity, enabled commands, custom commands), the system-info and
//! profile bundles, and the canned texts. All bundles are read-only once a
//! session is created and every field has a default, so a partial document
//! is enough.

use crate::commands::{Builtin, CommandSet};
use crate::error::TermError;
use crate::output::AnimationRef;
use crate::response::DeferredAction;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use serde::Deserialize;

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|line| line.to_string()).collect()
}

// ============================================================================
// Custom commands
// ============================================================================

/// Output of a custom command.
#[derive(Clone)]
pub enum CommandOutput {
    /// Fixed lines
    Lines(Vec<String>),

    /// Lines produced on every invocation
    Producer(Rc<dyn Fn() -> Vec<String>>),
}

impl CommandOutput {
    /// Produce the lines to print.
    pub fn render(&self) -> Vec<String> {
        match self {
            CommandOutput::Lines(lines) => lines.clone(),
            CommandOutput::Producer(produce) => produce(),
        }
    }
}

impl fmt::Debug for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Lines(lines) => f.debug_tuple("Lines").field(lines).finish(),
            CommandOutput::Producer(_) => f.write_str("Producer(<fn>)"),
        }
    }
}

/// Custom command: canned output plus an optional action.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "CustomCommandFile")]
pub struct CustomCommand {
    /// What the command prints
    pub output: CommandOutput,

    /// Fired `ACTION_DELAY_MS` after the output is shown
    pub action: Option<DeferredAction>,
}

impl CustomCommand {
    /// Command printing fixed lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: CommandOutput::Lines(lines.into_iter().map(Into::into).collect()),
            action: None,
        }
    }

    /// Command whose lines are produced on every invocation.
    pub fn producer<F>(produce: F) -> Self
    where
        F: Fn() -> Vec<String> + 'static,
    {
        Self {
            output: CommandOutput::Producer(Rc::new(produce)),
            action: None,
        }
    }

    /// Builder method to attach an action.
    pub fn with_action(mut self, action: DeferredAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// On-disk shape of a custom command: `{ output, action?, target? }`.
#[derive(Deserialize)]
struct CustomCommandFile {
    #[serde(default)]
    output: Vec<String>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    target: Option<String>,
}

impl TryFrom<CustomCommandFile> for CustomCommand {
    type Error = TermError;

    fn try_from(file: CustomCommandFile) -> Result<Self, Self::Error> {
        let action = match file.action {
            None => None,
            Some(kind) => {
                let target = file
                    .target
                    .ok_or_else(|| TermError::MissingActionTarget {
                        action: kind.clone(),
                    })?;
                match kind.as_str() {
                    "navigate" => Some(DeferredAction::Navigate(target)),
                    "external" => Some(DeferredAction::External(target)),
                    _ => return Err(TermError::UnknownAction(kind)),
                }
            }
        };

        Ok(Self {
            output: CommandOutput::Lines(file.output),
            action,
        })
    }
}

// ============================================================================
// Terminal config
// ============================================================================

/// Terminal identity and command configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt user name (default: "guest")
    pub username: String,

    /// Prompt host name (default: "folio")
    pub hostname: String,

    /// Lines shown above the log when the session mounts
    #[serde(alias = "welcomeMessage")]
    pub welcome_message: Vec<String>,

    /// Names offered by Tab completion and listed by `help`, in order
    /// (default: every built-in)
    #[serde(alias = "enabledCommands")]
    pub enabled_commands: Vec<String>,

    /// Custom commands, checked before built-ins
    #[serde(alias = "customCommands")]
    pub custom_commands: BTreeMap<String, CustomCommand>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            username: "guest".into(),
            hostname: "folio".into(),
            welcome_message: lines(&[
                "Welcome to my corner of the internet.",
                "Type 'help' to see what this terminal can do.",
            ]),
            enabled_commands: Builtin::ALL.iter().map(|c| c.name().to_string()).collect(),
            custom_commands: BTreeMap::new(),
        }
    }
}

impl TerminalConfig {
    /// Lowercase every custom command name so lookups are case-insensitive.
    pub fn normalized(mut self) -> Self {
        let commands = core::mem::take(&mut self.custom_commands);
        self.custom_commands = commands
            .into_iter()
            .map(|(name, command)| (name.to_lowercase(), command))
            .collect();
        self
    }

    /// Builder method to add a custom command.
    pub fn with_command(mut self, name: &str, command: CustomCommand) -> Self {
        self.custom_commands.insert(name.to_lowercase(), command);
        self
    }

    /// Prompt string, e.g. `guest@folio:~$`.
    pub fn prompt(&self) -> String {
        alloc::format!("{}@{}:~$", self.username, self.hostname)
    }
}

// ============================================================================
// System info and profile
// ============================================================================

/// Fields printed by `neofetch`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct SystemInfo {
    pub os: String,
    pub host: String,
    pub kernel: String,
    pub uptime: String,
    pub packages: String,
    pub shell: String,
    pub resolution: String,
    pub de: String,
    pub wm: String,
    pub terminal: String,
    pub cpu: String,
    pub gpu: String,
    pub memory: String,

    /// Art printed left of the fields (default: built-in logo)
    #[serde(alias = "asciiArt")]
    pub ascii_art: Option<Vec<String>>,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            os: "FolioOS x86_64".into(),
            host: "Browser Tab".into(),
            kernel: "6.1.0-folio".into(),
            uptime: "since you arrived".into(),
            packages: "42 (cargo)".into(),
            shell: "folio-sh 0.1".into(),
            resolution: "whatever fits".into(),
            de: "None".into(),
            wm: "CSS Grid".into(),
            terminal: "folio-term".into(),
            cpu: "Your browser's finest".into(),
            gpu: "Whatever renders this".into(),
            memory: "512MiB / 16384MiB".into(),
            ascii_art: None,
        }
    }
}

/// Fields printed by `profile`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Profile {
    pub name: String,
    pub username: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    pub website: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Site Owner".into(),
            username: "guest".into(),
            title: "Software Developer".into(),
            location: "The Internet".into(),
            bio: "Builds things, breaks things, writes about both.".into(),
            website: "https://example.com".into(),
            email: "hello@example.com".into(),
        }
    }
}

// ============================================================================
// Canned texts
// ============================================================================

/// A blog post reachable through `cat`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogPost {
    /// File name listed by `ls blogs`
    pub file: String,

    /// Title printed by `cat` and searched by `grep`
    pub title: String,

    /// Path segment under `/blogs`
    pub slug: String,
}

/// Canned texts: prose, jokes and listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Canned {
    /// Printed by `whoami`/`about`/`info`
    pub about: Vec<String>,

    /// Pool for `fortune`
    pub fortunes: Vec<String>,

    /// Printed by `projects`
    pub projects: Vec<String>,

    /// Files under `blogs/`
    pub blogs: Vec<BlogPost>,

    /// Top-level text files for `cat` and `grep`
    pub files: BTreeMap<String, Vec<String>>,

    /// Placeholder typist phrases
    pub placeholders: Vec<String>,

    /// Animation handed to the `parrot` record
    pub parrot: AnimationRef,
}

impl Default for Canned {
    fn default() -> Self {
        let mut files = BTreeMap::new();
        files.insert(
            "readme.txt".to_string(),
            lines(&[
                "This is not a real shell.",
                "Every command is canned; nothing here touches a filesystem.",
                "Try 'neofetch', 'fortune' or 'cowsay hello'.",
            ]),
        );

        Self {
            about: lines(&[
                "Hi, I'm a developer who enjoys building fast, reliable software.",
                "-----",
                "I write backends, command-line tools and the occasional terminal toy.",
                "-----",
                "When I'm not coding I'm probably reading about how other people code.",
            ]),
            fortunes: lines(&[
                "There are only two hard things in computer science: cache invalidation and naming things.",
                "It works on my machine.",
                "A ship in harbor is safe, but that is not what ships are built for.",
                "Weeks of coding can save you hours of planning.",
            ]),
            projects: lines(&[
                "folio-term  - the terminal you are typing into",
                "dotfiles    - a lifetime of tweaks",
            ]),
            blogs: Vec::new(),
            files,
            placeholders: lines(&[
                "Run 'info' Displays information about me",
                "Run 'clear' for clearing the display",
                "Run 'help' for more information",
            ]),
            parrot: AnimationRef("parrot".into()),
        }
    }
}

// ============================================================================
// Content
// ============================================================================

/// All bundles a session is built from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Terminal identity and commands
    pub terminal: TerminalConfig,

    /// `neofetch` fields
    #[serde(alias = "system_info", alias = "systemInfo")]
    pub system: SystemInfo,

    /// `profile` fields
    pub profile: Profile,

    /// Canned texts
    pub canned: Canned,
}

impl Content {
    /// Parse content from a TOML document.
    ///
    /// Missing tables and fields keep their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> Result<Self, TermError> {
        let content: Content =
            toml::from_str(text).map_err(|e| TermError::Config(e.to_string()))?;
        Ok(content.normalized())
    }

    /// Apply `TerminalConfig::normalized`.
    pub fn normalized(mut self) -> Self {
        self.terminal = self.terminal.normalized();
        self
    }

    /// Find a blog post by `name` or `blogs/name`.
    pub fn blog(&self, file: &str) -> Option<&BlogPost> {
        let file = file.strip_prefix("blogs/").unwrap_or(file);
        self.canned.blogs.iter().find(|post| post.file == file)
    }
}
