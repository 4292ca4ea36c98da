//! Command dispatch.
//!
//! A submitted line is split into a lowercased command name and its
//! arguments, then offered to each handler in turn: custom commands first,
//! then built-ins. Whatever nobody handles becomes a not-found record.

use crate::content::{Content, TerminalConfig};
use crate::response::{DeferredAction, Response};
use crate::session::history::HistoryEntry;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub mod builtins;

pub use builtins::Builtins;

/// Closed set of named commands.
///
/// Derive it with `#[derive(CommandSet)]` rather than implementing it by hand.
pub trait CommandSet: Copy + 'static {
    /// Every command, in declaration order
    const ALL: &'static [Self];

    /// Canonical name
    fn name(&self) -> &'static str;

    /// Alternative names resolving to the same command
    fn aliases(&self) -> &'static [&'static str];

    /// One-line description for `help` and `man`
    fn about(&self) -> &'static str;

    /// Resolve a canonical name or alias.
    fn lookup(name: &str) -> Option<Self>;
}

/// Built-in commands.
///
/// Variant docs live in the `about` strings, which `help` and `man` print.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, crate::CommandSet)]
pub enum Builtin {
    #[command(about = "List available commands")]
    Help,
    #[command(alias = "system-info", about = "Display system information")]
    Neofetch,
    #[command(alias = "about", alias = "info", about = "Display information about me")]
    Whoami,
    #[command(about = "Show my profile and open the profile page")]
    Profile,
    #[command(about = "List my projects and open the projects page")]
    Projects,
    #[command(about = "Clear the display")]
    Clear,
    #[command(about = "List directory contents")]
    Ls,
    #[command(about = "Change directory (opens the matching page)")]
    Cd,
    #[command(about = "Print working directory")]
    Pwd,
    #[command(about = "Print a random adage")]
    Fortune,
    #[command(about = "A talking cow")]
    Cowsay,
    #[command(about = "Show the site as a tree")]
    Tree,
    #[command(about = "Report process status")]
    Ps,
    #[command(about = "Display running processes")]
    Top,
    #[command(about = "Print the current date and time")]
    Date,
    #[command(about = "Show how long this session has been running")]
    Uptime,
    #[command(about = "Print system information")]
    Uname,
    #[command(about = "Show command history")]
    History,
    #[command(about = "Show the manual page of a command")]
    Man,
    #[command(about = "Summon the party parrot")]
    Parrot,
    #[command(about = "Steam locomotive")]
    Sl,
    #[command(about = "Print a file")]
    Cat,
    #[command(about = "Search the files for a pattern")]
    Grep,
}

/// Everything a handler may read while producing a response.
#[derive(Debug)]
pub struct Context<'a> {
    /// Content bundles
    pub content: &'a Content,

    /// Submitted lines, newest first (includes the line being dispatched)
    pub history: &'a [HistoryEntry],

    /// Milliseconds since the session mounted
    pub uptime_ms: u64,

    /// Host wall clock, UNIX seconds
    pub wall_clock: Option<i64>,

    /// Random value for commands that pick something
    pub entropy: u32,
}

/// Command execution handler trait.
///
/// Returns `None` when the handler does not know `name`, so the next handler
/// in the chain gets a chance.
pub trait CommandHandler {
    /// Execute `name` (already lowercased) with `args` (original case).
    fn execute(&self, name: &str, args: &[&str], ctx: &Context<'_>) -> Option<Response>;
}

/// Handler for configured custom commands.
#[derive(Debug, Copy, Clone)]
pub struct CustomCommands<'a> {
    config: &'a TerminalConfig,
}

impl<'a> CustomCommands<'a> {
    /// Wrap the custom command table of `config`.
    pub fn new(config: &'a TerminalConfig) -> Self {
        Self { config }
    }
}

impl CommandHandler for CustomCommands<'_> {
    fn execute(&self, name: &str, _args: &[&str], _ctx: &Context<'_>) -> Option<Response> {
        let command = self.config.custom_commands.get(name)?;
        let response = Response::lines(name, command.output.render());

        Some(match &command.action {
            Some(action) => response.then(action.clone()),
            None => response,
        })
    }
}

/// Dispatcher chaining custom commands, built-ins and the not-found fallback.
#[derive(Debug, Copy, Clone)]
pub struct Dispatcher<'a> {
    custom: CustomCommands<'a>,
    builtins: Builtins,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over the custom commands of `config`.
    pub fn new(config: &'a TerminalConfig) -> Self {
        Self {
            custom: CustomCommands::new(config),
            builtins: Builtins,
        }
    }

    /// Dispatch one submitted line.
    ///
    /// Blank lines produce an empty response.
    pub fn dispatch(&self, line: &str, ctx: &Context<'_>) -> Response {
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            return Response::empty();
        };
        let name = first.to_lowercase();
        let args: Vec<&str> = parts.collect();

        if let Some(response) = self.custom.execute(&name, &args, ctx) {
            tracing::debug!(command = %name, "dispatched custom command");
            return response;
        }

        if let Some(response) = self.builtins.execute(&name, &args, ctx) {
            tracing::debug!(command = %name, "dispatched built-in command");
            return response;
        }

        tracing::debug!(command = %name, "command not found");
        not_found(&name)
    }
}

/// Record for an unknown command.
pub fn not_found(name: &str) -> Response {
    let lines: Vec<String> = alloc::vec![
        format!("{}: command not found", name),
        String::from("Try 'help' to list commands, 'ls' to look around, or 'clear' to start over."),
    ];
    Response::lines("", lines)
}
