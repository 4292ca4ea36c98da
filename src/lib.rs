//! # folio-term
//!
//! Headless command-line session for decorative "fake terminal" widgets on
//! portfolio sites.
//!
//! **Key features:**
//! - **Canned commands** - A closed table of built-ins plus configurable custom commands
//! - **Deferred actions** - Commands can navigate or open links after their output is shown
//! - **Host-driven time** - No clock inside; the host advances timers explicitly
//! - **Optional features** - Command history, tab completion, TOML content loading
//! - **Observable** - Subscribers are told about every state change
//!
//! The session never renders anything. A host (wasm front end, terminal demo)
//! feeds it key events, advances its clock and draws the output log.
//!
//! ## Optional Features
//!
//! - `history` - Command history with up/down recall
//! - `completion` - Tab completion against the enabled command list
//! - `toml` - Load content bundles from a TOML document
//! - `cli` - Terminal demo binary
//!
//! The library provides a `#[derive(CommandSet)]` macro that's always available.
//!
//! This library is `no_std` compatible (requires `alloc`).

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

// Lets the derive macro's `::folio_term::...` paths resolve inside this crate.
extern crate self as folio_term;

// Re-export derive macro (always available)
pub use folio_term_macros::CommandSet;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod content;
pub mod error;
pub mod host;
pub mod output;
pub mod response;

pub mod commands;
pub mod session;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{DefaultConfig, RichConfig, SessionConfig};

// Content bundles
pub use content::{
    BlogPost, Canned, CommandOutput, Content, CustomCommand, Profile, SystemInfo,
    TerminalConfig,
};

// Error types
pub use error::TermError;

// Host collaborator
pub use host::Host;

// Output model
pub use output::{AnimationRef, OutputLog, OutputRecord, RecordKind};

// Command layer
pub use commands::{Builtin, CommandHandler, Dispatcher};
pub use response::{DeferredAction, Response};

// Session types
pub use session::{Change, Key, KeyOutcome, Session, SessionState, SubscriptionId};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
