//! Error types for content loading.
//!
//! Command dispatch has no error path: unknown commands and bad usage are
//! ordinary output records. `TermError` covers the content bundles a session
//! is built from.

use alloc::string::String;
use core::fmt;

/// Content/configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// Content document could not be parsed
    Config(String),

    /// Custom command declares an action without a target
    MissingActionTarget {
        /// The declared action kind
        action: String,
    },

    /// Custom command declares an action other than `navigate` or `external`
    UnknownAction(String),
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::Config(msg) => write!(f, "Invalid content: {}", msg),
            TermError::MissingActionTarget { action } => {
                write!(f, "Action '{}' requires a target", action)
            }
            TermError::UnknownAction(action) => write!(
                f,
                "Unknown action '{}' (expected 'navigate' or 'external')",
                action
            ),
        }
    }
}

impl core::error::Error for TermError {}
