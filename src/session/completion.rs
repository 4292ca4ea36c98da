//! Tab completion against the enabled command names.
//!
//! Uses the stub function pattern: the module always exists, the function
//! finds nothing when the `completion` feature is disabled.

#![cfg_attr(not(feature = "completion"), allow(unused_variables))]

use alloc::vec::Vec;

/// Outcome of completing the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<'a> {
    /// No candidate starts with the input
    None,

    /// Exactly one candidate; the input becomes this name
    Unique(&'a str),

    /// Several candidates, in configured order
    Ambiguous(Vec<&'a str>),
}

/// Find the candidates whose prefix equals `input`, ignoring ASCII case.
///
/// # Feature-disabled behavior
///
/// Always returns `Completion::None`.
///
/// # Examples
///
/// ```rust,ignore
/// let names = ["profile", "projects", "parrot"];
/// assert_eq!(suggest_completions(&names, "profi"), Completion::Unique("profile"));
/// assert!(matches!(suggest_completions(&names, "pr"), Completion::Ambiguous(_)));
/// ```
#[cfg(feature = "completion")]
pub fn suggest_completions<'a, S: AsRef<str>>(candidates: &'a [S], input: &str) -> Completion<'a> {
    let matches: Vec<&'a str> = candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|name| {
            name.get(..input.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(input))
        })
        .collect();
    tracing::trace!(input, matches = matches.len(), "completion");

    match matches.len() {
        0 => Completion::None,
        1 => Completion::Unique(matches[0]),
        _ => Completion::Ambiguous(matches),
    }
}

/// Find completions (stub version - never matches).
#[cfg(not(feature = "completion"))]
pub fn suggest_completions<'a, S: AsRef<str>>(candidates: &'a [S], input: &str) -> Completion<'a> {
    Completion::None
}
