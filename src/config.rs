//! Compile-time session configuration.
//!
//! The `SessionConfig` trait fixes timer periods and presentation choices
//! without runtime overhead. Buffer capacities are crate-wide consts because
//! they size heapless storage.

/// Maximum input line length in bytes. Keystrokes beyond this are dropped.
pub const MAX_INPUT: usize = 256;

/// Number of submitted lines kept in history (oldest evicted first).
pub const HISTORY_SIZE: usize = 100;

/// Session configuration trait defining timer periods and placeholder policy.
///
/// All values are const (zero runtime cost).
pub trait SessionConfig {
    /// Placeholder typist tick period in milliseconds (default: 90)
    const TYPIST_TICK_MS: u64;

    /// Pause after a phrase is fully typed before the next one starts (default: 0)
    const TYPIST_PAUSE_MS: u64;

    /// Delay between a command's output and its deferred action (default: 1000)
    const ACTION_DELAY_MS: u64;

    /// Hide the placeholder once the output log has any record (default: false)
    const HIDE_PLACEHOLDER_AFTER_OUTPUT: bool;
}

/// Default configuration.
///
/// The plain widget behavior:
/// - TYPIST_TICK_MS: 90
/// - TYPIST_PAUSE_MS: 0 (next phrase starts on the following tick)
/// - ACTION_DELAY_MS: 1000
/// - HIDE_PLACEHOLDER_AFTER_OUTPUT: false
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl SessionConfig for DefaultConfig {
    const TYPIST_TICK_MS: u64 = 90;
    const TYPIST_PAUSE_MS: u64 = 0;
    const ACTION_DELAY_MS: u64 = 1000;
    const HIDE_PLACEHOLDER_AFTER_OUTPUT: bool = false;
}

/// Richer presentation.
///
/// Lingers on each finished phrase and only shows the placeholder on a
/// fresh screen:
/// - TYPIST_TICK_MS: 90
/// - TYPIST_PAUSE_MS: 2000
/// - ACTION_DELAY_MS: 1000
/// - HIDE_PLACEHOLDER_AFTER_OUTPUT: true
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RichConfig;

impl SessionConfig for RichConfig {
    const TYPIST_TICK_MS: u64 = 90;
    const TYPIST_PAUSE_MS: u64 = 2000;
    const ACTION_DELAY_MS: u64 = 1000;
    const HIDE_PLACEHOLDER_AFTER_OUTPUT: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(DefaultConfig::TYPIST_TICK_MS, 90);
        assert_eq!(DefaultConfig::TYPIST_PAUSE_MS, 0);
        assert_eq!(DefaultConfig::ACTION_DELAY_MS, 1000);
        assert!(!DefaultConfig::HIDE_PLACEHOLDER_AFTER_OUTPUT);
    }

    #[test]
    fn test_rich_config() {
        assert_eq!(RichConfig::TYPIST_TICK_MS, 90);
        assert_eq!(RichConfig::TYPIST_PAUSE_MS, 2000);
        assert_eq!(RichConfig::ACTION_DELAY_MS, 1000);
        assert!(RichConfig::HIDE_PLACEHOLDER_AFTER_OUTPUT);
    }

    #[test]
    fn test_capacities() {
        assert_eq!(HISTORY_SIZE, 100);
        assert!(MAX_INPUT >= 128);
    }
}
