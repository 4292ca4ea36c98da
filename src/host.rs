//! Host abstraction for everything that leaves the session.
//!
//! The `Host` trait is how deferred actions reach the embedding environment
//! (a router, `window.open`, a terminal printer) and how the session gets
//! the little it needs from the outside world: wall-clock time and entropy.

/// Embedding environment of a session.
///
/// Implementations must not call back into the session; they are invoked
/// from inside `Session::advance()`.
pub trait Host {
    /// Navigate to another page of the site (e.g. `/blogs`).
    fn navigate(&mut self, path: &str);

    /// Open an external URL in a new context.
    fn open_external(&mut self, url: &str);

    /// Current wall-clock time as UNIX seconds.
    ///
    /// Default: `None` (`date` reports the clock as unavailable).
    fn wall_clock(&self) -> Option<i64> {
        None
    }

    /// A random value.
    ///
    /// Default: `None` (the session falls back to round-robin selection).
    fn entropy(&mut self) -> Option<u32> {
        None
    }
}

impl<H: Host + ?Sized> Host for &mut H {
    fn navigate(&mut self, path: &str) {
        (**self).navigate(path)
    }

    fn open_external(&mut self, url: &str) {
        (**self).open_external(url)
    }

    fn wall_clock(&self) -> Option<i64> {
        (**self).wall_clock()
    }

    fn entropy(&mut self) -> Option<u32> {
        (**self).entropy()
    }
}
