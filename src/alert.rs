//! Completion alert seam.
//!
//! When a countdown reaches zero the timer fires a single alert pulse.
//! On a phone this would be a vibration; in the terminal the default is
//! the bell character. The trait exists so embedders can route completion
//! to a notification daemon, a sound, or nothing at all.

use std::io::{self, Write};
use std::time::Duration;

/// Receives the one-shot completion pulse of a finished countdown.
///
/// `pulse` is how long the attention signal should last. Sinks that have
/// no notion of duration (the terminal bell) may ignore it.
pub trait Alert {
    /// Called exactly once when a countdown completes naturally.
    fn completed(&mut self, pulse: Duration);
}

/// Rings the terminal bell on completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Alert for TerminalBell {
    fn completed(&mut self, _pulse: Duration) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// Swallows the completion pulse.
///
/// For embeddings that surface completion through their own channel and
/// only want the state transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Alert for Silent {
    fn completed(&mut self, _pulse: Duration) {}
}
