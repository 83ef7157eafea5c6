#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/eggclock/")]

//! # eggclock
//!
//! A four-preset egg timer for the terminal, built for
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs) applications.
//!
//! ## Overview
//!
//! eggclock is the classic egg timer as a terminal screen: a 2×2 grid of
//! tappable cells (soft, medium, hard, and a custom duration), each
//! starting a countdown that rings the terminal bell and shows "Done!"
//! when the egg is ready. The components follow the Elm
//! Architecture pattern with `update()` and `view()` methods and can be
//! embedded individually or run as one composed screen.
//!
//! The countdown is derived from an absolute deadline rather than
//! decremented per tick, so a suspended poll (backgrounded terminal,
//! stopped process) never skews the display: the next tick, or an
//! explicit resume message, recomputes the remaining time from the wall
//! clock.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`grid`] | The 2×2 preset screen, runnable standalone |
//! | [`timer`] | The countdown controller state machine |
//! | [`picker`] | Bounded 1–60 minutes stepper for the custom preset |
//! | [`preset`] | The four fixed egg presets |
//! | [`alert`] | Completion alert seam (terminal bell by default) |
//! | [`key`] | Key bindings with help text |
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use eggclock::prelude::*;
//!
//! let mut app = EggGrid::new();
//!
//! // Tap the hard-boil cell.
//! let tap: Msg = Box::new(KeyMsg {
//!     key: KeyCode::Char('3'),
//!     modifiers: KeyModifiers::NONE,
//! });
//! app.update(&tap);
//! assert!(app.view().contains("09:00"));
//! ```
//!
//! ## Foreground reconciliation
//!
//! A shell that knows when the application regains visibility pushes
//! [`timer::ResumeMsg`] through the update loop; the controller then
//! republishes the countdown from the wall clock immediately instead of
//! waiting for the next poll tick:
//!
//! ```rust
//! use bubbletea_rs::Msg;
//! use eggclock::prelude::*;
//!
//! let mut app = EggGrid::new();
//! let resume: Msg = Box::new(ResumeMsg);
//! app.update(&resume);
//! ```

pub mod alert;
pub mod grid;
pub mod key;
pub mod picker;
pub mod preset;
pub mod timer;

/// Convenient re-exports of the commonly used types.
pub mod prelude {
    pub use crate::alert::{Alert, Silent, TerminalBell};
    pub use crate::grid::{GridKeyMap, Model as EggGrid, Styles as GridStyles};
    pub use crate::key::Binding;
    pub use crate::picker::Model as MinutesPicker;
    pub use crate::preset::{Preset, CUSTOM, HARD, MEDIUM, PRESETS, SOFT};
    pub use crate::timer::{
        format_time, new as timer_new, remaining, DismissMsg, DoneMsg, Model as EggTimer,
        ResumeMsg, TickMsg,
    };
}
