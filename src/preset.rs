//! The fixed egg presets.
//!
//! Four presets are defined at startup and never change: three boil levels
//! with fixed durations, plus a custom preset whose effective duration is
//! chosen by the user in minutes (see [`crate::picker`]). The custom
//! preset's own `duration` field is only a fallback description of the
//! longest built-in boil; the timer controller always substitutes the
//! user-selected minutes for it.

use std::time::Duration;

/// Preset id of the soft-boiled egg (5 minutes).
pub const SOFT: u8 = 1;
/// Preset id of the medium-boiled egg (7 minutes).
pub const MEDIUM: u8 = 2;
/// Preset id of the hard-boiled egg (9 minutes).
pub const HARD: u8 = 3;
/// Preset id of the custom-duration timer.
pub const CUSTOM: u8 = 4;

/// A selectable egg preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Stable id, 1 through 4.
    pub id: u8,
    /// Cell label, e.g. `"Soft"`.
    pub label: &'static str,
    /// One-line description of the result.
    pub description: &'static str,
    /// Base countdown duration. Overridden by the picker for [`CUSTOM`].
    pub duration: Duration,
}

/// The four presets, in display order.
pub const PRESETS: [Preset; 4] = [
    Preset {
        id: SOFT,
        label: "Soft",
        description: "Firm whites, runny yolk",
        duration: Duration::from_secs(300),
    },
    Preset {
        id: MEDIUM,
        label: "Medium",
        description: "Fully set whites, creamy center",
        duration: Duration::from_secs(420),
    },
    Preset {
        id: HARD,
        label: "Hard",
        description: "Fully set whites and yolk",
        duration: Duration::from_secs(540),
    },
    Preset {
        id: CUSTOM,
        label: "Custom",
        description: "Pick your own minutes",
        duration: Duration::from_secs(600),
    },
];

impl Preset {
    /// Looks up a preset by id. Returns `None` for anything outside 1..=4.
    pub fn get(id: u8) -> Option<&'static Preset> {
        PRESETS.iter().find(|preset| preset.id == id)
    }
}
