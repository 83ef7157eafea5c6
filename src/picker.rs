//! Minutes picker for the custom preset.
//!
//! A bounded numeric stepper covering 1 through 60 minutes. The picker
//! only holds the pending display value; it does not start anything.
//! The grid feeds the value to the timer controller whenever the user
//! adjusts it, so an untouched picker leaves the controller's custom
//! minutes unset.
//!
//! ```rust
//! use eggclock::picker::Model;
//!
//! let mut picker = Model::new();
//! assert_eq!(picker.value(), 1);
//! picker.increment();
//! picker.increment();
//! assert_eq!(picker.view(), "3 min");
//! ```

/// Smallest selectable minute count.
pub const MIN_MINUTES: u32 = 1;
/// Largest selectable minute count.
pub const MAX_MINUTES: u32 = 60;

/// Picker state: the currently displayed minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Model {
    value: u32,
}

impl Default for Model {
    fn default() -> Self {
        Self { value: MIN_MINUTES }
    }
}

impl Model {
    /// Creates a picker showing the default of 1 minute.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected minute count.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Sets the minute count, clamped to 1..=60.
    pub fn set_value(&mut self, value: u32) {
        self.value = value.clamp(MIN_MINUTES, MAX_MINUTES);
    }

    /// Steps the minute count up, saturating at 60.
    pub fn increment(&mut self) {
        if self.value < MAX_MINUTES {
            self.value += 1;
        }
    }

    /// Steps the minute count down, saturating at 1.
    pub fn decrement(&mut self) {
        if self.value > MIN_MINUTES {
            self.value -= 1;
        }
    }

    /// Renders the picker line, e.g. `"5 min"`.
    pub fn view(&self) -> String {
        format!("{} min", self.value)
    }
}
