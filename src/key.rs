//! Type-safe key bindings with attached help text.
//!
//! A [`Binding`] groups the key codes that trigger an action together with
//! the short help label shown in the footer of a screen.
//!
//! ```rust
//! use eggclock::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let start_soft = Binding::new(vec![KeyCode::Char('1')])
//!     .with_help("1")
//!     .with_description("soft");
//! assert_eq!(start_soft.help, "1");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A single key binding: the key codes that trigger it plus help text.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that activate this binding.
    pub keys: Vec<KeyCode>,
    /// Short key label for help views, e.g. `"1"` or `"↑/k"`.
    pub help: String,
    /// What the binding does, e.g. `"soft"` or `"more minutes"`.
    pub description: String,
}

impl Binding {
    /// Creates a binding for the given key codes with empty help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the key label shown in help views.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the action description shown in help views.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Reports whether the key message activates this binding.
    ///
    /// Matching is on the key code alone; modifiers are ignored.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys.contains(&key_msg.key)
    }
}
