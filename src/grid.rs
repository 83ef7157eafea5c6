//! The egg grid screen.
//!
//! A 2×2 grid of tappable preset cells, one per egg preset, plus the
//! footer lines. Each cell starts (or cancels) its countdown via
//! the digit keys; the custom cell carries the minutes picker, adjusted
//! with the arrow keys. The grid owns the [`crate::timer`] controller and
//! forwards every non-key message to it, so tick, completion and resume
//! handling all work unchanged when the grid is embedded in a larger
//! application.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use eggclock::grid::Model;
//!
//! let mut grid = Model::new();
//! let tap: Msg = Box::new(KeyMsg {
//!     key: KeyCode::Char('1'),
//!     modifiers: KeyModifiers::NONE,
//! });
//! let _cmd = grid.update(&tap);
//! assert!(grid.view().contains("05:00"));
//! ```
//!
//! The grid also implements the runtime's `Model` trait, so it can be run
//! as a standalone program; `q` or `Esc` quits.

use crate::alert::{Alert, TerminalBell};
use crate::key::Binding;
use crate::picker;
use crate::preset::{self, Preset, PRESETS};
use crate::timer;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

const CELL_WIDTH: usize = 32;
const GUTTER: &str = "  ";

/// Key bindings for the grid screen.
#[derive(Debug, Clone)]
pub struct GridKeyMap {
    /// Tap the soft-boil cell.
    pub start_soft: Binding,
    /// Tap the medium-boil cell.
    pub start_medium: Binding,
    /// Tap the hard-boil cell.
    pub start_hard: Binding,
    /// Tap the custom cell.
    pub start_custom: Binding,
    /// Step the custom minutes up.
    pub minutes_up: Binding,
    /// Step the custom minutes down.
    pub minutes_down: Binding,
    /// Quit the standalone program.
    pub quit: Binding,
}

impl Default for GridKeyMap {
    fn default() -> Self {
        Self {
            start_soft: Binding::new(vec![KeyCode::Char('1')])
                .with_help("1")
                .with_description("soft"),
            start_medium: Binding::new(vec![KeyCode::Char('2')])
                .with_help("2")
                .with_description("medium"),
            start_hard: Binding::new(vec![KeyCode::Char('3')])
                .with_help("3")
                .with_description("hard"),
            start_custom: Binding::new(vec![KeyCode::Char('4')])
                .with_help("4")
                .with_description("custom"),
            minutes_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k")
                .with_description("more minutes"),
            minutes_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j")
                .with_description("fewer minutes"),
            quit: Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc])
                .with_help("q")
                .with_description("quit"),
        }
    }
}

/// Styles for the grid cells and footer lines.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Cell label, e.g. "Soft".
    pub label: Style,
    /// Cell description line.
    pub description: Style,
    /// The running MM:SS countdown.
    pub countdown: Style,
    /// The transient "Done!" display.
    pub done: Style,
    /// The validation message under the grid.
    pub error: Style,
    /// The key help footer.
    pub help: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        Self {
            label: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#1A1A1A",
                    Dark: "#DDDDDD",
                }),
            description: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            countdown: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#B35C00",
                    Dark: "#FFB86C",
                }),
            done: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#00875F",
                    Dark: "#5AF78E",
                }),
            error: Style::new().foreground(AdaptiveColor {
                Light: "#C8102E",
                Dark: "#FF5F87",
            }),
            help: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
        }
    }
}

/// The grid screen model: four preset cells, the minutes picker, and the
/// countdown controller driving them.
#[derive(Debug, Clone)]
pub struct Model<A: Alert = TerminalBell> {
    timer: timer::Model<A>,
    picker: picker::Model,
    /// Key bindings. Replace entries to rebind.
    pub keymap: GridKeyMap,
    /// Rendering styles. Replace entries to retheme.
    pub styles: Styles,
}

impl Model {
    /// Creates a grid with the default bindings, styles and terminal-bell
    /// alert.
    pub fn new() -> Self {
        Self {
            timer: timer::new(),
            picker: picker::Model::new(),
            keymap: GridKeyMap::default(),
            styles: Styles::default(),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Alert> Model<A> {
    /// Replaces the completion alert sink.
    pub fn with_alert<B: Alert>(self, alert: B) -> Model<B> {
        Model {
            timer: self.timer.with_alert(alert),
            picker: self.picker,
            keymap: self.keymap,
            styles: self.styles,
        }
    }

    /// The countdown controller, for inspecting timer state.
    pub fn timer(&self) -> &timer::Model<A> {
        &self.timer
    }

    /// The minutes picker, for inspecting the pending custom duration.
    pub fn picker(&self) -> &picker::Model {
        &self.picker
    }

    /// Handles key presses and forwards everything else to the countdown
    /// controller.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.quit.matches(key_msg) {
                return Some(bubbletea_rs::quit());
            }
            if self.keymap.minutes_up.matches(key_msg) {
                self.picker.increment();
                self.timer.set_custom_minutes(self.picker.value());
                return None;
            }
            if self.keymap.minutes_down.matches(key_msg) {
                self.picker.decrement();
                self.timer.set_custom_minutes(self.picker.value());
                return None;
            }
            if self.keymap.start_soft.matches(key_msg) {
                return self.timer.start(preset::SOFT);
            }
            if self.keymap.start_medium.matches(key_msg) {
                return self.timer.start(preset::MEDIUM);
            }
            if self.keymap.start_hard.matches(key_msg) {
                return self.timer.start(preset::HARD);
            }
            if self.keymap.start_custom.matches(key_msg) {
                return self.timer.start(preset::CUSTOM);
            }
            return None;
        }
        self.timer.update(msg)
    }

    /// Renders the 2×2 grid with the footer lines.
    pub fn view(&self) -> String {
        let cells: Vec<String> = PRESETS.iter().map(|egg| self.render_cell(egg)).collect();
        let top = lipgloss::join_horizontal(
            lipgloss::TOP,
            &[cells[0].as_str(), GUTTER, cells[1].as_str()],
        );
        let bottom = lipgloss::join_horizontal(
            lipgloss::TOP,
            &[cells[2].as_str(), GUTTER, cells[3].as_str()],
        );

        let mut out = format!("{}\n\n{}\n", top, bottom);
        if let Some(err) = &self.timer.err {
            out.push('\n');
            out.push_str(&self.styles.error.render(err));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.help_view());
        out
    }

    fn render_cell(&self, egg: &Preset) -> String {
        let lines: [String; 3] = if self.timer.active_preset() == Some(egg.id) {
            [
                String::new(),
                self.styles.countdown.render(&self.timer.view()),
                String::new(),
            ]
        } else if self.timer.finished_preset() == Some(egg.id) {
            [
                String::new(),
                self.styles.done.render("Done!"),
                String::new(),
            ]
        } else {
            [
                self.styles.label.render(egg.label),
                self.styles.description.render(egg.description),
                if egg.id == preset::CUSTOM {
                    self.styles.label.render(&self.picker.view())
                } else {
                    String::new()
                },
            ]
        };
        lines
            .iter()
            .map(|line| center(line, CELL_WIDTH))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn help_view(&self) -> String {
        let km = &self.keymap;
        let entries = [
            &km.start_soft,
            &km.start_medium,
            &km.start_hard,
            &km.start_custom,
            &km.minutes_up,
            &km.minutes_down,
            &km.quit,
        ];
        let line = entries
            .iter()
            .map(|binding| format!("{} {}", binding.help, binding.description))
            .collect::<Vec<_>>()
            .join(" · ");
        self.styles.help.render(&line)
    }
}

fn center(content: &str, width: usize) -> String {
    let visible = lipgloss::width_visible(content);
    if visible >= width {
        return content.to_string();
    }
    let left = (width - visible) / 2;
    let right = width - visible - left;
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Model::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
