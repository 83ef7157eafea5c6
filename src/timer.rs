//! The countdown controller.
//!
//! This is the state machine behind the egg grid: it owns the selected
//! preset, the absolute completion instant, and the published remaining
//! seconds. The countdown is always *derived* from the stored deadline
//! rather than decremented per tick, so a poll that was suspended (the
//! terminal in the background, the process stopped in a job) picks up at
//! the correct wall-clock position on the next tick or on an explicit
//! [`ResumeMsg`] resync.
//!
//! # Basic Usage
//!
//! ```rust
//! use eggclock::preset;
//! use eggclock::timer;
//! use std::time::{Duration, Instant};
//!
//! let mut egg = timer::new();
//! let now = Instant::now();
//!
//! let _cmd = egg.start_at(preset::SOFT, now);
//! assert_eq!(egg.view(), "05:00");
//!
//! let _cmd = egg.tick_at(now + Duration::from_secs(1));
//! assert_eq!(egg.view(), "04:59");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! The controller is driven by messages: [`TickMsg`] once per second while
//! a countdown runs, [`DoneMsg`] announcing completion to the rest of the
//! application, [`DismissMsg`] ending the transient "Done!" display, and
//! [`ResumeMsg`] pushed by the shell when the application regains the
//! foreground. Forward messages from your update loop:
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use eggclock::timer::{self, DoneMsg};
//!
//! struct App {
//!     egg: timer::Model,
//!     status: String,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (App { egg: timer::new(), status: String::new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<DoneMsg>() {
//!             if done.id == self.egg.id() {
//!                 self.status = format!("Preset {} finished", done.preset);
//!             }
//!         }
//!         self.egg.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{} {}", self.egg.view(), self.status)
//!     }
//! }
//! ```

use crate::alert::{Alert, TerminalBell};
use crate::preset::{self, Preset};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

// Internal ID management for controller instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// How often the running countdown is re-derived and republished.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Length of the alert pulse fired at natural completion.
pub const VIBRATION_PULSE: Duration = Duration::from_millis(2000);

/// How long the "Done!" display stays up before the cell resets.
pub const DONE_DISPLAY: Duration = Duration::from_millis(2000);

/// Message sent on every poll tick while a countdown is running.
///
/// Ticks carry the controller id and a tag epoch. A tick whose tag no
/// longer matches the controller's current epoch belongs to a countdown
/// that was cancelled or replaced and is dropped on arrival, which is
/// what keeps at most one tick chain live per controller.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the controller that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// Announcement that a countdown has completed.
///
/// Sent for both natural (tick) and resync-detected completion. Handle it
/// in your update loop to react to a finished egg; the controller itself
/// uses it to schedule the end of the "Done!" display window.
#[derive(Debug, Clone)]
pub struct DoneMsg {
    /// Id of the controller that finished.
    pub id: i64,
    /// Preset id of the finished countdown.
    pub preset: u8,
}

/// Ends the transient "Done!" display and returns the controller to idle.
#[derive(Debug, Clone)]
pub struct DismissMsg {
    /// Id of the controller whose display should reset.
    pub id: i64,
    tag: i64,
}

/// Foreground signal: the application became visible again.
///
/// The embedding shell sends this when the process resumes after being
/// backgrounded or suspended. The controller recomputes the remaining
/// time from the deadline immediately instead of waiting for the next
/// poll tick.
#[derive(Debug, Clone)]
pub struct ResumeMsg;

/// Remaining whole seconds until `deadline`, as seen from `now`.
///
/// Rounded to the nearest second; negative once the deadline has passed.
/// This is the single derivation the whole countdown rests on: ticks and
/// resyncs both republish its result rather than decrementing state.
///
/// # Examples
///
/// ```rust
/// use eggclock::timer::remaining;
/// use std::time::{Duration, Instant};
///
/// let now = Instant::now();
/// assert_eq!(remaining(now + Duration::from_secs(300), now), 300);
/// assert_eq!(remaining(now, now + Duration::from_secs(2)), -2);
/// ```
pub fn remaining(deadline: Instant, now: Instant) -> i64 {
    match deadline.checked_duration_since(now) {
        Some(left) => left.as_secs_f64().round() as i64,
        None => -(now.duration_since(deadline).as_secs_f64().round() as i64),
    }
}

/// Formats whole seconds as a zero-padded `MM:SS` countdown.
///
/// # Examples
///
/// ```rust
/// use eggclock::timer::format_time;
///
/// assert_eq!(format_time(300), "05:00");
/// assert_eq!(format_time(9), "00:09");
/// ```
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Running { preset: u8, deadline: Instant },
    Done { preset: u8 },
}

/// The countdown controller model.
///
/// Exactly one preset can be counting down at a time. The selection state
/// is a three-phase machine: idle, running with an absolute deadline, and
/// the transient "Done!" window after completion. While the done window is
/// up the selection itself is already reset, so [`active_preset`] and
/// [`deadline`] report nothing and a new countdown can start immediately.
///
/// The alert seam `A` receives one pulse per natural completion; see
/// [`crate::alert`].
///
/// [`active_preset`]: Model::active_preset
/// [`deadline`]: Model::deadline
#[derive(Debug, Clone)]
pub struct Model<A: Alert = TerminalBell> {
    phase: Phase,
    custom_minutes: Option<u32>,
    remaining_secs: u64,
    interval: Duration,
    alert: A,
    /// User-facing validation message from the last rejected start, if any.
    ///
    /// Set when the custom preset is started without a usable minute
    /// count; cleared by the next accepted action.
    pub err: Option<String>,
    id: i64,
    tag: i64,
}

/// Creates a controller with the default 1-second poll and terminal-bell
/// alert.
pub fn new() -> Model {
    new_with_interval(TICK_INTERVAL)
}

/// Creates a controller with a custom poll interval.
///
/// The interval only affects how often the display is republished; the
/// remaining time is derived from the deadline either way.
pub fn new_with_interval(interval: Duration) -> Model {
    Model {
        phase: Phase::Idle,
        custom_minutes: None,
        remaining_secs: 0,
        interval,
        alert: TerminalBell,
        err: None,
        id: next_id(),
        tag: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl<A: Alert> Model<A> {
    /// Replaces the alert sink, keeping all other state.
    pub fn with_alert<B: Alert>(self, alert: B) -> Model<B> {
        Model {
            phase: self.phase,
            custom_minutes: self.custom_minutes,
            remaining_secs: self.remaining_secs,
            interval: self.interval,
            alert,
            err: self.err,
            id: self.id,
            tag: self.tag,
        }
    }

    /// Unique id of this controller instance, used to route its messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The preset currently counting down, if any.
    pub fn active_preset(&self) -> Option<u8> {
        match self.phase {
            Phase::Running { preset, .. } => Some(preset),
            _ => None,
        }
    }

    /// The absolute completion instant of the running countdown, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Running { deadline, .. } => Some(deadline),
            _ => None,
        }
    }

    /// The preset whose "Done!" display is currently up, if any.
    pub fn finished_preset(&self) -> Option<u8> {
        match self.phase {
            Phase::Done { preset } => Some(preset),
            _ => None,
        }
    }

    /// Whether a countdown is running.
    pub fn running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// The published remaining seconds, 0 while idle or done.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// The pending custom minute count, unset until the picker feeds one.
    pub fn custom_minutes(&self) -> Option<u32> {
        self.custom_minutes
    }

    /// Stores the minute count used the next time the custom preset is
    /// started. No validation happens here; `start` rejects zero or unset
    /// values.
    pub fn set_custom_minutes(&mut self, minutes: u32) {
        self.custom_minutes = Some(minutes);
    }

    /// Starts or cancels a countdown, reading the current wall clock.
    ///
    /// See [`start_at`](Model::start_at).
    pub fn start(&mut self, preset_id: u8) -> Option<Cmd> {
        self.start_at(preset_id, Instant::now())
    }

    /// Starts or cancels a countdown as of `now`.
    ///
    /// Tapping the running preset cancels it. Tapping a different preset
    /// while one runs cancels the old countdown and starts the new one.
    /// Starting the custom preset without a usable minute count records a
    /// validation message in [`err`](Model::err) and changes nothing. An
    /// unknown preset id is a no-op.
    ///
    /// Returns the first tick command of the new countdown, which must be
    /// handed to the runtime for the poll to run.
    pub fn start_at(&mut self, preset_id: u8, now: Instant) -> Option<Cmd> {
        let preset = match Preset::get(preset_id) {
            Some(preset) => preset,
            None => return None,
        };
        self.err = None;

        if self.active_preset() == Some(preset_id) {
            self.cancel();
            return None;
        }

        let duration = if preset_id == preset::CUSTOM {
            match self.custom_minutes {
                Some(minutes) if minutes >= 1 => {
                    Duration::from_secs(u64::from(minutes) * 60)
                }
                _ => {
                    self.err =
                        Some("Select at least 1 minute for the custom timer.".to_string());
                    return None;
                }
            }
        } else {
            preset.duration
        };

        self.phase = Phase::Running {
            preset: preset_id,
            deadline: now + duration,
        };
        self.remaining_secs = duration.as_secs();
        self.tag += 1;
        Some(self.tick_cmd())
    }

    /// Stops any running countdown and clears the done display.
    ///
    /// Idempotent. Bumps the tag epoch so ticks scheduled for the old
    /// countdown are dropped on arrival; dropping the model afterwards
    /// leaks nothing because no external registration exists.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.remaining_secs = 0;
        self.err = None;
        self.tag += 1;
    }

    /// Advances the countdown as of `now`.
    ///
    /// Republishes the derived remaining time, or completes the countdown
    /// when the deadline has been reached: the alert pulse fires, the
    /// phase moves to the "Done!" window, and the returned command
    /// announces [`DoneMsg`] to the application.
    pub fn tick_at(&mut self, now: Instant) -> Option<Cmd> {
        let deadline = match self.phase {
            Phase::Running { deadline, .. } => deadline,
            _ => return None,
        };
        let left = remaining(deadline, now);
        if left <= 0 {
            return Some(self.complete(true));
        }
        self.remaining_secs = left as u64;
        Some(self.tick_cmd())
    }

    /// Reconciles the countdown against the wall clock, bypassing the
    /// poll cadence. See [`resync_at`](Model::resync_at).
    pub fn resync(&mut self) -> Option<Cmd> {
        self.resync_at(Instant::now())
    }

    /// Reconciles the countdown as of `now` after a suspension.
    ///
    /// Republishes the remaining time immediately so the display reflects
    /// elapsed wall-clock time rather than accumulated missed ticks. A
    /// deadline that passed while suspended completes the countdown with
    /// the usual reset sequence but without the alert pulse. The poll is
    /// re-armed under a fresh tag epoch, so the countdown stays live even
    /// if the suspended tick never arrives and cannot double-fire if it
    /// does.
    pub fn resync_at(&mut self, now: Instant) -> Option<Cmd> {
        let deadline = match self.phase {
            Phase::Running { deadline, .. } => deadline,
            _ => return None,
        };
        let left = remaining(deadline, now);
        if left < 0 {
            return Some(self.complete(false));
        }
        self.remaining_secs = left as u64;
        self.tag += 1;
        Some(self.tick_cmd())
    }

    /// Processes controller messages and returns follow-up commands.
    ///
    /// Handles [`TickMsg`] (advance the countdown), [`DoneMsg`] (schedule
    /// the end of the done display), [`DismissMsg`] (reset to idle) and
    /// [`ResumeMsg`] (resync). Messages for other controller instances or
    /// from stale tick epochs are ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id != self.id || tick_msg.tag != self.tag {
                return None;
            }
            return self.tick_at(Instant::now());
        }

        if let Some(done_msg) = msg.downcast_ref::<DoneMsg>() {
            if done_msg.id != self.id || self.finished_preset().is_none() {
                return None;
            }
            return Some(self.dismiss_cmd());
        }

        if let Some(dismiss_msg) = msg.downcast_ref::<DismissMsg>() {
            if dismiss_msg.id != self.id || dismiss_msg.tag != self.tag {
                return None;
            }
            if let Phase::Done { .. } = self.phase {
                self.phase = Phase::Idle;
            }
            return None;
        }

        if msg.downcast_ref::<ResumeMsg>().is_some() {
            return self.resync_at(Instant::now());
        }

        None
    }

    /// Renders the published countdown: `MM:SS`, or `"Done!"` while the
    /// done display is up.
    pub fn view(&self) -> String {
        match self.phase {
            Phase::Done { .. } => "Done!".to_string(),
            _ => format_time(self.remaining_secs),
        }
    }

    fn complete(&mut self, natural: bool) -> Cmd {
        let preset = match self.phase {
            Phase::Running { preset, .. } => preset,
            Phase::Done { preset } => preset,
            Phase::Idle => 0,
        };
        if natural {
            self.alert.completed(VIBRATION_PULSE);
        }
        self.phase = Phase::Done { preset };
        self.remaining_secs = 0;
        self.tag += 1;
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(DoneMsg { id, preset }) as Msg
        })
    }

    fn dismiss_cmd(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(DONE_DISPLAY, move |_| {
            Box::new(DismissMsg { id, tag }) as Msg
        })
    }

    fn tick_cmd(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default)]
    struct CountingAlert {
        pulses: Rc<Cell<u32>>,
    }

    impl Alert for CountingAlert {
        fn completed(&mut self, _pulse: Duration) {
            self.pulses.set(self.pulses.get() + 1);
        }
    }

    fn counting() -> (Model<CountingAlert>, Rc<Cell<u32>>) {
        let pulses = Rc::new(Cell::new(0));
        let model = new().with_alert(CountingAlert {
            pulses: Rc::clone(&pulses),
        });
        (model, pulses)
    }

    fn assert_selection_invariant<A: Alert>(egg: &Model<A>) {
        assert_eq!(egg.active_preset().is_some(), egg.deadline().is_some());
    }

    #[test]
    fn test_idle_defaults() {
        let egg = new();
        assert_eq!(egg.active_preset(), None);
        assert_eq!(egg.deadline(), None);
        assert_eq!(egg.finished_preset(), None);
        assert_eq!(egg.remaining_secs(), 0);
        assert_eq!(egg.custom_minutes(), None);
        assert_eq!(egg.view(), "00:00");
        assert!(egg.err.is_none());
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_start_publishes_full_duration() {
        let mut egg = new();
        let now = Instant::now();

        let cmd = egg.start_at(preset::SOFT, now);
        assert!(cmd.is_some());
        assert_eq!(egg.active_preset(), Some(preset::SOFT));
        assert_eq!(egg.deadline(), Some(now + Duration::from_secs(300)));
        assert_eq!(egg.remaining_secs(), 300);
        assert_eq!(egg.view(), "05:00");
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_same_preset_toggles_off() {
        let mut egg = new();
        let now = Instant::now();

        egg.start_at(preset::MEDIUM, now);
        assert_eq!(egg.active_preset(), Some(preset::MEDIUM));

        let cmd = egg.start_at(preset::MEDIUM, now + Duration::from_secs(5));
        assert!(cmd.is_none());
        assert_eq!(egg.active_preset(), None);
        assert_eq!(egg.deadline(), None);
        assert_eq!(egg.remaining_secs(), 0);
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_cancel_twice_never_errors() {
        let mut egg = new();
        let now = Instant::now();

        egg.start_at(preset::SOFT, now);
        egg.start_at(preset::SOFT, now); // toggle off
        let cmd = egg.start_at(0, now); // active id is now 0: no-op
        assert!(cmd.is_none());
        assert_eq!(egg.active_preset(), None);
        assert_eq!(egg.remaining_secs(), 0);
        assert!(egg.err.is_none());
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_unknown_preset_is_noop() {
        let mut egg = new();
        let now = Instant::now();

        egg.start_at(preset::SOFT, now);
        let cmd = egg.start_at(9, now);
        assert!(cmd.is_none());
        assert_eq!(egg.active_preset(), Some(preset::SOFT));
        assert_eq!(egg.remaining_secs(), 300);
    }

    #[test]
    fn test_custom_unset_is_rejected() {
        let mut egg = new();
        let now = Instant::now();

        let cmd = egg.start_at(preset::CUSTOM, now);
        assert!(cmd.is_none());
        assert!(egg.err.is_some());
        assert_eq!(egg.active_preset(), None);
        assert_eq!(egg.deadline(), None);
        assert_eq!(egg.remaining_secs(), 0);
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_custom_zero_is_rejected() {
        let mut egg = new();
        egg.set_custom_minutes(0);

        let cmd = egg.start_at(preset::CUSTOM, Instant::now());
        assert!(cmd.is_none());
        assert!(egg.err.is_some());
        assert_eq!(egg.active_preset(), None);
    }

    #[test]
    fn test_custom_minutes_drive_duration() {
        let mut egg = new();
        let now = Instant::now();
        egg.set_custom_minutes(3);

        let cmd = egg.start_at(preset::CUSTOM, now);
        assert!(cmd.is_some());
        assert_eq!(egg.active_preset(), Some(preset::CUSTOM));
        assert_eq!(egg.remaining_secs(), 180);
        assert_eq!(egg.deadline(), Some(now + Duration::from_secs(180)));
    }

    #[test]
    fn test_rejection_message_clears_on_next_start() {
        let mut egg = new();
        let now = Instant::now();

        egg.start_at(preset::CUSTOM, now);
        assert!(egg.err.is_some());

        egg.start_at(preset::SOFT, now);
        assert!(egg.err.is_none());
        assert_eq!(egg.active_preset(), Some(preset::SOFT));
    }

    #[test]
    fn test_switching_presets_restarts_countdown() {
        let mut egg = new();
        let now = Instant::now();

        egg.start_at(preset::SOFT, now);
        let cmd = egg.start_at(preset::MEDIUM, now + Duration::from_secs(10));
        assert!(cmd.is_some());
        assert_eq!(egg.active_preset(), Some(preset::MEDIUM));
        assert_eq!(egg.remaining_secs(), 420);
        assert_eq!(
            egg.deadline(),
            Some(now + Duration::from_secs(10) + Duration::from_secs(420))
        );
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_countdown_is_monotonic_and_converges() {
        let (mut egg, pulses) = counting();
        let now = Instant::now();
        egg.start_at(preset::SOFT, now);

        let mut previous = egg.remaining_secs();
        let mut nonzero_ticks = 0u64;
        for second in 1..=300u64 {
            egg.tick_at(now + Duration::from_secs(second));
            let left = egg.remaining_secs();
            assert!(left <= previous, "remaining went up at second {second}");
            previous = left;
            if left > 0 {
                nonzero_ticks += 1;
            }
            assert_selection_invariant(&egg);
        }

        assert_eq!(egg.remaining_secs(), 0);
        assert!((299..=301).contains(&nonzero_ticks));
        assert_eq!(egg.view(), "Done!");
        assert_eq!(egg.active_preset(), None);
        assert_eq!(egg.finished_preset(), Some(preset::SOFT));
        assert_eq!(pulses.get(), 1);
    }

    #[test]
    fn test_done_display_dismisses_back_to_idle() {
        let mut egg = new().with_alert(crate::alert::Silent);
        let now = Instant::now();
        egg.start_at(preset::SOFT, now);
        egg.tick_at(now + Duration::from_secs(300));
        assert_eq!(egg.view(), "Done!");

        // The completion announcement schedules the dismiss...
        let done: Msg = Box::new(DoneMsg {
            id: egg.id(),
            preset: preset::SOFT,
        });
        assert!(egg.update(&done).is_some());

        // ...and the dismiss resets the display.
        let dismiss: Msg = Box::new(DismissMsg {
            id: egg.id(),
            tag: egg.tag,
        });
        egg.update(&dismiss);
        assert_eq!(egg.finished_preset(), None);
        assert_eq!(egg.view(), "00:00");
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_resync_recomputes_from_wall_clock() {
        let mut egg = new();
        let now = Instant::now();
        egg.start_at(preset::SOFT, now);

        let cmd = egg.resync_at(now + Duration::from_secs(120));
        assert!(cmd.is_some());
        assert_eq!(egg.remaining_secs(), 180);
        assert_eq!(egg.active_preset(), Some(preset::SOFT));
    }

    #[test]
    fn test_resync_past_deadline_completes_without_pulse() {
        let (mut egg, pulses) = counting();
        let now = Instant::now();
        egg.start_at(preset::SOFT, now);

        let cmd = egg.resync_at(now + Duration::from_secs(301));
        assert!(cmd.is_some());
        assert_eq!(egg.view(), "Done!");
        assert_eq!(egg.active_preset(), None);
        assert_eq!(egg.remaining_secs(), 0);
        assert_eq!(pulses.get(), 0);
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_resync_at_exact_deadline_waits_for_tick() {
        let (mut egg, pulses) = counting();
        let now = Instant::now();
        egg.start_at(preset::SOFT, now);

        egg.resync_at(now + Duration::from_secs(300));
        assert!(egg.running());
        assert_eq!(egg.remaining_secs(), 0);
        assert_eq!(pulses.get(), 0);

        egg.tick_at(now + Duration::from_secs(301));
        assert_eq!(egg.view(), "Done!");
        assert_eq!(pulses.get(), 1);
    }

    #[test]
    fn test_pulse_fires_exactly_once_per_completion() {
        let (mut egg, pulses) = counting();
        let now = Instant::now();
        egg.set_custom_minutes(1);
        egg.start_at(preset::CUSTOM, now);

        for second in 1..=60u64 {
            egg.tick_at(now + Duration::from_secs(second));
        }
        assert_eq!(pulses.get(), 1);

        // Late ticks and the dismiss sequence never re-fire the pulse.
        egg.tick_at(now + Duration::from_secs(61));
        let dismiss: Msg = Box::new(DismissMsg {
            id: egg.id(),
            tag: egg.tag,
        });
        egg.update(&dismiss);
        assert_eq!(pulses.get(), 1);
        assert_eq!(egg.active_preset(), None);
    }

    #[test]
    fn test_stale_tick_is_rejected() {
        let mut egg = new();
        let now = Instant::now();

        egg.start_at(preset::SOFT, now);
        let stale_tag = egg.tag;
        egg.start_at(preset::MEDIUM, now + Duration::from_secs(2));

        let stale: Msg = Box::new(TickMsg {
            id: egg.id(),
            tag: stale_tag,
        });
        assert!(egg.update(&stale).is_none());
        assert_eq!(egg.active_preset(), Some(preset::MEDIUM));
        assert_eq!(egg.remaining_secs(), 420);
    }

    #[test]
    fn test_foreign_messages_are_ignored() {
        let mut egg = new();
        let now = Instant::now();
        egg.start_at(preset::SOFT, now);

        let foreign_tick: Msg = Box::new(TickMsg {
            id: egg.id() + 1,
            tag: egg.tag,
        });
        assert!(egg.update(&foreign_tick).is_none());

        let foreign_done: Msg = Box::new(DoneMsg {
            id: egg.id() + 1,
            preset: preset::SOFT,
        });
        assert!(egg.update(&foreign_done).is_none());
        assert_eq!(egg.active_preset(), Some(preset::SOFT));
        assert_eq!(egg.remaining_secs(), 300);
    }

    #[test]
    fn test_resume_message_triggers_resync() {
        let mut egg = new();
        egg.start_at(preset::SOFT, Instant::now());

        let resume: Msg = Box::new(ResumeMsg);
        let cmd = egg.update(&resume);
        assert!(cmd.is_some());
        assert!((299..=300).contains(&egg.remaining_secs()));
    }

    #[test]
    fn test_cancel_is_idempotent_teardown() {
        let mut egg = new();
        egg.start_at(preset::HARD, Instant::now());

        egg.cancel();
        egg.cancel();
        assert_eq!(egg.active_preset(), None);
        assert_eq!(egg.remaining_secs(), 0);
        assert_selection_invariant(&egg);
    }

    #[test]
    fn test_remaining_rounds_to_nearest_second() {
        let now = Instant::now();
        assert_eq!(remaining(now, now), 0);
        assert_eq!(remaining(now + Duration::from_millis(2500), now), 3);
        assert_eq!(remaining(now + Duration::from_millis(2400), now), 2);
        assert_eq!(remaining(now, now + Duration::from_millis(2500)), -3);
    }

    #[test]
    fn test_format_time_zero_pads() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(300), "05:00");
        assert_eq!(format_time(599), "09:59");
        assert_eq!(format_time(3600), "60:00");
    }
}
