//! Countdown engine for rest intervals.

use crate::core::format_mmss;

/// Selectable rest durations, in seconds.
pub const PRESETS: [u32; 6] = [30, 45, 60, 90, 120, 180];

/// State of the rest timer and the set counter.
///
/// All operations are total: no input can put the timer in an invalid
/// state. The host loop calls [`RestTimer::tick`] once per second while
/// the timer is running; everything else is driven by user actions.
#[derive(Debug, Clone)]
pub struct RestTimer {
    /// Selected rest duration in seconds.
    selected: u32,
    /// Seconds left in the current rest.
    remaining: u32,
    /// Total sets planned for the workout.
    total_sets: u32,
    /// Set currently being worked, 1-based.
    current_set: u32,
    /// Whether the countdown is ticking.
    running: bool,
}

impl RestTimer {
    /// Create a timer from persisted values, clamping them into range.
    ///
    /// `selected` snaps to the nearest preset if it is not one (stale or
    /// hand-edited state files), `total_sets` is at least 1 and
    /// `current_set` lands in `[1, total_sets]`.
    #[must_use]
    pub fn new(selected: u32, total_sets: u32, current_set: u32) -> Self {
        let selected = if PRESETS.contains(&selected) {
            selected
        } else {
            nearest_preset(selected)
        };
        let total_sets = total_sets.max(1);
        let current_set = current_set.clamp(1, total_sets);

        Self {
            selected,
            remaining: selected,
            total_sets,
            current_set,
            running: false,
        }
    }

    /// Select a rest duration; sets both selected and remaining.
    ///
    /// Allowed from any state. Stops a running countdown implicitly only
    /// in the sense that the remaining time restarts from the new
    /// duration; the running flag is untouched.
    pub fn select(&mut self, seconds: u32) {
        self.selected = seconds;
        self.remaining = seconds;
    }

    /// Start the countdown. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
    }

    /// Pause the countdown; remaining time is retained.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop the countdown and restore the selected duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.selected;
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true exactly when the rest just ended, so the caller can
    /// emit the "rest over" signal once. Ignored while not running.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.running = false;
            true
        } else {
            false
        }
    }

    /// Add a set to the workout.
    pub fn increment_sets(&mut self) {
        self.total_sets += 1;
    }

    /// Remove a set, keeping at least one and clamping the current set.
    pub fn decrement_sets(&mut self) {
        self.total_sets = self.total_sets.saturating_sub(1).max(1);
        self.current_set = self.current_set.min(self.total_sets);
    }

    /// Finish the current set: advance the counter (never past the
    /// total), restore the rest duration and start counting down.
    pub fn complete_set(&mut self) {
        if self.current_set < self.total_sets {
            self.current_set += 1;
        }
        self.remaining = self.selected;
        self.running = false;
        self.start();
    }

    /// Selected rest duration in seconds.
    #[must_use]
    pub const fn selected(&self) -> u32 {
        self.selected
    }

    /// Seconds left in the current rest.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Total sets planned.
    #[must_use]
    pub const fn total_sets(&self) -> u32 {
        self.total_sets
    }

    /// Current set number, 1-based.
    #[must_use]
    pub const fn current_set(&self) -> u32 {
        self.current_set
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining)
    }

    /// Set counter as `current / total`.
    #[must_use]
    pub fn format_sets(&self) -> String {
        format!("{} / {}", self.current_set, self.total_sets)
    }
}

/// The preset closest to `seconds` (ties resolve to the shorter one).
fn nearest_preset(seconds: u32) -> u32 {
    let mut best = PRESETS[0];
    for preset in PRESETS {
        if seconds.abs_diff(preset) < seconds.abs_diff(best) {
            best = preset;
        }
    }
    best
}
