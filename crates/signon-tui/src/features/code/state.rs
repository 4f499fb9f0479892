use std::time::{Duration, Instant};

use signon_core::validate::CODE_LENGTH;

/// Wall-clock driven countdown toward the "get new code" action.
///
/// Advanced from `Tick` events using elapsed time rather than tick counts,
/// so irregular tick cadence cannot skew it.
#[derive(Debug)]
pub struct Countdown {
    pub seconds_left: u64,
    pub active: bool,
    last_decrement: Instant,
}

impl Countdown {
    pub fn new(delay_secs: u64, now: Instant) -> Self {
        Self {
            seconds_left: delay_secs,
            active: delay_secs > 0,
            last_decrement: now,
        }
    }

    /// Consumes whole elapsed seconds since the last decrement.
    pub fn tick(&mut self, now: Instant) {
        if !self.active {
            return;
        }
        while self.seconds_left > 0
            && now.duration_since(self.last_decrement) >= Duration::from_secs(1)
        {
            self.last_decrement += Duration::from_secs(1);
            self.seconds_left -= 1;
        }
        if self.seconds_left == 0 {
            self.active = false;
        }
    }

    pub fn reset(&mut self, delay_secs: u64, now: Instant) {
        self.seconds_left = delay_secs;
        self.active = delay_secs > 0;
        self.last_decrement = now;
    }
}

/// Code-entry form state.
///
/// Focus is an explicit slot index over an explicit slot array; navigation
/// never inspects rendered output.
#[derive(Debug)]
pub struct CodeFormState {
    pub slots: [Option<char>; CODE_LENGTH],
    pub focused: usize,
    pub countdown: Countdown,
    /// Inline error from a rejected verification.
    pub error: Option<String>,
}

impl CodeFormState {
    pub fn new(resend_delay_secs: u64, now: Instant) -> Self {
        Self {
            slots: [None; CODE_LENGTH],
            focused: 0,
            countdown: Countdown::new(resend_delay_secs, now),
            error: None,
        }
    }

    /// Returns the assembled code once every slot holds a digit.
    pub fn code(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    /// Clears all slots and returns focus to the first one.
    pub fn reset_slots(&mut self) {
        self.slots = [None; CODE_LENGTH];
        self.focused = 0;
    }
}
