/// # Timers
/// Two 8-bit down-counters. Both tick towards zero and stop there.
///
/// The delay timer is readable by programs; the sound timer only signals
/// that a tone should be playing while it is non-zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers::default()
    }

    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

/// Counts cycles between timer ticks so the CPU can run faster than 60Hz
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerClock {
    cycles_per_tick: u32,
    elapsed: u32,
}

impl TimerClock {
    pub fn new(cycles_per_tick: u32) -> Self {
        TimerClock {
            cycles_per_tick,
            elapsed: 0,
        }
    }

    /// Records one cycle and reports whether the timers are due a tick
    pub fn cycle(&mut self) -> bool {
        if self.cycles_per_tick == 0 {
            return false;
        }
        self.elapsed += 1;
        if self.elapsed >= self.cycles_per_tick {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}
