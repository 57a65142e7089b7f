use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};

use emu8_core::{Chip8, FrameBuffer};

/// A host-side surface: somewhere to show frames and something to read keys from
pub trait Frontend {
    /// Feeds pending input into the machine; false once the user asked to quit
    fn poll_input(&mut self, chip8: &mut Chip8) -> Result<bool>;

    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
}

/// How the host paces the machine
#[derive(Copy, Clone, Debug)]
pub struct Settings {
    /// CPU cycles per second
    pub clock_speed: u64,
    /// Timer ticks per second, used when `throttle` is set
    pub timer_hz: u64,
    /// Stop after this many cycles
    pub max_cycles: Option<u64>,
    /// Sleep between cycles to hold `clock_speed` and tick timers on the wall clock.
    /// Without it the machine runs flat out and ticks its own timers.
    pub throttle: bool,
}

fn period(hz: u64) -> Duration {
    Duration::from_nanos(1_000_000_000 / hz.max(1))
}

/// Drives `chip8` until the frontend quits, `max_cycles` runs out or the machine faults.
///
/// Returns the number of cycles executed.
pub fn run(chip8: &mut Chip8, frontend: &mut dyn Frontend, settings: &Settings) -> Result<u64> {
    let cycle_time = period(settings.clock_speed);
    let timer_period = period(settings.timer_hz);
    let mut last_cycle = Instant::now();
    let mut next_timer_tick = last_cycle + timer_period;
    let mut sounding = false;
    let mut cycles: u64 = 0;

    loop {
        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            frontend.present(frame)?;
        }

        if !frontend.poll_input(chip8)? {
            info!("quit requested after {} cycles", cycles);
            break;
        }

        if settings.max_cycles.map_or(false, |max| cycles >= max) {
            debug!("cycle limit of {} reached", cycles);
            break;
        }

        if let Err(e) = chip8.step() {
            let at = e.pc().unwrap_or_else(|| chip8.pc());
            let message = format!("machine halted at {:#05X} after {} cycles", at, cycles);
            return Err(anyhow::Error::new(e).context(message));
        }
        cycles += 1;

        if chip8.sound_active() != sounding {
            sounding = !sounding;
            debug!("sound {}", if sounding { "on" } else { "off" });
        }

        if settings.throttle {
            let now = Instant::now();
            while now >= next_timer_tick {
                chip8.tick_timers();
                next_timer_tick += timer_period;
            }

            // Handle timing
            let elapsed_cycle_time = now - last_cycle;
            if cycle_time > elapsed_cycle_time {
                std::thread::sleep(cycle_time - elapsed_cycle_time);
            }
            last_cycle = Instant::now();
        }
    }

    Ok(cycles)
}
