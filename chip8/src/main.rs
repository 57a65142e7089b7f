use std::convert::TryFrom;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use emu8_core::constants::{CLOCK_SPEED, FONT_OFFSET, FONT_SIZE, TIMER_FREQUENCY};
use emu8_core::{Chip8, Config, Quirks, ShiftSource, SpriteWrap};
use emu8_display::frame_to_text;

mod dump;
mod frontend;
mod keymap;
mod run;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FrontendKind {
    /// Draw in the terminal
    Terminal,
    /// Open an SDL2 window (needs the `sdl` feature)
    Sdl,
    /// No output until the run ends, then print the screen
    Headless,
}

/// Runs a Chip-8 ROM
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM file
    rom: PathBuf,

    /// CPU cycles per second
    #[arg(
        long,
        default_value_t = 1_000_000_000 / CLOCK_SPEED,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    clock_speed: u64,

    /// Delay and sound timer ticks per second
    #[arg(
        long,
        default_value_t = TIMER_FREQUENCY,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timer_hz: u64,

    #[arg(long, value_enum, default_value_t = FrontendKind::Terminal)]
    frontend: FrontendKind,

    /// Stop after this many cycles; required for the headless frontend
    #[arg(long)]
    cycles: Option<u64>,

    /// Wrap sprites around the screen edges instead of clipping them
    #[arg(long)]
    wrap_sprites: bool,

    /// 8xy6 and 8xyE shift Vy into Vx
    #[arg(long)]
    shift_vy: bool,

    /// Fx55 and Fx65 leave I pointing past the last register
    #[arg(long)]
    increment_index: bool,

    /// Seed for Cxkk; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the font region of memory before running
    #[arg(long)]
    dump_font: bool,

    /// Headless only: print the screen every time it changes
    #[arg(long)]
    dump_frames: bool,
}

impl Args {
    fn config(&self) -> Config {
        let quirks = Quirks {
            sprite_wrap: if self.wrap_sprites {
                SpriteWrap::Wrap
            } else {
                SpriteWrap::Clip
            },
            shift_source: if self.shift_vy {
                ShiftSource::Vy
            } else {
                ShiftSource::Vx
            },
            load_store_increments_index: self.increment_index,
        };
        // Interactive frontends tick timers on the wall clock; headless runs
        // tick them from the cycle count so results don't depend on host speed
        let cycles_per_timer_tick = match self.frontend {
            FrontendKind::Headless => {
                let per_tick = self.clock_speed / self.timer_hz;
                u32::try_from(per_tick).unwrap_or(u32::MAX).max(1)
            }
            _ => 0,
        };
        Config {
            quirks,
            cycles_per_timer_tick,
            seed: self.seed,
        }
    }

    fn settings(&self) -> run::Settings {
        run::Settings {
            clock_speed: self.clock_speed,
            timer_hz: self.timer_hz,
            max_cycles: self.cycles,
            throttle: self.frontend != FrontendKind::Headless,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.frontend == FrontendKind::Headless && args.cycles.is_none() {
        bail!("the headless frontend needs --cycles");
    }

    let mut chip8 = Chip8::with_config(args.config());

    // Load ROM
    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open {}", args.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", args.rom.display()))?;
    info!("successfully loaded {}", args.rom.display());

    if args.dump_font {
        print!(
            "{}",
            dump::hex_dump(FONT_OFFSET, chip8.memory(FONT_OFFSET..FONT_OFFSET + FONT_SIZE))
        );
    }

    let settings = args.settings();
    let cycles = match args.frontend {
        FrontendKind::Terminal => {
            let mut frontend = frontend::TerminalFrontend::new()?;
            run::run(&mut chip8, &mut frontend, &settings)?
        }
        FrontendKind::Headless => {
            let mut frontend = frontend::Headless::new(args.dump_frames);
            let cycles = run::run(&mut chip8, &mut frontend, &settings)?;
            print!("{}", frame_to_text(chip8.frame()));
            cycles
        }
        FrontendKind::Sdl => run_sdl(&mut chip8, &args, &settings)?,
    };
    info!("ran {} cycles", cycles);

    Ok(())
}

#[cfg(feature = "sdl")]
fn run_sdl(chip8: &mut Chip8, args: &Args, settings: &run::Settings) -> Result<u64> {
    let title = args
        .rom
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("chip8"));
    let mut frontend = frontend::SdlFrontend::new(&title)?;
    run::run(chip8, &mut frontend, settings)
}

#[cfg(not(feature = "sdl"))]
fn run_sdl(_chip8: &mut Chip8, _args: &Args, _settings: &run::Settings) -> Result<u64> {
    bail!("this build has no SDL2 support; rebuild with `--features sdl`")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["chip8", "pong.ch8"]);
        assert_eq!(args.clock_speed, 500);
        assert_eq!(args.timer_hz, 60);
        assert_eq!(args.frontend, FrontendKind::Terminal);
        assert_eq!(args.config(), Config {
            cycles_per_timer_tick: 0,
            ..Config::default()
        });
        assert!(args.settings().throttle);
    }

    #[test]
    fn test_quirk_flags() {
        let args = Args::parse_from([
            "chip8",
            "pong.ch8",
            "--wrap-sprites",
            "--shift-vy",
            "--increment-index",
            "--seed",
            "7",
        ]);
        let config = args.config();
        assert_eq!(config.quirks.sprite_wrap, SpriteWrap::Wrap);
        assert_eq!(config.quirks.shift_source, ShiftSource::Vy);
        assert!(config.quirks.load_store_increments_index);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_headless_tick_interval_saturates() {
        let args = Args::parse_from([
            "chip8",
            "pong.ch8",
            "--frontend",
            "headless",
            "--cycles",
            "10",
            "--clock-speed",
            "4294967296",
            "--timer-hz",
            "1",
        ]);
        assert_eq!(args.config().cycles_per_timer_tick, u32::MAX);
    }

    #[test]
    fn test_headless_tick_interval_is_at_least_one() {
        let args = Args::parse_from([
            "chip8",
            "pong.ch8",
            "--frontend",
            "headless",
            "--cycles",
            "10",
            "--clock-speed",
            "30",
        ]);
        assert_eq!(args.config().cycles_per_timer_tick, 1);
    }

    #[test]
    fn test_rejects_zero_rates() {
        assert!(Args::try_parse_from(["chip8", "pong.ch8", "--clock-speed", "0"]).is_err());
        assert!(Args::try_parse_from(["chip8", "pong.ch8", "--timer-hz", "0"]).is_err());
    }

    #[test]
    fn test_headless_ticks_from_cycle_count() {
        let args = Args::parse_from([
            "chip8",
            "pong.ch8",
            "--frontend",
            "headless",
            "--cycles",
            "1000",
            "--clock-speed",
            "600",
        ]);
        assert_eq!(args.config().cycles_per_timer_tick, 10);
        let settings = args.settings();
        assert!(!settings.throttle);
        assert_eq!(settings.max_cycles, Some(1000));
    }
}
