use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use emu8_core::constants::DISPLAY_HEIGHT;
use emu8_core::{Chip8, FrameBuffer};
use emu8_display::{frame_to_text, Render, Terminal};

use crate::keymap::{keymap, KeyLatch};
use crate::run::Frontend;

/// How long a terminal key press counts as held without a repeat
const KEY_HOLD: Duration = Duration::from_millis(150);

const STATUS_ROW: u16 = DISPLAY_HEIGHT as u16 + 1;
const HELP: &str = "keys 1234/qwer/asdf/zxcv, esc quits";

/// Renders into the terminal and reads keys from it
pub struct TerminalFrontend {
    terminal: Terminal,
    latch: KeyLatch,
    sounding: bool,
}

impl TerminalFrontend {
    pub fn new() -> Result<Self> {
        let mut terminal = Terminal::new()?;
        terminal.status(STATUS_ROW, HELP)?;
        Ok(TerminalFrontend {
            terminal,
            latch: KeyLatch::new(KEY_HOLD),
            sounding: false,
        })
    }

    /// There is no audio, so the sound timer shows up on the status line
    fn show_sound(&mut self, active: bool) -> Result<()> {
        if active != self.sounding {
            self.sounding = active;
            let text = if active {
                format!("{}  *BEEP*", HELP)
            } else {
                HELP.to_string()
            };
            self.terminal.status(STATUS_ROW, &text)?;
        }
        Ok(())
    }
}

impl Frontend for TerminalFrontend {
    fn poll_input(&mut self, chip8: &mut Chip8) -> Result<bool> {
        let now = Instant::now();
        while event::poll(Duration::ZERO)? {
            let key = match event::read()? {
                Event::Key(key) => key,
                _ => continue,
            };
            match key.code {
                KeyCode::Esc => return Ok(false),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(false)
                }
                KeyCode::Char(c) => {
                    if let Some(k) = keymap(c) {
                        if key.kind == KeyEventKind::Release {
                            self.latch.release(k);
                        } else {
                            self.latch.press(k, now);
                        }
                    }
                }
                _ => continue,
            }
        }
        chip8.set_keys(self.latch.keys(now));
        self.show_sound(chip8.sound_active())?;
        Ok(true)
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.terminal.render(frame)?;
        Ok(())
    }
}

/// No window and no keyboard; the run ends on the cycle limit
pub struct Headless {
    dump_frames: bool,
    frames: u64,
}

impl Headless {
    /// With `dump_frames` every changed screen is printed to stdout as text
    pub fn new(dump_frames: bool) -> Self {
        Headless {
            dump_frames,
            frames: 0,
        }
    }
}

impl Frontend for Headless {
    fn poll_input(&mut self, _chip8: &mut Chip8) -> Result<bool> {
        Ok(true)
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.frames += 1;
        if self.dump_frames {
            print!("{}", frame_dump(self.frames, frame));
        }
        Ok(())
    }
}

fn frame_dump(n: u64, frame: &FrameBuffer) -> String {
    format!("frame {}:\n{}\n", n, frame_to_text(frame))
}

#[cfg(feature = "sdl")]
pub use self::sdl::SdlFrontend;

#[cfg(feature = "sdl")]
mod sdl {
    use anyhow::{Error, Result};
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;

    use emu8_core::{Chip8, FrameBuffer};
    use emu8_display::sdl::Display;
    use emu8_display::Render;

    use crate::keymap::sdl_keymap;
    use crate::run::Frontend;

    /// An SDL2 window with real key-down and key-up events
    pub struct SdlFrontend {
        display: Display,
        events: sdl2::EventPump,
        _sdl: sdl2::Sdl,
    }

    impl SdlFrontend {
        pub fn new(title: &str) -> Result<Self> {
            let sdl = sdl2::init().map_err(Error::msg)?;
            let display = Display::new(&sdl, title)?;
            let events = sdl.event_pump().map_err(Error::msg)?;
            Ok(SdlFrontend {
                display,
                events,
                _sdl: sdl,
            })
        }
    }

    impl Frontend for SdlFrontend {
        fn poll_input(&mut self, chip8: &mut Chip8) -> Result<bool> {
            for event in self.events.poll_iter() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => return Ok(false),
                    Event::KeyDown {
                        keycode: Some(key), ..
                    } => {
                        if let Some(k) = sdl_keymap(key) {
                            chip8.key_press(k);
                        }
                    }
                    Event::KeyUp {
                        keycode: Some(key), ..
                    } => {
                        if let Some(k) = sdl_keymap(key) {
                            chip8.key_release(k);
                        }
                    }
                    _ => continue,
                }
            }
            Ok(true)
        }

        fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
            self.display.render(frame)?;
            Ok(())
        }
    }
}
