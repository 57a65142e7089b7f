use std::io::{self, Stdout, Write};

use crossterm::{cursor, execute, queue, style, terminal};
use log::warn;

use emu8_core::FrameBuffer;

use crate::{DisplayError, Render};

const LIT: &str = "██";
const UNLIT: &str = "  ";

/// # Terminal
/// Draws the frame buffer into the terminal's alternate screen, two
/// characters per pixel so pixels come out roughly square.
///
/// The terminal is put into raw mode for the lifetime of this value and
/// restored when it is dropped.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn new() -> Result<Self, DisplayError> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;
        Ok(Terminal { out })
    }

    /// Writes a line of text beneath the frame
    pub fn status(&mut self, row: u16, text: &str) -> Result<(), DisplayError> {
        queue!(
            self.out,
            cursor::MoveTo(0, row),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(text)
        )?;
        self.out.flush()?;
        Ok(())
    }
}

impl Render for Terminal {
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        for (y, row) in frame.iter().enumerate() {
            let line: String = row.iter().map(|&lit| if lit { LIT } else { UNLIT }).collect();
            queue!(self.out, cursor::MoveTo(0, y as u16), style::Print(line))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let restored = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)
            .and_then(|_| terminal::disable_raw_mode());
        if let Err(e) = restored {
            warn!("unable to restore terminal: {}", e);
        }
    }
}
