use crate::config::SpriteWrap;
use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Screen
/// A 64x32 monochrome display. Sprites are XORed onto it, so drawing the same
/// sprite twice in the same place erases it again.
#[derive(Copy, Clone)]
pub struct Screen {
    frame: FrameBuffer,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            frame: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.frame = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.frame[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    /// XORs an 8-pixel-wide sprite onto the screen with its top left corner at (x, y).
    ///
    /// The origin always wraps onto the screen. Pixels that then run off the
    /// edge are clipped or wrapped according to `wrap`.
    ///
    /// Returns whether any lit pixel was switched off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8], wrap: SpriteWrap) -> bool {
        let x0 = usize::from(x) % DISPLAY_WIDTH;
        let y0 = usize::from(y) % DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, byte) in rows.iter().enumerate() {
            let y = match Screen::place(y0 + row, DISPLAY_HEIGHT, wrap) {
                Some(y) => y,
                None => break,
            };
            for bit in 0..8 {
                if byte & (0x80 >> bit) == 0 {
                    continue;
                }
                let x = match Screen::place(x0 + bit, DISPLAY_WIDTH, wrap) {
                    Some(x) => x,
                    None => break,
                };
                let pixel = &mut self.frame[y][x];
                collision |= *pixel;
                *pixel ^= true;
            }
        }

        collision
    }

    fn place(coordinate: usize, limit: usize, wrap: SpriteWrap) -> Option<usize> {
        match wrap {
            SpriteWrap::Wrap => Some(coordinate % limit),
            SpriteWrap::Clip if coordinate < limit => Some(coordinate),
            SpriteWrap::Clip => None,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
