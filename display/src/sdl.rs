use sdl2::pixels::PixelFormatEnum;

use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8_core::FrameBuffer;

use crate::texture::frame_to_rgb24;
use crate::{DisplayError, Render};

const SCALE: usize = 10;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// It is scaled up into an SDL2 window and only redrawn when asked to render.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title, usually the ROM name
    pub fn new(sdl: &sdl2::Sdl, title: &str) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(DisplayError::Sdl)?;
        let window = video_subsystem
            .window(
                title,
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }
}

impl Render for Display {
    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;

        let pixels = frame_to_rgb24(frame);
        let pitch = self.width * 3;
        texture
            .with_lock(None, |buffer: &mut [u8], row_pitch: usize| {
                for (row, chunk) in pixels.chunks(pitch).enumerate() {
                    let start = row * row_pitch;
                    buffer[start..start + pitch].copy_from_slice(chunk);
                }
            })
            .map_err(DisplayError::Sdl)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::Sdl)?;
        self.canvas.present();
        Ok(())
    }
}
