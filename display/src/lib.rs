//! Rendering sinks for the Chip-8 frame buffer.
//!
//! Renderers only ever read a `FrameBuffer`; how often they are asked to draw
//! is up to the host loop.

use emu8_core::FrameBuffer;
use thiserror::Error;

pub use terminal::Terminal;
pub use texture::{frame_to_rgb24, frame_to_text};

#[cfg(feature = "sdl")]
pub mod sdl;
mod terminal;
mod texture;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sdl error: {0}")]
    Sdl(String),
}

/// Something that can put a frame in front of a user
pub trait Render {
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;
}
