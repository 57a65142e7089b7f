pub use chip8::{Chip8, Cycle};
pub use config::{Config, Quirks, ShiftSource, SpriteWrap};
pub use errors::Chip8Error;
pub use instruction::Instruction;
pub use screen::FrameBuffer;

pub mod asm;
mod chip8;
pub mod config;
pub mod constants;
mod errors;
mod instruction;
pub mod keypad;
pub mod memory;
pub mod opcode;
mod operations;
pub mod screen;
pub mod stack;
pub mod state;
pub mod timers;
