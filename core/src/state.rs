use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, Quirks};
use crate::constants::{ADDRESS_MASK, FLAG_REGISTER, REGISTER_COUNT, ROM_OFFSET};
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::screen::Screen;
use crate::stack::Stack;
use crate::timers::Timers;

/// The complete Chip8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, pointing at the next opcode to fetch
///
/// Timers
/// - 2 8-bit timers (delay & sound)
///
/// ## Memory
/// - a 16 entry call stack of return addresses, separate from main memory
/// - 4096 bytes of addressable memory with the font at 0x050
/// - a 64x32 monochrome screen
///
/// ## Input
/// - the latched pressed status of keys 0..F
#[derive(Clone)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub stack: Stack,
    pub timers: Timers,
    pub memory: Memory,
    pub screen: Screen,
    pub keypad: Keypad,
    /// Set whenever the screen changes, cleared by whoever renders it
    pub draw_flag: bool,
    pub quirks: Quirks,
    pub rng: StdRng,
}

impl State {
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            // 0x200 is where ROMs are loaded into memory
            pc: ROM_OFFSET as u16,
            stack: Stack::new(),
            timers: Timers::new(),
            memory: Memory::new(),
            screen: Screen::new(),
            keypad: Keypad::new(),
            draw_flag: false,
            quirks: config.quirks,
            rng,
        }
    }

    pub fn register(&self, x: u8) -> u8 {
        self.v[usize::from(x)]
    }

    pub fn set_register(&mut self, x: u8, value: u8) {
        self.v[usize::from(x)] = value;
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = flag as u8;
    }

    /// Address of the opcode currently executing, given that pc has moved past it
    pub fn current_pc(&self) -> u16 {
        self.pc.wrapping_sub(2) & ADDRESS_MASK
    }
}

impl Default for State {
    fn default() -> Self {
        State::new(&Config::default())
    }
}
