use std::io::Read;
use std::ops::Range;

use log::{debug, trace};

use crate::config::Config;
use crate::constants::{ADDRESS_MASK, KEY_COUNT, REGISTER_COUNT, ROM_OFFSET};
use crate::errors::Chip8Error;
use crate::instruction::Instruction;
use crate::opcode::fetch;
use crate::screen::FrameBuffer;
use crate::state::State;
use crate::timers::TimerClock;

/// What a single call to `Chip8::step` did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    pub instruction: Instruction,
    /// The program is parked on `Fx0A` until a key goes down
    pub awaiting_key: bool,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `timer_clock` deciding which cycles tick the timers
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one cycle at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
/// - read-only introspection of registers, memory and the call stack
pub struct Chip8 {
    config: Config,
    state: State,
    timer_clock: TimerClock,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        debug!("creating machine with {:?}", config);
        Chip8 {
            state: State::new(&config),
            timer_clock: TimerClock::new(config.cycles_per_timer_tick),
            config,
        }
    }

    /// Returns the machine to power-on state; the ROM has to be loaded again
    pub fn reset(&mut self) {
        debug!("resetting machine");
        *self = Chip8::with_config(self.config);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Chip8Error> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_rom_bytes(&rom)
    }

    /// Copies a ROM image into memory at 0x200
    pub fn load_rom_bytes(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        self.state.memory.load(ROM_OFFSET, rom)?;
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), ROM_OFFSET);
        Ok(())
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode at pc and moves pc past it
    /// - decodes and executes it
    /// - ticks the timers when they are due
    ///
    /// A faulting instruction leaves pc on itself and the timers untouched.
    pub fn step(&mut self) -> Result<Cycle, Chip8Error> {
        let pc = self.state.pc;
        let op = self.get_op();
        let instruction = Instruction::decode(op);
        trace!(
            "{:04X} {:?} v{:02X?} i{:04X} pc{:04X}",
            op,
            instruction,
            self.state.v,
            self.state.i,
            pc
        );

        self.state.pc = pc.wrapping_add(2) & ADDRESS_MASK;
        if let Err(e) = instruction.execute(&mut self.state) {
            self.state.pc = pc;
            return Err(e);
        }

        if self.timer_clock.cycle() {
            self.state.timers.tick();
        }

        let awaiting_key = matches!(instruction, Instruction::WaitKey { .. }) && self.state.pc == pc;
        Ok(Cycle {
            instruction,
            awaiting_key,
        })
    }

    /// Handles a timer tick for hosts driving the timers on their own clock
    pub fn tick_timers(&mut self) {
        self.state.timers.tick();
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.state.keypad.press(key);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.state.keypad.release(key);
    }

    /// Replaces the whole keypad latch at once
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.state.keypad.set_all(keys);
    }

    pub fn frame(&self) -> &FrameBuffer {
        self.state.screen.frame()
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.screen.frame())
        } else {
            None
        }
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.timers.delay
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.timers.sound
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.state.v
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    /// Return addresses on the call stack, oldest first
    pub fn stack(&self) -> &[u16] {
        self.state.stack.as_slice()
    }

    pub fn memory(&self, range: Range<usize>) -> &[u8] {
        self.state.memory.slice(range)
    }

    /// The instruction the next `step` will execute
    pub fn current_instruction(&self) -> Instruction {
        Instruction::decode(self.get_op())
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let pc = self.state.pc;
        fetch(
            self.state.memory.read(pc),
            self.state.memory.read(pc.wrapping_add(1)),
        )
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
