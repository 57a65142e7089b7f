//! The semantics of each instruction.
//!
//! Every operation runs after the cycle driver has already moved pc past the
//! opcode, so jumps overwrite pc outright and skips add one more opcode width.
//! Arithmetic is done in u16 and truncated on store; flags are computed from
//! the operands as they were before the result is written, and VF is written
//! last so it holds the flag even when Vx is VF.

use log::trace;
use rand::Rng;

use crate::config::ShiftSource;
use crate::constants::{ADDRESS_MASK, FONT_OFFSET, GLYPH_SIZE};
use crate::errors::Chip8Error;
use crate::state::State;

const OPCODE_SIZE: u16 = 2;

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(OPCODE_SIZE) & ADDRESS_MASK;
    }
}

/// call machine code routine at addr; ignored
pub fn sys(_state: &mut State, addr: u16) {
    trace!("ignoring machine code call to {:#05X}", addr);
}

/// clear
pub fn clr(state: &mut State) {
    state.screen.clear();
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<(), Chip8Error> {
    let pc = state.current_pc();
    state.pc = state
        .stack
        .pop()
        .ok_or(Chip8Error::StackUnderflow { pc })?;
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<(), Chip8Error> {
    let pc = state.current_pc();
    state
        .stack
        .push(state.pc)
        .map_err(|_| Chip8Error::StackOverflow { pc })?;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    let condition = state.register(x) == kk;
    skip_if(state, condition);
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    let condition = state.register(x) != kk;
    skip_if(state, condition);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    let condition = state.register(x) == state.register(y);
    skip_if(state, condition);
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.set_register(x, kk);
}

/// Vx += kk
/// Overflow is dropped and VF is left alone
pub fn add(state: &mut State, x: u8, kk: u8) {
    let sum = u16::from(state.register(x)) + u16::from(kk);
    state.set_register(x, sum as u8);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.set_register(x, state.register(y));
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    state.set_register(x, state.register(x) | state.register(y));
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    state.set_register(x, state.register(x) & state.register(y));
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    state.set_register(x, state.register(x) ^ state.register(y));
}

/// Vx += Vy; VF = carry
pub fn addr(state: &mut State, x: u8, y: u8) {
    let sum = u16::from(state.register(x)) + u16::from(state.register(y));
    state.set_register(x, sum as u8);
    state.set_flag(sum > 0xFF);
}

/// Vx -= Vy; VF = !borrow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let difference = 0x100 + u16::from(state.register(x)) - u16::from(state.register(y));
    state.set_register(x, difference as u8);
    state.set_flag(difference > 0xFF);
}

/// Vx >>= 1; VF = shifted out bit
pub fn shr(state: &mut State, x: u8, y: u8) {
    let source = shift_source(state, x, y);
    state.set_register(x, source >> 1);
    state.set_flag(source & 0x1 == 0x1);
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let difference = 0x100 + u16::from(state.register(y)) - u16::from(state.register(x));
    state.set_register(x, difference as u8);
    state.set_flag(difference > 0xFF);
}

/// Vx <<= 1; VF = shifted out bit
pub fn shl(state: &mut State, x: u8, y: u8) {
    let shifted = u16::from(shift_source(state, x, y)) << 1;
    state.set_register(x, shifted as u8);
    state.set_flag(shifted > 0xFF);
}

fn shift_source(state: &State, x: u8, y: u8) -> u8 {
    match state.quirks.shift_source {
        ShiftSource::Vx => state.register(x),
        ShiftSource::Vy => state.register(y),
    }
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    let condition = state.register(x) != state.register(y);
    skip_if(state, condition);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
}

/// PC = V0 + addr, kept within the 12-bit address space
pub fn jumpi(state: &mut State, addr: u16) {
    state.pc = (addr + u16::from(state.register(0x0))) & ADDRESS_MASK;
}

/// Vx = rand_byte & kk
pub fn rnd(state: &mut State, x: u8, kk: u8) {
    let rand_byte: u8 = state.rng.gen();
    state.set_register(x, rand_byte & kk);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs an n byte sprite from memory at I onto the screen at (Vx, Vy).
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) {
    let rows = state.memory.read_from(state.i, usize::from(n));
    let (vx, vy) = (state.register(x), state.register(y));
    let collision = state
        .screen
        .draw_sprite(vx, vy, &rows, state.quirks.sprite_wrap);
    state.set_flag(collision);
    state.draw_flag = true;
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: u8) {
    let condition = state.keypad.is_pressed(state.register(x));
    skip_if(state, condition);
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: u8) {
    let condition = !state.keypad.is_pressed(state.register(x));
    skip_if(state, condition);
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.set_register(x, state.timers.delay);
}

/// Vx = first pressed key
/// Without a key press pc is wound back so this runs again next cycle
pub fn keyd(state: &mut State, x: u8) {
    match state.keypad.first_pressed() {
        Some(key) => state.set_register(x, key),
        None => state.pc = state.current_pc(),
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.timers.delay = state.register(x);
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.timers.sound = state.register(x);
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    state.i = state.i.wrapping_add(u16::from(state.register(x)));
}

/// I = address of the font glyph for the low nibble of Vx
pub fn ldspr(state: &mut State, x: u8) {
    let digit = usize::from(state.register(x) & 0xF);
    state.i = (FONT_OFFSET + digit * GLYPH_SIZE) as u16;
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(state: &mut State, x: u8) {
    let value = state.register(x);
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.memory.write(state.i.wrapping_add(offset as u16), *digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8) {
    for r in 0..=x {
        let byte = state.register(r);
        state.memory.write(state.i.wrapping_add(u16::from(r)), byte);
    }
    advance_index(state, x);
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8) {
    for r in 0..=x {
        let byte = state.memory.read(state.i.wrapping_add(u16::from(r)));
        state.set_register(r, byte);
    }
    advance_index(state, x);
}

fn advance_index(state: &mut State, x: u8) {
    if state.quirks.load_store_increments_index {
        state.i = state.i.wrapping_add(u16::from(x) + 1);
    }
}
