use log::debug;

use crate::errors::Chip8Error;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A decoded opcode with its operands pulled out.
///
/// Every 16-bit word decodes to something; words that don't match a
/// defined shape become `Unknown` and execute as a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `0nnn` SYS addr
    Sys(u16),
    /// `00E0` CLS
    Cls,
    /// `00EE` RET
    Ret,
    /// `1nnn` JP addr
    Jump(u16),
    /// `2nnn` CALL addr
    Call(u16),
    /// `3xkk` SE Vx, byte
    SkipEqByte { x: u8, kk: u8 },
    /// `4xkk` SNE Vx, byte
    SkipNeByte { x: u8, kk: u8 },
    /// `5xy0` SE Vx, Vy
    SkipEqReg { x: u8, y: u8 },
    /// `6xkk` LD Vx, byte
    LoadByte { x: u8, kk: u8 },
    /// `7xkk` ADD Vx, byte
    AddByte { x: u8, kk: u8 },
    /// `8xy0` LD Vx, Vy
    Move { x: u8, y: u8 },
    /// `8xy1` OR Vx, Vy
    Or { x: u8, y: u8 },
    /// `8xy2` AND Vx, Vy
    And { x: u8, y: u8 },
    /// `8xy3` XOR Vx, Vy
    Xor { x: u8, y: u8 },
    /// `8xy4` ADD Vx, Vy
    AddReg { x: u8, y: u8 },
    /// `8xy5` SUB Vx, Vy
    Sub { x: u8, y: u8 },
    /// `8xy6` SHR Vx {, Vy}
    ShiftRight { x: u8, y: u8 },
    /// `8xy7` SUBN Vx, Vy
    SubN { x: u8, y: u8 },
    /// `8xyE` SHL Vx {, Vy}
    ShiftLeft { x: u8, y: u8 },
    /// `9xy0` SNE Vx, Vy
    SkipNeReg { x: u8, y: u8 },
    /// `Annn` LD I, addr
    LoadIndex(u16),
    /// `Bnnn` JP V0, addr
    JumpOffset(u16),
    /// `Cxkk` RND Vx, byte
    Random { x: u8, kk: u8 },
    /// `Dxyn` DRW Vx, Vy, nibble
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E` SKP Vx
    SkipPressed { x: u8 },
    /// `ExA1` SKNP Vx
    SkipNotPressed { x: u8 },
    /// `Fx07` LD Vx, DT
    LoadDelay { x: u8 },
    /// `Fx0A` LD Vx, K
    WaitKey { x: u8 },
    /// `Fx15` LD DT, Vx
    SetDelay { x: u8 },
    /// `Fx18` LD ST, Vx
    SetSound { x: u8 },
    /// `Fx1E` ADD I, Vx
    AddIndex { x: u8 },
    /// `Fx29` LD F, Vx
    LoadGlyph { x: u8 },
    /// `Fx33` LD B, Vx
    StoreBcd { x: u8 },
    /// `Fx55` LD [I], Vx
    StoreRegisters { x: u8 },
    /// `Fx65` LD Vx, [I]
    LoadRegisters { x: u8 },
    /// Anything else
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction for a given Opcode
    pub fn decode(op: u16) -> Self {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Cls,
            (0x0, 0x0, 0xE, 0xE) => Ret,
            (0x0, ..) => Sys(addr),
            (0x1, ..) => Jump(addr),
            (0x2, ..) => Call(addr),
            (0x3, ..) => SkipEqByte { x, kk },
            (0x4, ..) => SkipNeByte { x, kk },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => LoadByte { x, kk },
            (0x7, ..) => AddByte { x, kk },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x, y },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x, y },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadIndex(addr),
            (0xB, ..) => JumpOffset(addr),
            (0xC, ..) => Random { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipPressed { x },
            (0xE, _, 0xA, 0x1) => SkipNotPressed { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            _ => Unknown(op),
        }
    }

    /// Applies the instruction to `state`; pc must already point past it
    pub fn execute(self, state: &mut State) -> Result<(), Chip8Error> {
        use Instruction::*;

        match self {
            Sys(addr) => sys(state, addr),
            Cls => clr(state),
            Ret => rts(state)?,
            Jump(addr) => jump(state, addr),
            Call(addr) => call(state, addr)?,
            SkipEqByte { x, kk } => ske(state, x, kk),
            SkipNeByte { x, kk } => skne(state, x, kk),
            SkipEqReg { x, y } => skre(state, x, y),
            LoadByte { x, kk } => load(state, x, kk),
            AddByte { x, kk } => add(state, x, kk),
            Move { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y),
            And { x, y } => and(state, x, y),
            Xor { x, y } => xor(state, x, y),
            AddReg { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            ShiftRight { x, y } => shr(state, x, y),
            SubN { x, y } => subn(state, x, y),
            ShiftLeft { x, y } => shl(state, x, y),
            SkipNeReg { x, y } => skrne(state, x, y),
            LoadIndex(addr) => loadi(state, addr),
            JumpOffset(addr) => jumpi(state, addr),
            Random { x, kk } => rnd(state, x, kk),
            Draw { x, y, n } => draw(state, x, y, n),
            SkipPressed { x } => skpr(state, x),
            SkipNotPressed { x } => skup(state, x),
            LoadDelay { x } => moved(state, x),
            WaitKey { x } => keyd(state, x),
            SetDelay { x } => loads(state, x),
            SetSound { x } => ld(state, x),
            AddIndex { x } => addi(state, x),
            LoadGlyph { x } => ldspr(state, x),
            StoreBcd { x } => bcd(state, x),
            StoreRegisters { x } => stor(state, x),
            LoadRegisters { x } => read(state, x),
            Unknown(op) => debug!("ignoring unknown opcode {:#06X}", op),
        }
        Ok(())
    }
}
