use emu8_core::asm::assemble;
use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_ROM_SIZE};
use emu8_core::{Chip8, Chip8Error, Config, Instruction};

fn machine(rom: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::with_config(Config {
        seed: Some(0x8),
        ..Config::default()
    });
    chip8.load_rom_bytes(rom).expect("rom fits");
    chip8
}

fn assembled(source: &str) -> Chip8 {
    machine(&assemble(source).expect("source assembles"))
}

fn run(chip8: &mut Chip8, cycles: usize) {
    for _ in 0..cycles {
        chip8.step().expect("cycle should not fault");
    }
}

#[test]
fn test_load_then_add() {
    // LD V0, 0x05; ADD V0, 0x03
    let mut chip8 = machine(&[0x60, 0x05, 0x70, 0x03]);
    run(&mut chip8, 2);
    assert_eq!(chip8.registers()[0x0], 0x08);
    assert_eq!(chip8.pc(), 0x204);
}

#[test]
fn test_call_then_return() {
    // CALL 0x204; JP 0x208; RET
    let mut chip8 = machine(&[0x22, 0x04, 0x12, 0x08, 0x00, 0xEE]);
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x204);
    assert_eq!(chip8.stack(), &[0x202]);
    chip8.step().unwrap();
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x202);
    assert!(chip8.stack().is_empty());
}

#[test]
fn test_recursion_overflows_stack() {
    // CALL 0x200 forever
    let mut chip8 = machine(&[0x22, 0x00]);
    run(&mut chip8, 16);
    match chip8.step() {
        Err(Chip8Error::StackOverflow { pc }) => assert_eq!(pc, 0x200),
        other => panic!("expected StackOverflow, got {:?}", other),
    }
    assert_eq!(chip8.stack().len(), 16);
}

#[test]
fn test_draws_font_digit_twice() {
    let mut chip8 = assembled(
        "ld v0, a
         ld f, v0
         drw v1, v1, 5
         drw v1, v1, 5",
    );
    run(&mut chip8, 3);
    assert_eq!(chip8.index(), 0x50 + 0xA * 5);
    assert_eq!(chip8.registers()[0xF], 0);
    let lit = chip8.frame().iter().flatten().filter(|&&p| p).count();
    // The A glyph: F0 90 F0 90 90
    assert_eq!(lit, 4 + 2 + 4 + 2 + 2);

    chip8.step().unwrap();
    assert_eq!(chip8.registers()[0xF], 1);
    assert!(chip8.frame().iter().flatten().all(|&p| !p));
}

#[test]
fn test_bcd_round_trip_through_registers() {
    let mut chip8 = assembled(
        "ld v3, ff
         ld i, 300
         ld b, v3
         ld v2, [i]",
    );
    run(&mut chip8, 4);
    assert_eq!(chip8.memory(0x300..0x303), &[2, 5, 5]);
    assert_eq!(&chip8.registers()[0..3], &[2, 5, 5]);
}

#[test]
fn test_unknown_opcodes_fall_through() {
    // two undefined words then LD V0, 1
    let mut chip8 = machine(&[0x51, 0x21, 0xFF, 0xFF, 0x60, 0x01]);
    assert_eq!(chip8.current_instruction(), Instruction::Unknown(0x5121));
    run(&mut chip8, 3);
    assert_eq!(chip8.registers()[0x0], 0x01);
    assert_eq!(chip8.pc(), 0x206);
}

#[test]
fn test_skip_on_key() {
    let rom = assemble(
        "ld v0, 7
         skp v0
         ld v1, 1
         ld v2, 1",
    )
    .unwrap();

    let mut released = machine(&rom);
    run(&mut released, 4);
    assert_eq!(released.registers()[0x1], 1);

    let mut pressed = machine(&rom);
    pressed.key_press(0x7);
    run(&mut pressed, 3);
    assert_eq!(pressed.registers()[0x1], 0);
    assert_eq!(pressed.registers()[0x2], 1);
}

#[test]
fn test_delay_loop() {
    let mut chip8 = assembled(
        "ld v0, 4
         ld dt, v0
         ld v1, dt   # 0x204
         se v1, 0
         jp 204
         ld v2, 1",
    );
    let mut cycles = 0;
    while chip8.registers()[0x2] == 0 {
        chip8.step().unwrap();
        cycles += 1;
        assert!(cycles < 100, "delay loop never finished");
    }
    assert_eq!(chip8.delay_timer(), 0);
}

#[test]
fn test_screen_dimensions() {
    let chip8 = machine(&[]);
    assert_eq!(chip8.frame().len(), DISPLAY_HEIGHT);
    assert_eq!(chip8.frame()[0].len(), DISPLAY_WIDTH);
}

#[test]
fn test_rejects_oversized_rom() {
    let mut chip8 = Chip8::new();
    let rom = vec![0u8; MAX_ROM_SIZE + 1];
    assert!(matches!(
        chip8.load_rom_bytes(&rom),
        Err(Chip8Error::RomTooLarge { .. })
    ));
}
