use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use emu8_core::asm::assemble;
use emu8_core::constants::MAX_ROM_SIZE;

/// Assembles Chip-8 mnemonics into a ROM
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Assembly source, one instruction per line
    input: PathBuf,

    /// Where to write the ROM
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("unable to read {}", args.input.display()))?;
    let rom = assemble(&source).with_context(|| format!("in {}", args.input.display()))?;
    if rom.len() > MAX_ROM_SIZE {
        bail!(
            "{} bytes will not fit in memory, max size is {} bytes",
            rom.len(),
            MAX_ROM_SIZE
        );
    }
    fs::write(&args.output, &rom)
        .with_context(|| format!("unable to write {}", args.output.display()))?;
    info!("wrote {} instructions to {}", rom.len() / 2, args.output.display());

    Ok(())
}
