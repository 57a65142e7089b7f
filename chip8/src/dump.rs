const BYTES_PER_LINE: usize = 16;

/// Formats `bytes` as a hex dump, labelling each line with its address starting at `start`
pub fn hex_dump(start: usize, bytes: &[u8]) -> String {
    bytes
        .chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(n, line)| {
            let hex: Vec<String> = line.iter().map(|byte| format!("{:02X}", byte)).collect();
            format!("{:03X}: {}\n", start + n * BYTES_PER_LINE, hex.join(" "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu8_core::constants::{FONT_OFFSET, FONT_SIZE};
    use emu8_core::Chip8;

    #[test]
    fn test_hex_dump_lines() {
        let dump = hex_dump(0x200, &[0x00, 0xE0, 0x12, 0x00]);
        assert_eq!(dump, "200: 00 E0 12 00\n");
    }

    #[test]
    fn test_hex_dump_font() {
        let chip8 = Chip8::new();
        let dump = hex_dump(FONT_OFFSET, chip8.memory(FONT_OFFSET..FONT_OFFSET + FONT_SIZE));
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("050: F0 90 90 90 F0 20 60 20"));
        assert!(lines[4].ends_with("F0 80 F0 80 80"));
    }
}
