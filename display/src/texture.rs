use emu8_core::FrameBuffer;

/// Formats a Chip-8 FrameBuffer as an RGB24 texture.
///
/// An RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
///
/// This creates a black and white rendering by:
/// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
/// - Mapping each pixel to 0 or 255 intensity
/// - Triplicating each element of that 1D array to represent the RGB values of each pixel
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .iter()
        .flat_map(|row| row.iter())
        .map(|&lit| if lit { 255 } else { 0 })
        .flat_map(|intensity| std::iter::repeat(intensity).take(3))
        .collect()
}

/// Formats a Chip-8 FrameBuffer as plain text, one line per row
pub fn frame_to_text(frame: &FrameBuffer) -> String {
    frame
        .iter()
        .map(|row| {
            row.iter()
                .map(|&lit| if lit { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

    fn blank() -> FrameBuffer {
        [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT]
    }

    #[test]
    fn test_frame_to_rgb24() {
        let mut frame = blank();
        frame[0][1] = true;
        frame[1][0] = true;
        let texture = frame_to_rgb24(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }

    #[test]
    fn test_frame_to_text() {
        let mut frame = blank();
        frame[0][0] = true;
        frame[31][63] = true;
        let text = frame_to_text(&frame);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), DISPLAY_HEIGHT);
        assert!(lines[0].starts_with("#."));
        assert!(lines[31].ends_with(".#"));
        assert_eq!(text.matches('#').count(), 2);
    }
}
