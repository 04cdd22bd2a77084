//! Plain-text PPM (`P3`) output.

use std::io::{self, Write};

use crate::{Color, FrameBuffer};

/// Averages a sample sum, applies gamma 2 and quantizes each channel to `[0, 255]`.
pub fn to_rgb8(sum: &Color, samples_per_pixel: u32) -> [u8; 3] {
    let scale = 1.0 / samples_per_pixel as f64;
    let channel = |c: f64| {
        let gamma = (scale * c).max(0.0).sqrt();
        (256.0 * gamma.clamp(0.0, 0.999)) as u8
    };
    [channel(sum.x), channel(sum.y), channel(sum.z)]
}

/// Writes the header and one `R G B` line per pixel, top row first.
pub fn write_ppm<W: Write>(
    out: &mut W,
    frame: &FrameBuffer,
    samples_per_pixel: u32,
) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", frame.width(), frame.height())?;
    writeln!(out, "255")?;
    for row in frame.rows_top_down() {
        for sum in row {
            let [r, g, b] = to_rgb8(sum, samples_per_pixel);
            writeln!(out, "{r} {g} {b}")?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(frame: &FrameBuffer, samples: u32) -> String {
        let mut out = Vec::new();
        write_ppm(&mut out, frame, samples).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn black_two_by_two() {
        let frame = FrameBuffer::new(2, 2);
        assert_eq!(
            encode(&frame, 1),
            "P3\n2 2\n255\n0 0 0\n0 0 0\n0 0 0\n0 0 0\n"
        );
    }

    #[test]
    fn quantization() {
        assert_eq!(to_rgb8(&Color::new(1.0, 0.25, 0.0), 1), [255, 128, 0]);
        assert_eq!(to_rgb8(&Color::new(4.0, 1.0, 0.0), 4), [255, 128, 0]);
        assert_eq!(to_rgb8(&Color::new(9.0, -1.0, f64::NAN), 1), [255, 0, 0]);
    }

    #[test]
    fn top_row_is_written_first() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.set_pixel(0, 1, Color::new(1.0, 1.0, 1.0));
        frame.set_pixel(1, 0, Color::new(0.25, 0.25, 0.25));
        assert_eq!(
            encode(&frame, 1),
            "P3\n2 2\n255\n255 255 255\n0 0 0\n0 0 0\n128 128 128\n"
        );
    }

    #[test]
    fn rewriting_is_byte_identical() {
        let mut frame = FrameBuffer::new(3, 2);
        for (i, x) in (0..3).enumerate() {
            frame.set_pixel(x, 1, Color::new(0.1 * i as f64, 0.3, 0.9));
        }
        assert_eq!(encode(&frame, 2), encode(&frame, 2));
        assert_eq!(encode(&frame, 2).lines().count(), 3 + 6);
    }
}
