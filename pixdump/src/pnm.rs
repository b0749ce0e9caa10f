//! Writing native pixel data as binary PGM and PPM images.

use crate::attribute::ImageAttributes;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "Pixel data too short: {} bytes needed for a frame, {} available",
        needed,
        available
    ))]
    ShortPixelData {
        needed: usize,
        available: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not write image"))]
    WriteImage {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The file extension of the image format for the given attributes.
pub fn extension(attrs: &ImageAttributes) -> &'static str {
    if attrs.samples_per_pixel == 1 {
        "pgm"
    } else {
        "ppm"
    }
}

/// Write the first frame of the pixel data as a PGM (`P5`) image
/// for a single sample per pixel, or as a PPM (`P6`) image for three.
///
/// 8-bit samples are written as they are.
/// 16-bit samples are shifted down to the stored bits,
/// masked to `BitsStored` and written in big endian
/// with a maximum value of `2^BitsStored - 1`.
pub fn write_first_frame<W: Write>(
    mut to: W,
    attrs: &ImageAttributes,
    pixel_data: &[u8],
) -> Result<()> {
    let frame_size = attrs.frame_size();
    ensure!(
        pixel_data.len() >= frame_size,
        ShortPixelDataSnafu {
            needed: frame_size,
            available: pixel_data.len(),
        }
    );
    let frame = &pixel_data[..frame_size];

    let magic = if attrs.samples_per_pixel == 1 {
        "P5"
    } else {
        "P6"
    };
    let maxval = if attrs.bits_allocated == 8 {
        255
    } else {
        (1_u32 << attrs.bits_stored) - 1
    };
    write!(
        to,
        "{}\n{} {}\n{}\n",
        magic, attrs.columns, attrs.rows, maxval
    )
    .context(WriteImageSnafu)?;

    let samples = interleave(attrs, frame);
    let body = if attrs.bits_allocated == 8 {
        samples
    } else {
        scale_samples(attrs, &samples, maxval)
    };
    to.write_all(&body).context(WriteImageSnafu)?;
    to.flush().context(WriteImageSnafu)
}

/// Rearrange separate color planes into interleaved samples.
fn interleave(attrs: &ImageAttributes, frame: &[u8]) -> Vec<u8> {
    if attrs.samples_per_pixel == 1 || attrs.planar_configuration == 0 {
        return frame.to_vec();
    }
    let sample_size = attrs.bytes_per_sample();
    let plane_size = frame.len() / usize::from(attrs.samples_per_pixel);
    let pixels = plane_size / sample_size;
    let mut out = Vec::with_capacity(frame.len());
    for pixel in 0..pixels {
        for plane in frame.chunks_exact(plane_size) {
            let at = pixel * sample_size;
            out.extend_from_slice(&plane[at..at + sample_size]);
        }
    }
    out
}

/// Extract the stored bits of 16-bit little endian samples.
///
/// The PNM body holds one byte per sample if `maxval` fits in a byte,
/// and two big endian bytes otherwise.
fn scale_samples(attrs: &ImageAttributes, samples: &[u8], maxval: u32) -> Vec<u8> {
    let shift = attrs.high_bit + 1 - attrs.bits_stored;
    let mask = maxval as u16;
    let wide = maxval > 255;
    let mut out = Vec::with_capacity(samples.len());
    for sample in samples.chunks_exact(2) {
        let value = (LittleEndian::read_u16(sample) >> shift) & mask;
        if wide {
            out.extend_from_slice(&value.to_be_bytes());
        } else {
            out.push(value as u8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{extension, write_first_frame, Error};
    use crate::attribute::ImageAttributes;

    fn attrs(
        samples_per_pixel: u16,
        bits_allocated: u16,
        bits_stored: u16,
        high_bit: u16,
    ) -> ImageAttributes {
        ImageAttributes {
            rows: 1,
            columns: 2,
            samples_per_pixel,
            planar_configuration: 0,
            bits_allocated,
            bits_stored,
            high_bit,
        }
    }

    #[test]
    fn writes_8bit_gray() {
        let attrs = attrs(1, 8, 8, 7);
        let mut out = Vec::new();
        write_first_frame(&mut out, &attrs, &[0x10, 0xF0, 0xAA]).unwrap();
        assert_eq!(out, b"P5\n2 1\n255\n\x10\xF0");
        assert_eq!(extension(&attrs), "pgm");
    }

    #[test]
    fn writes_16bit_gray() {
        let attrs = attrs(1, 16, 12, 11);
        let mut out = Vec::new();
        // 0xF123 has bits above the stored ones
        write_first_frame(&mut out, &attrs, &[0x23, 0xF1, 0xFF, 0x0F]).unwrap();
        assert_eq!(out, b"P5\n2 1\n4095\n\x01\x23\x0F\xFF");
    }

    #[test]
    fn shifts_by_high_bit() {
        // 12 bits stored in the upper bits of each sample
        let attrs = attrs(1, 16, 12, 15);
        let mut out = Vec::new();
        write_first_frame(&mut out, &attrs, &[0x30, 0x12, 0xF0, 0xFF]).unwrap();
        assert_eq!(out, b"P5\n2 1\n4095\n\x01\x23\x0F\xFF");
    }

    #[test]
    fn narrow_16bit_samples_take_one_byte() {
        let attrs = attrs(1, 16, 8, 7);
        let mut out = Vec::new();
        write_first_frame(&mut out, &attrs, &[0x7F, 0xAB, 0x01, 0x00]).unwrap();
        assert_eq!(out, b"P5\n2 1\n255\n\x7F\x01");
    }

    #[test]
    fn writes_rgb_planes_interleaved() {
        let mut attrs = attrs(3, 8, 8, 7);
        let mut out = Vec::new();
        write_first_frame(&mut out, &attrs, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(out, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06");
        assert_eq!(extension(&attrs), "ppm");

        attrs.planar_configuration = 1;
        let mut out = Vec::new();
        // R R G G B B
        write_first_frame(&mut out, &attrs, &[1, 4, 2, 5, 3, 6]).unwrap();
        assert_eq!(out, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06");
    }

    #[test]
    fn short_pixel_data() {
        let attrs = attrs(1, 16, 16, 15);
        let mut out = Vec::new();
        assert!(matches!(
            write_first_frame(&mut out, &attrs, &[0, 0, 0]),
            Err(Error::ShortPixelData {
                needed: 4,
                available: 3,
                ..
            })
        ));
        assert!(out.is_empty());
    }
}
