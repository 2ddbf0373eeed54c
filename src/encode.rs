//! Getting a finished buffer out of memory and into a PNG file.

use image::png::PNGEncoder;
use image::ColorType;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use buffer::PixelBuffer;
use errors::MandelbrotError;

/// Encode a buffer as an 8-bit RGB PNG onto any writer.  The same
/// buffer always produces the same bytes.
pub fn encode_png<W: Write>(buffer: &PixelBuffer, writer: W) -> Result<(), MandelbrotError> {
    let (width, height) = (buffer.width(), buffer.height());
    if width > u32::MAX as usize || height > u32::MAX as usize {
        return Err(MandelbrotError::ImageTooLarge { width, height });
    }
    PNGEncoder::new(writer).encode(
        buffer.as_raw(),
        width as u32,
        height as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}

/// Write a buffer to a PNG file at `path`, replacing whatever was
/// there.
pub fn write_png<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), MandelbrotError> {
    let output = File::create(path)?;
    let mut output = BufWriter::new(output);
    encode_png(buffer, &mut output)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate tempfile;

    use super::*;
    use color::INSIDE;
    use image;
    use std::fs;

    fn striped() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(3, 2);
        for (y, row) in buffer.rows_mut() {
            for (x, rgb) in row.chunks_mut(3).enumerate() {
                rgb.copy_from_slice(&[x as u8 * 100, y as u8 * 200, 42]);
            }
        }
        buffer
    }

    #[test]
    fn png_decodes_to_the_same_pixels() {
        let buffer = striped();
        let mut bytes: Vec<u8> = vec![];
        encode_png(&buffer, &mut bytes).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.into_raw(), buffer.into_raw());
    }

    #[test]
    fn same_buffer_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        let buffer = striped();
        write_png(&buffer, &first).unwrap();
        write_png(&buffer, &second).unwrap();
        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.png");
        match write_png(&striped(), &path) {
            Err(MandelbrotError::Io(_)) => (),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn black_buffer_round_trips() {
        let buffer = PixelBuffer::new(1, 1);
        let mut bytes: Vec<u8> = vec![];
        encode_png(&buffer, &mut bytes).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb();
        assert_eq!(decoded.into_raw(), INSIDE.channels().to_vec());
    }
}
