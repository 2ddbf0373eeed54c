//! The finished image: a flat, row-major run of 8-bit RGB triples.
//! Pixel (x, y) lives at byte `(y * width + x) * 3`.

use itertools::iproduct;
use std::iter::Enumerate;
use std::slice::ChunksMut;

use color::Color;
use config::CHANNELS;
use planes::Pixel;

/// A width x height grid of RGB pixels, zeroed (black) until a
/// renderer paints it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer {
            width,
            height,
            data: vec![0 as u8; width * height * CHANNELS],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when there are no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The color at a pixel, or None if the pixel is off the grid.
    pub fn get(&self, pixel: &Pixel) -> Option<Color> {
        if pixel.0 >= self.width || pixel.1 >= self.height {
            return None;
        }
        let offset = (pixel.1 * self.width + pixel.0) * CHANNELS;
        Some(Color(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }

    /// Every pixel with its color, top row first, left to right.
    pub fn pixels<'a>(&'a self) -> impl Iterator<Item = (Pixel, Color)> + 'a {
        iproduct!(0..self.height, 0..self.width)
            .zip(self.data.chunks(CHANNELS))
            .map(|((y, x), rgb)| (Pixel(x, y), Color(rgb[0], rgb[1], rgb[2])))
    }

    /// Hands out each row as its own mutable slice, paired with its
    /// row index.  The slices never overlap, which is what lets
    /// several workers paint the same buffer without a lock.
    pub fn rows_mut(&mut self) -> Enumerate<ChunksMut<u8>> {
        let stride = (self.width * CHANNELS).max(1);
        self.data.chunks_mut(stride).enumerate()
    }

    /// The raw bytes, row-major RGB8.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// The raw bytes, mutably.  Used by the sequential renderer.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give up the buffer and keep the bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
