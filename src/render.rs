// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frame renderer.  Maps every pixel to a point on the complex
//! plane, asks the escape kernel how long that point survives, and
//! paints the pixel with the matching color.
//!
//! The threaded renderer hands out whole rows.  Each row is its own
//! slice of the buffer, so no two workers ever touch the same byte.

extern crate crossbeam;
extern crate num_cpus;

use itertools::iproduct;
use std::panic;
use std::sync::Mutex;

use buffer::PixelBuffer;
use color::color_for;
use config::{RenderConfig, CHANNELS};
use escape::iterate;
use planes::Pixel;

/// Work out and write the color for a single pixel.
#[inline]
fn paint_pixel(config: &RenderConfig, pixel: &Pixel, rgb: &mut [u8]) {
    let point = config.plane().pixel_to_point(pixel);
    let iterations = iterate(point.re, point.im, config.limit());
    rgb.copy_from_slice(&color_for(iterations, config.limit()).channels());
}

fn paint_row(config: &RenderConfig, y: usize, row: &mut [u8]) {
    for (x, rgb) in row.chunks_mut(CHANNELS).enumerate() {
        paint_pixel(config, &Pixel(x, y), rgb);
    }
}

/// Render on one worker per available CPU.
pub fn render(config: &RenderConfig) -> PixelBuffer {
    render_threaded(config, num_cpus::get())
}

/// Render with a fixed number of workers pulling rows from a shared
/// queue.  A thread count of zero is taken to mean one.  If a worker
/// panics, the panic is rethrown here once the others have stopped;
/// there is no such thing as a partial image.
pub fn render_threaded(config: &RenderConfig, threads: usize) -> PixelBuffer {
    let threads = threads.max(1);
    debug!(
        "Rendering {}x{} at {} iterations on {} threads",
        config.width(),
        config.height(),
        config.limit(),
        threads
    );

    let mut buffer = PixelBuffer::new(config.width(), config.height());
    {
        let rows = Mutex::new(buffer.rows_mut());
        let outcome = crossbeam::scope(|spawner| {
            for worker in 0..threads {
                let rows = &rows;
                spawner.spawn(move |_| loop {
                    // A poisoned queue means another worker died; stop
                    // pulling and let the scope report it.
                    let row = match rows.lock() {
                        Ok(mut rows) => rows.next(),
                        Err(_) => None,
                    };
                    match row {
                        Some((y, row)) => {
                            trace!("worker {} painting row {}", worker, y);
                            paint_row(config, y, row);
                        }
                        None => {
                            break;
                        }
                    }
                });
            }
        });
        if let Err(cause) = outcome {
            panic::resume_unwind(cause);
        }
    }
    buffer
}

/// The single-threaded reference renderer.  Walks the image one pixel
/// at a time in row-major order; produces exactly the same bytes as
/// the threaded renderer.
pub fn render_single(config: &RenderConfig) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(config.width(), config.height());
    {
        let cells = buffer.as_raw_mut().chunks_mut(CHANNELS);
        for ((y, x), rgb) in iproduct!(0..config.height(), 0..config.width()).zip(cells) {
            paint_pixel(config, &Pixel(x, y), rgb);
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::INSIDE;
    use num::Complex;

    fn small() -> RenderConfig {
        RenderConfig::new(
            64,
            48,
            Complex::new(-2.5, -1.0),
            Complex::new(1.0, 1.0),
            200,
        )
        .unwrap()
    }

    #[test]
    fn threaded_matches_single() {
        let config = small();
        let reference = render_single(&config);
        for threads in &[1, 2, 3, 8, 64] {
            assert_eq!(render_threaded(&config, *threads), reference);
        }
    }

    #[test]
    fn zero_threads_still_renders() {
        let config = small();
        assert_eq!(render_threaded(&config, 0), render_single(&config));
    }

    #[test]
    fn more_threads_than_rows() {
        let config =
            RenderConfig::new(5, 2, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0), 30).unwrap();
        assert_eq!(render_threaded(&config, 16), render_single(&config));
    }

    #[test]
    fn every_pixel_matches_the_kernel() {
        let config = small();
        let buffer = render(&config);
        for (pixel, color) in buffer.pixels() {
            let point = config.plane().pixel_to_point(&pixel);
            let expected = color_for(iterate(point.re, point.im, config.limit()), config.limit());
            assert_eq!(color, expected, "pixel {:?}", pixel);
        }
    }

    #[test]
    fn reference_view_has_a_black_heart() {
        let buffer = render(&small());
        // About (-0.26, 0), deep inside the main cardioid.
        assert_eq!(buffer.get(&Pixel(41, 24)), Some(INSIDE));
        // (-2.5, -1) is well outside.
        assert_ne!(buffer.get(&Pixel(0, 0)), Some(INSIDE));
    }
}
