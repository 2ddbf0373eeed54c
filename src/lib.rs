#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring `z` and adding `c`, starting from
//! zero, never sends `z` off to infinity.  Once `z` wanders more than
//! two units from the origin it is guaranteed to escape, so for every
//! pixel we count how many steps it takes to get that far.  That
//! count, the "escape time," picks the pixel's color: points that
//! never leave are painted black, and everything else is shaded along
//! a gradient by how long it lingered.
//!
//! ```no_run
//! extern crate mandelbrot;
//!
//! use mandelbrot::{render, write_png, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let pixels = render(&config);
//! write_png(&pixels, "mandelbrot.png").unwrap();
//! ```

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod buffer;
pub mod color;
pub mod config;
pub mod encode;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod render;

pub use buffer::PixelBuffer;
pub use color::{color_for, hsb_to_rgb, Color, INSIDE};
pub use config::RenderConfig;
pub use encode::{encode_png, write_png};
pub use errors::MandelbrotError;
pub use escape::iterate;
pub use planes::{Pixel, PlaneMapper};
pub use render::{render, render_single, render_threaded};
