// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type for the crate.  Rendering itself cannot fail;
//! everything here is either a configuration the renderer refuses to
//! accept, or a problem getting the finished image onto disk.

use std::io;

/// Everything that can go wrong outside the render loop.
#[derive(Debug, Fail)]
pub enum MandelbrotError {
    /// One of the image dimensions was zero.
    #[fail(display = "Image dimensions must be non-zero, got {}x{}", width, height)]
    EmptyImage {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The image would not fit in addressable memory.
    #[fail(display = "Image of {}x{} pixels is too large", width, height)]
    ImageTooLarge {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The real axis of the plane was empty, inverted, or not a number.
    #[fail(display = "The left lower corner is not to the left of the right upper corner.")]
    NotLeftOf,

    /// The imaginary axis of the plane was empty, inverted, or not a number.
    #[fail(display = "The left lower corner is not lower than the right upper corner.")]
    NotBelow,

    /// An iteration cap of zero colors nothing.
    #[fail(display = "Iteration limit must be at least 1")]
    NoIterations,

    /// Writing the image out failed.
    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for MandelbrotError {
    fn from(err: io::Error) -> Self {
        MandelbrotError::Io(err)
    }
}
