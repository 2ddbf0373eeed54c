//! The immutable description of a single render: how big the image
//! is, which part of the complex plane it covers, and how hard we try
//! before deciding a point belongs to the set.

use num::Complex;

use errors::MandelbrotError;
use planes::{ComplexPlane, IntegralPlane, PlaneMapper};

/// Width of the reference image, in pixels.
pub const DEFAULT_WIDTH: usize = 3840;
/// Height of the reference image, in pixels.
pub const DEFAULT_HEIGHT: usize = 2160;
/// Left-lower corner of the reference view.
pub const DEFAULT_LEFTLOWER: (f64, f64) = (-2.5, -1.0);
/// Right-upper corner of the reference view.
pub const DEFAULT_RIGHTUPPER: (f64, f64) = (1.0, 1.0);
/// Iteration cap of the reference view.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Bytes per pixel in the rendered buffer (8-bit RGB).
pub const CHANNELS: usize = 3;

/// Everything the renderer needs to know.  Once built, a RenderConfig
/// is never modified; pass it by reference to as many renders as you
/// like.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    plane: PlaneMapper,
    limit: usize,
}

impl RenderConfig {
    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the complex plane, and the number of
    /// iterations after which a point is declared inside the set.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        limit: usize,
    ) -> Result<Self, MandelbrotError> {
        let plane = PlaneMapper::new(width, height, leftlower, rightupper)?;
        if limit == 0 {
            return Err(MandelbrotError::NoIterations);
        }
        if width
            .checked_mul(height)
            .and_then(|len| len.checked_mul(CHANNELS))
            .is_none()
        {
            return Err(MandelbrotError::ImageTooLarge { width, height });
        }
        Ok(RenderConfig { plane, limit })
    }

    /// The pixel <-> point mapping for this render.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.plane.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.plane.height()
    }

    /// The iteration cap.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for RenderConfig {
    /// The full 4K view of the whole set.
    fn default() -> Self {
        let plane = PlaneMapper {
            integral_plane: IntegralPlane(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            complex_plane: ComplexPlane(
                Complex::new(DEFAULT_LEFTLOWER.0, DEFAULT_LEFTLOWER.1),
                Complex::new(DEFAULT_RIGHTUPPER.0, DEFAULT_RIGHTUPPER.1),
            ),
        };
        RenderConfig {
            plane,
            limit: DEFAULT_ITERATIONS,
        }
    }
}
