//! The escape-time kernel.  Everything else in the crate exists to
//! feed points into `iterate` and make pictures out of what comes
//! back.

/// The square of the escape radius.  Once |z| passes 2 the orbit is
/// guaranteed to run off to infinity, and comparing the squared
/// magnitude saves a square root per step.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterate `z = z * z + c` from `z = 0` and count the steps until the
/// orbit leaves the circle of radius two, giving up after `limit`
/// steps.  A return of `limit` means the point never escaped and is
/// treated as inside the set.
///
/// The real and imaginary parts are tracked as plain doubles.  A
/// magnitude of exactly two has not escaped.  Overflow is harmless:
/// an infinite magnitude compares greater than the radius and ends
/// the loop.
pub fn iterate(c_re: f64, c_im: f64, limit: usize) -> usize {
    let (mut z_re, mut z_im) = (0.0_f64, 0.0_f64);
    let mut iterations = 0;
    while iterations < limit {
        let re = z_re * z_re - z_im * z_im + c_re;
        let im = 2.0 * z_re * z_im + c_im;
        z_re = re;
        z_im = im;
        iterations += 1;
        if z_re * z_re + z_im * z_im > ESCAPE_RADIUS_SQUARED {
            break;
        }
    }
    iterations
}
