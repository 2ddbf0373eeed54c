//! Turns escape counts into colors.  Points inside the set are black;
//! everything else sits on a single gradient that runs from a dim
//! blue for points that escape immediately to a bright red for points
//! that almost didn't.

use num::clamp;

/// An 8-bit red, green, blue triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// The channels in the order they are laid out in a pixel buffer.
    pub fn channels(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// The color of every point that never escaped.
pub const INSIDE: Color = Color(0, 0, 0);

// The gradient, in normalized HSB.  Hue sweeps from 0.6 (blue) to
// 1.0 (red, by way of magenta), brightness climbs from 0.2 to 1.0.
const HUE_START: f64 = 0.6;
const HUE_SPAN: f64 = 0.4;
const SATURATION: f64 = 0.8;
const BRIGHTNESS_START: f64 = 0.2;
const BRIGHTNESS_SPAN: f64 = 0.8;

/// Map an escape count to a color.  `limit` is the iteration cap the
/// count was produced with; a count at (or beyond) the cap is inside
/// the set.
pub fn color_for(iterations: usize, limit: usize) -> Color {
    if iterations >= limit {
        return INSIDE;
    }
    let t = iterations as f64 / limit as f64;
    hsb_to_rgb(
        HUE_START + t * HUE_SPAN,
        SATURATION,
        BRIGHTNESS_START + t * BRIGHTNESS_SPAN,
    )
}

/// Scale a unit intensity to a channel, rounding half up.
fn quantize(value: f64) -> u8 {
    clamp(value * 255.0 + 0.5, 0.0, 255.0) as u8
}

/// The usual hexcone conversion from hue, saturation, and brightness
/// to RGB.  All three inputs are in [0, 1]; the hue wraps, so 1.0 is
/// red again, as is 0.0.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Color {
    if saturation == 0.0 {
        let v = quantize(brightness);
        return Color(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    // h can round up to exactly 6.0, which is sector 0 again.
    let (r, g, b) = match (h as usize) % 6 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    Color(quantize(r), quantize(g), quantize(b))
}
