//! Colour wheel used to sweep the status LED through the hue circle.
//!
//! The wheel position is a `u8` phase. As it advances from 0 to 255 the
//! output walks red → yellow → green → cyan → blue → magenta → red.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Step applied when the caller has no preference.
pub const DEFAULT_STEP: i8 = 1;

/// Width of one band on the inverted position (0x55).
const BAND: u8 = 0x55;

/// Write the colour for `position` into `rgb` and return the next position.
///
/// The next position is `position + step` with 8-bit wraparound. Channel
/// arithmetic also wraps at 8 bits, so band edges are never clamped.
pub fn wheel(rgb: &mut Rgb888, position: u8, step: i8) -> u8 {
    let next = position.wrapping_add_signed(step);
    let curr = 0xFF - position;

    let (r, g, b) = if curr < BAND {
        (
            curr.wrapping_mul(3),
            0xFF_u8.wrapping_sub(curr.wrapping_mul(3)),
            0,
        )
    } else if curr < 2 * BAND {
        let curr = curr - BAND;
        (
            0xFF_u8.wrapping_sub(curr.wrapping_mul(3)),
            0,
            curr.wrapping_mul(3),
        )
    } else {
        let curr = curr - 2 * BAND;
        (
            0,
            curr.wrapping_mul(3),
            0xFF_u8.wrapping_sub(curr.wrapping_mul(3)),
        )
    };

    *rgb = Rgb888::new(r, g, b);
    next
}

/// Owned cursor over the wheel, one per animated output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorCycle {
    position: u8,
    step: i8,
}

impl ColorCycle {
    pub const fn new(position: u8, step: i8) -> Self {
        Self { position, step }
    }

    /// Current wheel position (the one the next `advance` renders).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Render the current position and move to the next one.
    pub fn advance(&mut self) -> Rgb888 {
        let mut rgb = Rgb888::BLACK;
        self.position = wheel(&mut rgb, self.position, self.step);
        rgb
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(0, DEFAULT_STEP)
    }
}
