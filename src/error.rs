//! Unified error type for cyd-panel.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Display
    /// SPI or panel initialisation failed.
    Display,

    // Touch
    /// The GT911 touch controller failed or misbehaved.
    Touch(TouchError),

    // Status LED
    /// A PWM channel rejected a duty-cycle update.
    Led,

    // UI
    /// A view asked for more widgets than the layout can hold.
    Layout,

    // Generic
    /// Peripheral bus configuration failed.
    Bus,
}

/// Subset of touch errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// I²C transaction failed.
    Bus,
    /// Product ID did not read back as a GT911.
    UnexpectedProductId,
    /// Status register reported more contacts than the chip supports.
    InvalidPointCount,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Display => f.write_str("display error"),
            Error::Touch(e) => write!(f, "touch error: {e:?}"),
            Error::Led => f.write_str("status LED error"),
            Error::Layout => f.write_str("layout capacity exceeded"),
            Error::Bus => f.write_str("bus configuration error"),
        }
    }
}

// Convenience conversions

impl From<TouchError> for Error {
    fn from(e: TouchError) -> Self {
        Error::Touch(e)
    }
}
