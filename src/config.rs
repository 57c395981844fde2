//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and layout
//! constants live here so they can be tuned in one place.

// Panel

/// Panel width in portrait orientation (pixels).
pub const DISPLAY_WIDTH: u32 = 320;

/// Panel height in portrait orientation (pixels).
pub const DISPLAY_HEIGHT: u32 = 480;

/// SPI clock for the ST7796 (MHz).
pub const DISPLAY_SPI_MHZ: u32 = 40;

/// Size of the pixel batching buffer handed to the display interface.
pub const DISPLAY_BUFFER_SIZE: usize = 512;

// Refresh / main loop

/// Minimum time between two GUI refreshes (ms).
///
/// Zero disables throttling entirely.
pub const REFRESH_PERIOD_MS: u32 = 20;

/// How long the main loop yields between iterations (ms).
pub const LOOP_YIELD_MS: u64 = 1;

// Touch (GT911)

/// Default GT911 I²C address (INT held low during reset).
pub const TOUCH_I2C_ADDRESS: u8 = 0x5D;

/// I²C bus clock for the touch controller (kHz).
pub const TOUCH_I2C_KHZ: u32 = 400;

/// Touch controller polling interval (ms).
pub const TOUCH_POLL_MS: u64 = 15;

/// Depth of the touch → UI channel.
pub const TOUCH_CHANNEL_DEPTH: usize = 4;

// Status LED

/// Advance the status LED through the colour wheel on every refresh.
/// When disabled the LED stays dark after boot.
pub const STATUS_LED_CYCLE: bool = false;

/// PWM carrier for the RGB LED channels (kHz).
pub const STATUS_LED_PWM_KHZ: u32 = 24;

// Layout

/// Padding between the screen edge and the button grid (pixels).
pub const GRID_PADDING: u32 = 20;

/// Horizontal gap between buttons in a row (pixels).
pub const GRID_COLUMN_GAP: u32 = 10;

/// Vertical gap between rows (pixels).
pub const GRID_ROW_GAP: u32 = 10;

/// Button width: (320 - 2*20 - 10) / 2.
pub const BUTTON_WIDTH: u32 = 135;

/// Button height: three rows in the 440 px content area.
pub const BUTTON_HEIGHT: u32 = 133;

/// Button fill colour (RGB888).
pub const BUTTON_BG_RGB: u32 = 0x0066CC;

/// Button fill colour while pressed (RGB888).
pub const BUTTON_PRESSED_BG_RGB: u32 = 0x004C99;

/// Button border colour (RGB888).
pub const BUTTON_BORDER_RGB: u32 = 0x0099FF;

/// Button border width (pixels).
pub const BUTTON_BORDER_WIDTH: u32 = 2;

/// Maximum number of widgets a view can lay out.
pub const MAX_BUTTONS: usize = 8;

/// Maximum number of notices produced by one touch sample.
pub const MAX_NOTICES: usize = 4;

// GPIO pin assignments (ESP32-3248S035C)
//
// These are logical names; actual `esp_hal::peripherals::*` pins are
// selected in `main.rs`.  Adjust for other CYD variants.
//
//   TFT SCK        → GPIO14
//   TFT MOSI       → GPIO13
//   TFT MISO       → GPIO12
//   TFT CS         → GPIO15
//   TFT DC         → GPIO2
//   TFT backlight  → GPIO27
//   Touch SDA      → GPIO33
//   Touch SCL      → GPIO32
//   LED red        → GPIO4   (active low)
//   LED green      → GPIO16  (active low)
//   LED blue       → GPIO17  (active low)
