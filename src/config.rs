//! Application-wide constants and compile-time configuration.
//!
//! All cart limits, display geometry, timing parameters and pin
//! assignments live here so they can be tuned in one place.

// Cart

/// Maximum number of sequence slots in one cart (line items + summary entries).
pub const CART_CAPACITY: usize = 20;

/// Maximum digits in a keyed-in item code.
pub const CODE_MAX_DIGITS: usize = 2;

/// Length of a generated transaction identifier.
pub const TXN_ID_LEN: usize = 3;

/// Alphabet transaction identifiers are drawn from.
pub const TXN_ID_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// Display

/// Character columns on the display (hard limit for every rendered line).
pub const DISPLAY_COLS: usize = 16;

/// Character rows on the display.
pub const DISPLAY_ROWS: usize = 2;

/// How long a transient notice ("Item Removed", "Resetting...") stays up (ms).
pub const NOTICE_DURATION_MS: u64 = 1000;

/// SSD1306 I²C address.
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

// Keypad

/// Matrix dimensions.
pub const KEYPAD_ROWS: usize = 4;
pub const KEYPAD_COLS: usize = 4;

/// Key debounce time (ms).
pub const KEY_DEBOUNCE_MS: u64 = 20;

/// Interval between full matrix scans (ms).
pub const KEYPAD_SCAN_INTERVAL_MS: u64 = 5;

/// Settle time after driving a row low before sampling columns (µs).
pub const KEYPAD_ROW_SETTLE_US: u64 = 10;

/// Depth of the keypad → main loop channel.
pub const KEY_QUEUE_DEPTH: usize = 4;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// pins are picked in `main.rs`.  Adjust for your custom PCB.
//
//   Keypad row 0..3     → P0.03, P0.04, P0.28, P0.29  (outputs, idle high)
//   Keypad col 0..3     → P0.30, P0.31, P1.01, P1.02  (inputs, pull-up)
//   I²C SDA             → P0.26
//   I²C SCL             → P0.27
