//! Board support - the hardware behind the register.
//!
//! ## Components
//!
//! - **Keypad**: 4×4 membrane matrix on GPIO, scanned and debounced
//! - **Display**: SSD1306 128×64 OLED via I²C, driven as 16×2 text

pub mod display;
pub mod keypad;
