//! SSD1306 OLED wrapper used as the register's 16×2 character display.

use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use smartcart::config::{DISPLAY_COLS, DISPLAY_I2C_ADDR, DISPLAY_ROWS};
use smartcart::{DisplaySink, Error};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Driver<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Pixel offset between the two text rows.
const ROW_PITCH: i32 = 16;

/// Top margin so the two rows sit centred on the 64 px panel.
const TOP_MARGIN: i32 = 16;

/// Buffered OLED exposed as a character display.
pub struct OledDisplay<I2C> {
    driver: Driver<I2C>,
}

impl<I2C> OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and clear the screen.
    ///
    /// An init failure is logged; the wrapper stays usable and later
    /// flushes report [`Error::Display`].
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDR);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if driver.init().is_err() {
            warn!("Display: init failed");
        }
        driver.clear_buffer();
        let _ = driver.flush();
        Self { driver }
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> DisplaySink for OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), Error> {
        self.driver.clear_buffer();
        Ok(())
    }

    fn write_line(&mut self, row: usize, text: &str) -> Result<(), Error> {
        if row >= DISPLAY_ROWS {
            return Err(Error::InvalidRow);
        }
        if text.chars().count() > DISPLAY_COLS {
            return Err(Error::BufferOverflow);
        }

        let y = TOP_MARGIN + row as i32 * ROW_PITCH;
        Text::with_baseline(text, Point::new(0, y), text_style(), Baseline::Top)
            .draw(&mut self.driver)
            .map_err(|_| Error::Display)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.driver.flush().map_err(|_| Error::Display)
    }
}
