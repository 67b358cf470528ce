//! HD44780 character LCD driver
//!
//! Minimal 4-bit GPIO driver for the 16x2 front-panel LCD. Only moves
//! characters and the cursor; all layout lives in the renderer.

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};

use obol_core::traits::display::{DisplayDriver, DisplayError, DISPLAY_COLS, DISPLAY_ROWS};

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// DDRAM address of the first character of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// The six LCD control lines (register select, enable, data 4-7)
pub struct LcdPins {
    pub rs: Output<'static>,
    pub en: Output<'static>,
    pub d4: Output<'static>,
    pub d5: Output<'static>,
    pub d6: Output<'static>,
    pub d7: Output<'static>,
}

/// HD44780 driver in 4-bit mode
pub struct Hd44780 {
    pins: LcdPins,
    cursor_visible: bool,
}

impl Hd44780 {
    /// Create a driver and run the 4-bit initialization sequence
    pub fn new(pins: LcdPins) -> Self {
        let mut lcd = Self {
            pins,
            cursor_visible: false,
        };
        lcd.init();
        lcd
    }

    /// Power-on initialization per the HD44780 datasheet
    fn init(&mut self) {
        // Controller needs time after power-up before accepting commands
        block_for(Duration::from_millis(40));

        // Three wake-up writes in 8-bit mode, then switch to 4-bit
        self.write_nibble(0x03);
        block_for(Duration::from_millis(5));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x02);
        block_for(Duration::from_micros(150));

        self.command(cmd::FUNCTION_4BIT_2LINE);
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON);
        self.command(cmd::ENTRY_MODE_INCREMENT);
        self.command(cmd::CLEAR);
        block_for(Duration::from_millis(2));
    }

    fn write_nibble(&mut self, nibble: u8) {
        set_level(&mut self.pins.d4, nibble & 0x01 != 0);
        set_level(&mut self.pins.d5, nibble & 0x02 != 0);
        set_level(&mut self.pins.d6, nibble & 0x04 != 0);
        set_level(&mut self.pins.d7, nibble & 0x08 != 0);

        // Latch on the falling edge of enable
        self.pins.en.set_high();
        block_for(Duration::from_micros(1));
        self.pins.en.set_low();
        block_for(Duration::from_micros(1));
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        block_for(Duration::from_micros(40));
    }

    fn command(&mut self, byte: u8) {
        self.pins.rs.set_low();
        self.write_byte(byte);
    }

    fn data(&mut self, byte: u8) {
        self.pins.rs.set_high();
        self.write_byte(byte);
    }
}

fn set_level(pin: &mut Output<'static>, high: bool) {
    if high {
        pin.set_high();
    } else {
        pin.set_low();
    }
}

impl DisplayDriver for Hd44780 {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR);
        block_for(Duration::from_millis(2));
        Ok(())
    }

    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row >= DISPLAY_ROWS || col >= DISPLAY_COLS {
            return Err(DisplayError::OutOfBounds);
        }
        self.cursor(row, col)?;
        let room = (DISPLAY_COLS - col) as usize;
        for byte in text.bytes().take(room) {
            self.data(byte);
        }
        Ok(())
    }

    fn cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= DISPLAY_ROWS || col >= DISPLAY_COLS {
            return Err(DisplayError::OutOfBounds);
        }
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col));
        Ok(())
    }

    fn cursor_visible(&mut self, visible: bool) -> Result<(), DisplayError> {
        self.cursor_visible = visible;
        let mut control = cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON;
        if visible {
            control |= cmd::CURSOR_ON | cmd::BLINK_ON;
        }
        self.command(control);
        Ok(())
    }
}
