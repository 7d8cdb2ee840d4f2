//! CST816S capacitive touch controller (I2C1).
//!
//! The controller raises its interrupt line when a gesture is
//! recognized; the report registers are then read over I2C. Only the
//! single-tap gesture is of interest here.
//!
//! Pin mapping:
//! - SDA: GPIO6 (I2C1 SDA)
//! - SCL: GPIO7 (I2C1 SCL)
//! - INT: GPIO21
//! - RST: GPIO22

use embassy_rp::gpio::{Input, Output};
use embassy_time::Timer;
use embedded_graphics::prelude::Point;
use embedded_hal_async::i2c::I2c;

/// Fixed I2C address of the CST816S.
const ADDR: u8 = 0x15;

/// First report register: gesture, finger count, x/y position.
const REG_GESTURE: u8 = 0x01;
/// Chip ID register; reads back 0xB4 on a CST816S.
const REG_CHIP_ID: u8 = 0xA7;
/// Writing 0x01 here keeps the controller from dozing off between taps.
const REG_DIS_AUTO_SLEEP: u8 = 0xFE;

const CHIP_ID: u8 = 0xB4;
const GESTURE_SINGLE_TAP: u8 = 0x05;

/// Errors from bringing up the touch controller.
#[derive(Debug, defmt::Format)]
pub enum TouchError {
    /// Chip ID register did not read back as a CST816S.
    WrongChip,
    /// I2C transaction failed.
    Bus,
}

/// CST816S driver owning the I2C bus plus interrupt and reset pins.
pub struct Cst816s<I2C> {
    i2c: I2C,
    int: Input<'static>,
    rst: Output<'static>,
}

impl<I2C: I2c> Cst816s<I2C> {
    pub fn new(i2c: I2C, int: Input<'static>, rst: Output<'static>) -> Self {
        Self { i2c, int, rst }
    }

    /// Reset the controller, verify the chip ID and disable auto-sleep.
    pub async fn init(&mut self) -> Result<(), TouchError> {
        // Hardware reset pulse
        self.rst.set_low();
        Timer::after_millis(10).await;
        self.rst.set_high();
        Timer::after_millis(100).await;

        let mut id = [0u8; 1];
        self.i2c
            .write_read(ADDR, &[REG_CHIP_ID], &mut id)
            .await
            .map_err(|_| TouchError::Bus)?;
        if id[0] != CHIP_ID {
            return Err(TouchError::WrongChip);
        }

        self.i2c
            .write(ADDR, &[REG_DIS_AUTO_SLEEP, 0x01])
            .await
            .map_err(|_| TouchError::Bus)?;

        Ok(())
    }

    /// Wait until the panel reports a single tap, returning its position.
    ///
    /// Interrupts for other gestures and failed report reads are
    /// swallowed; the next edge re-arms the wait.
    pub async fn wait_for_tap(&mut self) -> Point {
        loop {
            self.int.wait_for_falling_edge().await;

            let mut report = [0u8; 6];
            if self
                .i2c
                .write_read(ADDR, &[REG_GESTURE], &mut report)
                .await
                .is_err()
            {
                continue;
            }

            if report[0] != GESTURE_SINGLE_TAP {
                continue;
            }

            // Position is 12 bits split over a high/low register pair
            let x = ((report[2] & 0x0F) as i32) << 8 | report[3] as i32;
            let y = ((report[4] & 0x0F) as i32) << 8 | report[5] as i32;
            return Point::new(x, y);
        }
    }
}
