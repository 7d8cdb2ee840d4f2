//! Display driver for the Waveshare RP2350-Touch-LCD-1.28 (GC9A01).
//!
//! Pin mapping:
//! - DC: GPIO8
//! - CS: GPIO9
//! - CLK: GPIO10 (SPI1 CLK)
//! - MOSI: GPIO11 (SPI1 TX)
//! - Reset: GPIO12
//! - Backlight: GPIO25

use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::Builder;
use mipidsi::models::GC9A01;
use mipidsi::options::{ColorInversion, ColorOrder};

/// Display type alias for the GC9A01 round panel.
pub type RoundDisplay<'d> = mipidsi::Display<
    SPIInterface<ExclusiveDevice<Spi<'d, SPI1, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    GC9A01,
    Output<'d>,
>;

/// Initialize the round display.
///
/// Returns the initialized display ready for drawing.
pub fn init_display<'d>(
    spi: Spi<'d, SPI1, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
) -> RoundDisplay<'d> {
    // Create SPI device with chip select
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    // Create display interface
    let di = SPIInterface::new(spi_device, dc);

    // Build the display driver
    // 1.28" round panel: GC9A01 controller, 240x240, BGR subpixel order
    Builder::new(GC9A01, di)
        .display_size(240, 240)
        .reset_pin(rst)
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .init(&mut embassy_time::Delay)
        .unwrap()
}

/// SPI configuration for the GC9A01 display.
///
/// The panel runs well past its 10MHz datasheet figure.
/// We use 40MHz for reliable operation.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000; // 40MHz
    config
}
