//! Wireless tachometer firmware for the Waveshare RP2350-Touch-LCD-1.28.
//!
//! Receives RPM frames over an HC-12 radio link and renders them as an
//! analog gauge on the round display. Tapping the screen cycles through
//! the color schemes.

#![no_std]
#![no_main]

mod cst816s;
mod display;
mod radio;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, UART0};
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use tachpod_common::config::REFRESH_PERIOD_MS;
use tachpod_common::{GaugeScene, RpmCell, SchemeCycle};
use {defmt_rtt as _, panic_probe as _};

use crate::cst816s::Cst816s;
use crate::display::{display_spi_config, init_display};
use crate::radio::{init_link, link_uart_config, telemetry_rx_task};

// Boot block for the RP2350 Boot ROM
#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: embassy_rp::block::ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"tachpod"),
    embassy_rp::binary_info::rp_program_description!(c"Wireless RPM gauge on RP2350-Touch-LCD-1.28"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Last RPM value received over the radio link.
static TELEMETRY: RpmCell = RpmCell::new();

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("tachpod starting...");

    let p = embassy_rp::init(Default::default());

    // Initialize display pins
    // Waveshare pinout: DC=8, CS=9, CLK=10, MOSI=11, RST=12, Backlight=25
    let dc = Output::new(p.PIN_8, Level::Low);
    let cs = Output::new(p.PIN_9, Level::High);
    let rst = Output::new(p.PIN_12, Level::High);
    let _backlight = Output::new(p.PIN_25, Level::High); // Turn on backlight

    // Initialize SPI (TX-only, display doesn't need MISO)
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, display_spi_config());

    let mut display = init_display(spi, cs, dc, rst);

    info!("Display initialized!");

    // Radio link on UART0: TX=0, RX=1, SET=2
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, link_uart_config());
    let mut uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let mut link_set = Output::new(p.PIN_2, Level::High);

    // A dead radio is not fatal: the gauge just sits at zero
    match init_link(&mut uart, &mut link_set).await {
        Ok(()) => {
            let (_tx, rx) = uart.split();
            spawner.spawn(telemetry_rx_task(rx, &TELEMETRY)).unwrap();
        }
        Err(e) => warn!("Radio probe failed, telemetry disabled: {:?}", e),
    }

    // Touch controller on I2C1: SDA=6, SCL=7, INT=21, RST=22
    let i2c = I2c::new_async(p.I2C1, p.PIN_7, p.PIN_6, Irqs, i2c::Config::default());
    let touch_int = Input::new(p.PIN_21, Pull::Up);
    let touch_rst = Output::new(p.PIN_22, Level::High);
    let mut touch = Cst816s::new(i2c, touch_int, touch_rst);

    // A dead touch controller freezes the color scheme, nothing more
    let mut touch = match touch.init().await {
        Ok(()) => Some(touch),
        Err(e) => {
            warn!("Touch init failed: {:?}", e);
            None
        }
    };

    let mut schemes = SchemeCycle::new();
    let mut scene = GaugeScene::build(&mut display, schemes.current());

    info!("Starting gauge loop...");

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_PERIOD_MS));

    loop {
        let tap = async {
            match touch.as_mut() {
                Some(t) => t.wait_for_tap().await,
                None => core::future::pending().await,
            }
        };

        let event = select(ticker.next(), tap).await;
        match event {
            Either::First(()) => {
                scene.refresh(&mut display, TELEMETRY.load());
            }
            Either::Second(point) => {
                if scene.tap_surface().contains(point) {
                    let palette = schemes.advance();
                    info!("Color scheme: {}", palette.name);
                    scene = GaugeScene::build(&mut display, palette);
                    // The rebuild restarts the refresh cadence too
                    ticker = Ticker::every(Duration::from_millis(REFRESH_PERIOD_MS));
                    scene.refresh(&mut display, TELEMETRY.load());
                }
            }
        }
    }
}
