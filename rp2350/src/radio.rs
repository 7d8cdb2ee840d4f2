//! HC-12 radio link (UART0).
//!
//! The HC-12 is a 433MHz transparent serial bridge. The sender side
//! pushes one 4-byte little-endian RPM frame per burst; this side only
//! ever reads. The SET pin drops the module into AT command mode, which
//! is used once at startup to confirm the module is alive.
//!
//! Pin mapping:
//! - TX: GPIO0 (UART0 TX)
//! - RX: GPIO1 (UART0 RX)
//! - SET: GPIO2 (low = AT command mode)

use defmt::{info, warn};
use embassy_rp::gpio::Output;
use embassy_rp::uart::{BufferedUart, BufferedUartRx, Config as UartConfig};
use embassy_time::{Duration, Timer, with_timeout};
use embedded_io_async::{Read, Write};

use tachpod_common::RpmCell;
use tachpod_common::telemetry::FRAME_LEN;

/// HC-12 factory default baud rate.
const LINK_BAUD: u32 = 9600;

/// How long the AT probe waits for the module to answer.
const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Window for the rest of a frame once its first byte has arrived.
/// At 9600 baud a byte takes about a millisecond, so anything slower
/// than this is a gap between bursts, not a continuation.
const FRAME_TIMEOUT: Duration = Duration::from_millis(20);

/// Errors from bringing up the radio link.
#[derive(Debug, defmt::Format)]
pub enum LinkError {
    /// Module never answered the AT probe.
    ProbeTimeout,
    /// Module answered with something other than OK.
    BadProbeResponse,
    /// UART error while probing.
    Uart,
}

/// UART configuration for the HC-12.
pub fn link_uart_config() -> UartConfig {
    let mut config = UartConfig::default();
    config.baudrate = LINK_BAUD;
    config
}

/// Probe the HC-12 in AT command mode to confirm it is present.
///
/// Pulls SET low, sends a bare `AT`, and expects `OK` back. Leaves the
/// module in transparent mode afterwards either way.
pub async fn init_link(
    uart: &mut BufferedUart,
    set: &mut Output<'static>,
) -> Result<(), LinkError> {
    // Enter command mode (the module samples SET after a short settle)
    set.set_low();
    Timer::after_millis(40).await;

    let result = probe(uart).await;

    // Back to transparent mode
    set.set_high();
    Timer::after_millis(80).await;

    result
}

async fn probe(uart: &mut BufferedUart) -> Result<(), LinkError> {
    uart.write_all(b"AT\r\n").await.map_err(|_| LinkError::Uart)?;

    let mut buf = [0u8; 8];
    let mut filled = 0;
    loop {
        match with_timeout(PROBE_TIMEOUT, uart.read(&mut buf[filled..])).await {
            Ok(Ok(n)) if n > 0 => {
                filled += n;
                if buf[..filled].starts_with(b"OK") {
                    return Ok(());
                }
                if filled >= buf.len() {
                    return Err(LinkError::BadProbeResponse);
                }
            }
            Ok(Ok(_)) => return Err(LinkError::Uart),
            Ok(Err(_)) => return Err(LinkError::Uart),
            Err(_) if filled == 0 => return Err(LinkError::ProbeTimeout),
            Err(_) => return Err(LinkError::BadProbeResponse),
        }
    }
}

/// Receive task: reassembles 4-byte frames from the transparent stream
/// and publishes them to the shared cell.
///
/// Framing is purely pause-based. The sender emits each frame as one
/// burst, so a byte after a quiet stretch marks a frame start and the
/// remaining bytes must follow within [`FRAME_TIMEOUT`]. A burst cut
/// short is handed over anyway; the decoder drops short frames.
#[embassy_executor::task]
pub async fn telemetry_rx_task(mut rx: BufferedUartRx, rpm: &'static RpmCell) {
    info!("Telemetry RX task started");

    let mut frame = [0u8; FRAME_LEN];

    loop {
        // Block for the first byte of a burst
        match rx.read(&mut frame[..1]).await {
            Ok(n) if n > 0 => {}
            Ok(_) => continue,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                continue;
            }
        }

        let mut filled = 1;
        while filled < FRAME_LEN {
            match with_timeout(FRAME_TIMEOUT, rx.read(&mut frame[filled..])).await {
                Ok(Ok(n)) if n > 0 => filled += n,
                Ok(Ok(_)) => break,
                Ok(Err(e)) => {
                    warn!("UART read error: {:?}", e);
                    break;
                }
                // Burst ended early
                Err(_) => break,
            }
        }

        rpm.on_frame(&frame[..filled]);
    }
}
