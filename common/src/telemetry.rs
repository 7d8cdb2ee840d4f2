//! Telemetry wire format and the latest-value measurement cell.
//!
//! # Wire Format
//!
//! One frame is a single unsigned 32-bit little-endian RPM value. No header,
//! no checksum, no sequence number: the radio link is transparent serial and
//! a frame is idempotent, so a lost or mangled frame is simply superseded by
//! the next good one.
//!
//! # Validation
//!
//! `decode_frame` drops, silently:
//! - payloads shorter than [`FRAME_LEN`] (truncated frame), and
//! - values above [`RPM_MAX`](crate::config::RPM_MAX) (corrupt telemetry is
//!   never clamped into range).
//!
//! # Concurrency
//!
//! [`RpmCell`] is the only state shared between the radio receive context and
//! the render loop. It is one word behind an `AtomicU32` with relaxed
//! ordering: last write wins, reads never tear, and no ordering with other
//! memory is required.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::RPM_MAX;

/// Size in bytes of one telemetry frame on the wire.
pub const FRAME_LEN: usize = size_of::<u32>();

/// Decode and validate one received payload.
///
/// Returns `None` for truncated payloads and out-of-range values. Bytes past
/// the first [`FRAME_LEN`] are ignored.
pub fn decode_frame(payload: &[u8]) -> Option<u32> {
    if payload.len() < FRAME_LEN {
        return None;
    }

    let mut raw = [0u8; FRAME_LEN];
    raw.copy_from_slice(&payload[..FRAME_LEN]);
    let rpm = u32::from_le_bytes(raw);

    if rpm > RPM_MAX as u32 {
        return None;
    }
    Some(rpm)
}

/// Encode one frame for the wire: the sender side of the format, also used by
/// the simulator's demo feed and by tests.
#[inline]
pub fn encode_frame(rpm: u32) -> [u8; FRAME_LEN] {
    rpm.to_le_bytes()
}

/// Single-slot latest-value cell for the live measurement.
///
/// Written by the receive context on every valid frame, read once per refresh
/// tick by the render loop. No queue: intermediate values may be lost, only
/// the latest matters.
pub struct RpmCell(AtomicU32);

impl RpmCell {
    /// New cell holding 0 RPM (the frozen-at-rest default when the radio
    /// never delivers).
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Receive callback: validate `payload` and store it if good, drop it
    /// silently otherwise.
    pub fn on_frame(&self, payload: &[u8]) {
        if let Some(rpm) = decode_frame(payload) {
            self.store(rpm);
        }
    }

    /// Overwrite the current measurement.
    #[inline]
    pub fn store(&self, rpm: u32) {
        self.0.store(rpm, Ordering::Relaxed);
    }

    /// Latest measurement.
    #[inline]
    pub fn load(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for RpmCell {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
