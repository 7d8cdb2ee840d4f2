//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

use tachpod_common::config::REFRESH_PERIOD_MS;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Gauge refresh cadence; the same period the firmware timer runs at.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(REFRESH_PERIOD_MS);
