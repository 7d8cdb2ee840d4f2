//! Gauge library for the TACHPOD wireless RPM pod.
//!
//! Everything that defines the product lives here (telemetry wire format and
//! the latest-value cell, the palette registry, needle geometry, and the scene
//! build/refresh pipeline) so it all compiles and tests on the host. The
//! `tachpod-rp2350` firmware and the `tachpod-simulator` desktop build are
//! thin shells that own a concrete display and feed this crate ticks, taps
//! and frames.
//!
//! # Testing
//!
//! Run the suite on the host with:
//! ```bash
//! cargo test -p tachpod-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while both firmware and
//! library ship as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod dial;
pub mod needle;
pub mod palette;
pub mod scene;
pub mod styles;
pub mod telemetry;

// Re-export the working set so shells only need one import line.
pub use needle::NeedleSegment;
pub use palette::{Palette, SchemeCycle};
pub use scene::{GaugeScene, TapSurface};
pub use telemetry::RpmCell;
