//! TACHPOD simulator for desktop.
//!
//! Runs the gauge on the embedded-graphics simulator. The demo sweep (or
//! the arrow-key override) is pushed through the same wire encoding the
//! radio link uses, so everything short of the UART is the real path.
//!
//! Controls:
//! - Click: cycle the color scheme
//! - Up/Down: manual RPM override
//! - D: back to the demo sweep

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tachpod_common::config::{RPM_MAX, SCREEN_HEIGHT, SCREEN_WIDTH};
use tachpod_common::telemetry::encode_frame;
use tachpod_common::{GaugeScene, RpmCell, SchemeCycle};

use crate::timing::{FRAME_TIME, REFRESH_PERIOD};

/// RPM change per Up/Down key press.
const MANUAL_STEP: u32 = 250;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("TACHPOD Sim", &output_settings);

    // Stands in for the radio link; fed through the wire encoding below
    let telemetry = RpmCell::new();

    let mut schemes = SchemeCycle::new();
    let mut scene = GaugeScene::build(&mut display, schemes.current());
    window.update(&display);

    // Main loop state
    let mut t = 0.0f32;
    let mut demo_enabled = true;
    let mut manual_rpm = 0u32;
    let mut last_refresh = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if scene.tap_surface().contains(point) {
                        let palette = schemes.advance();
                        scene = GaugeScene::build(&mut display, palette);
                        last_refresh = Instant::now();
                        scene.refresh(&mut display, telemetry.load());
                    }
                }
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Up => {
                        if demo_enabled {
                            demo_enabled = false;
                            manual_rpm = telemetry.load();
                        }
                        manual_rpm = (manual_rpm + MANUAL_STEP).min(RPM_MAX as u32);
                    }
                    Keycode::Down => {
                        if demo_enabled {
                            demo_enabled = false;
                            manual_rpm = telemetry.load();
                        }
                        manual_rpm = manual_rpm.saturating_sub(MANUAL_STEP);
                    }
                    Keycode::D => {
                        demo_enabled = true;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // Feed the measurement channel exactly like the radio would
        let rpm = if demo_enabled { demo_rpm(t) } else { manual_rpm };
        telemetry.on_frame(&encode_frame(rpm));

        // The gauge refreshes on its own, slower cadence
        if last_refresh.elapsed() >= REFRESH_PERIOD {
            scene.refresh(&mut display, telemetry.load());
            last_refresh = Instant::now();
        }

        window.update(&display);

        t += 0.05;

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME.checked_sub(pre_sleep).unwrap());
        }
    }
}

/// Synthetic engine profile: pull up from idle, hold briefly at the
/// top, fall back and go again.
fn demo_rpm(t: f32) -> u32 {
    let cycle = (t * 0.25) % std::f32::consts::TAU;
    let normalized = if cycle > 2.8 && cycle < 3.5 {
        1.0
    } else {
        (cycle - std::f32::consts::FRAC_PI_2).sin().mul_add(0.5, 0.5)
    };
    (800.0 + normalized * 7200.0) as u32
}
