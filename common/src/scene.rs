//! Gauge scene: full-face build for one color scheme and the periodic
//! refresh body.
//!
//! # Rebuild Strategy
//!
//! A scheme change never patches the previous face. [`GaugeScene::build`]
//! repaints everything from the background up and returns a fresh handle,
//! and the previous scene is simply dropped. Full teardown/rebuild is also
//! the recovery path from any rendering-state corruption: it is idempotent
//! and callable at any time, including at startup.
//!
//! # Refresh
//!
//! [`GaugeScene::refresh`] is the body of the 100ms tick: read measurement,
//! recompute the needle, erase/redraw it, reformat the readout. The scene
//! keeps only what the next tick needs to undo: the last drawn needle and
//! the last readout text.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::config::{
    GAUGE_DIAMETER, NEEDLE_OPACITY, RPM_MIN, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::dial;
use crate::needle::NeedleSegment;
use crate::palette::Palette;

/// Invisible full-screen tap target, layered over the whole face.
#[derive(Clone, Copy, Debug)]
pub struct TapSurface {
    area: Rectangle,
}

impl TapSurface {
    /// Surface covering the entire screen.
    pub fn full_screen() -> Self {
        Self {
            area: Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
        }
    }

    /// Whether a completed tap at `point` lands on the surface.
    pub fn contains(&self, point: Point) -> bool {
        self.area.contains(point)
    }
}

/// One live gauge face.
///
/// At most one scene exists at a time: tapping replaces it wholesale via
/// [`GaugeScene::build`]. Holds the active palette, the pre-blended needle
/// color, and the "last drawn" state the refresh tick erases against.
pub struct GaugeScene {
    palette: &'static Palette,
    needle_color: Rgb565,
    last_needle: NeedleSegment,
    value_text: String<8>,
    tap_surface: TapSurface,
}

impl GaugeScene {
    /// Paint the complete face for `palette` and return the scene handle.
    ///
    /// The readout starts at "0" and the needle at the scale start; callers
    /// follow up with [`Self::refresh`] to show the live measurement right
    /// away instead of waiting out the first tick.
    pub fn build<D>(
        display: &mut D,
        palette: &'static Palette,
    ) -> Self
    where
        D: DrawTarget<Color = Rgb565>,
    {
        dial::draw_background(display, palette);
        dial::draw_ring(display, palette);
        dial::draw_rim_arc(display, palette);
        dial::draw_scale(display, palette);

        let needle_color = dial::blend(palette.background, palette.needle, NEEDLE_OPACITY);
        let needle = NeedleSegment::at_rest();
        dial::draw_needle(display, needle, needle_color);
        dial::draw_hub(display, palette);

        let mut value_text: String<8> = String::new();
        let _ = write!(value_text, "{RPM_MIN}");
        dial::draw_value_text(display, &value_text, palette);
        dial::draw_brand_text(display, palette);

        Self {
            palette,
            needle_color,
            last_needle: needle,
            value_text,
            tap_surface: TapSurface::full_screen(),
        }
    }

    /// One refresh tick for the latest measurement.
    ///
    /// Unchanged needle positions and readout text are skipped entirely, so
    /// an idle engine costs no draw calls. A moved needle is erased in the
    /// background color, the scale it swept over is repainted, and the hub
    /// goes back on top of the new needle root.
    pub fn refresh<D>(
        &mut self,
        display: &mut D,
        rpm: u32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let needle = NeedleSegment::compute(rpm as i32, SCREEN_WIDTH, SCREEN_HEIGHT, GAUGE_DIAMETER);
        if needle != self.last_needle {
            dial::draw_needle(display, self.last_needle, self.palette.background);
            dial::draw_scale(display, self.palette);
            dial::draw_needle(display, needle, self.needle_color);
            dial::draw_hub(display, self.palette);
            self.last_needle = needle;
        }

        let mut text: String<8> = String::new();
        let _ = write!(text, "{rpm}");
        if text != self.value_text {
            dial::draw_value_text(display, &text, self.palette);
            self.value_text = text;
        }
    }

    /// The active palette.
    pub const fn palette(&self) -> &'static Palette {
        self.palette
    }

    /// The tap target for the touch dispatcher.
    pub const fn tap_surface(&self) -> &TapSurface {
        &self.tap_surface
    }

    /// Last drawn needle geometry.
    pub const fn needle(&self) -> NeedleSegment {
        self.last_needle
    }

    /// Last drawn readout text.
    pub fn value_text(&self) -> &str {
        &self.value_text
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CENTER_X, CENTER_Y};
    use crate::needle::needle_angle_deg;
    use crate::palette::{SCHEMES, SchemeCycle};
    use crate::telemetry::{RpmCell, encode_frame};

    /// Plain in-memory pixel store so scene drawing runs on the host.
    struct TestCanvas {
        pixels: Vec<Rgb565>,
    }

    impl TestCanvas {
        fn new() -> Self {
            Self {
                pixels: vec![Rgb565::new(0, 0, 0); (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            }
        }

        fn pixel(&self, x: i32, y: i32) -> Rgb565 {
            self.pixels[(y as u32 * SCREEN_WIDTH + x as u32) as usize]
        }
    }

    impl OriginDimensions for TestCanvas {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    }

    impl DrawTarget for TestCanvas {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if (0..SCREEN_WIDTH as i32).contains(&point.x)
                    && (0..SCREEN_HEIGHT as i32).contains(&point.y)
                {
                    self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color;
                }
            }
            Ok(())
        }
    }

    /// Background probe point: inside the dial, clear of ring, ticks, hub,
    /// labels, and clear of the needle at 0 and 8000 rpm.
    const BG_PROBE: (i32, i32) = (CENTER_X - 40, CENTER_Y - 40);

    #[test]
    fn test_tap_surface_covers_the_whole_screen() {
        let surface = TapSurface::full_screen();
        assert!(surface.contains(Point::new(0, 0)));
        assert!(surface.contains(Point::new(239, 239)));
        assert!(surface.contains(Point::new(120, 120)));
        assert!(!surface.contains(Point::new(-1, 10)));
        assert!(!surface.contains(Point::new(240, 0)));
    }

    #[test]
    fn test_build_paints_background_and_resting_needle() {
        let mut canvas = TestCanvas::new();
        let scene = GaugeScene::build(&mut canvas, &SCHEMES[0]);

        assert_eq!(scene.value_text(), "0");
        assert_eq!(scene.needle(), NeedleSegment::at_rest());
        assert_eq!(canvas.pixel(BG_PROBE.0, BG_PROBE.1), SCHEMES[0].background);
    }

    #[test]
    fn test_refresh_skips_redraw_when_nothing_moved() {
        let mut canvas = TestCanvas::new();
        let mut scene = GaugeScene::build(&mut canvas, &SCHEMES[0]);

        scene.refresh(&mut canvas, 0);
        assert_eq!(scene.value_text(), "0");
        assert_eq!(scene.needle(), NeedleSegment::at_rest());
    }

    #[test]
    fn test_refresh_erases_the_previous_needle() {
        let mut canvas = TestCanvas::new();
        let mut scene = GaugeScene::build(&mut canvas, &SCHEMES[0]);

        // Park a probe on the resting needle's tip pixel, then move away.
        let tip = scene.needle().outer;
        scene.refresh(&mut canvas, 4000);
        assert_eq!(canvas.pixel(tip.x, tip.y), SCHEMES[0].background);
        assert_ne!(scene.needle(), NeedleSegment::at_rest());
    }

    #[test]
    fn test_refresh_round_trip_restores_the_resting_face() {
        let mut canvas = TestCanvas::new();
        let mut scene = GaugeScene::build(&mut canvas, &SCHEMES[0]);
        scene.refresh(&mut canvas, 0);
        let resting = canvas.pixels.clone();

        scene.refresh(&mut canvas, 8000);
        scene.refresh(&mut canvas, 0);

        assert_eq!(scene.value_text(), "0");
        assert_eq!(scene.needle(), NeedleSegment::at_rest());
        assert!(canvas.pixels == resting);
    }

    #[test]
    fn test_face_depends_only_on_the_latest_value() {
        let mut stepped = TestCanvas::new();
        let mut scene = GaugeScene::build(&mut stepped, &SCHEMES[0]);
        for rpm in [1000, 2500, 4000, 6500, 8000] {
            scene.refresh(&mut stepped, rpm);
        }

        let mut direct = TestCanvas::new();
        let mut reference = GaugeScene::build(&mut direct, &SCHEMES[0]);
        reference.refresh(&mut direct, 8000);

        assert_eq!(scene.value_text(), reference.value_text());
        assert_eq!(scene.needle(), reference.needle());
        assert!(stepped.pixels == direct.pixels);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut canvas = TestCanvas::new();
        let telemetry = RpmCell::new();
        let mut schemes = SchemeCycle::new();

        let mut scene = GaugeScene::build(&mut canvas, schemes.current());
        scene.refresh(&mut canvas, telemetry.load());

        // Packet encoding 0: needle at the scale start, readout "0".
        telemetry.on_frame(&encode_frame(0));
        scene.refresh(&mut canvas, telemetry.load());
        assert_eq!(scene.value_text(), "0");
        assert_eq!(needle_angle_deg(telemetry.load() as i32), 135.0);

        // Packet encoding 8000: needle wraps to 45 degrees, readout "8000".
        telemetry.on_frame(&encode_frame(8000));
        scene.refresh(&mut canvas, telemetry.load());
        assert_eq!(scene.value_text(), "8000");
        assert_eq!(
            needle_angle_deg(telemetry.load() as i32).rem_euclid(360.0),
            45.0
        );

        // Tap: cursor 0 -> 1, full rebuild in the new scheme's colors, then
        // the post-build refresh restores the live value.
        assert!(scene.tap_surface().contains(Point::new(120, 120)));
        let palette = schemes.advance();
        assert_eq!(schemes.index(), 1);

        let mut scene = GaugeScene::build(&mut canvas, palette);
        assert_eq!(canvas.pixel(BG_PROBE.0, BG_PROBE.1), SCHEMES[1].background);
        assert_eq!(scene.value_text(), "0");

        scene.refresh(&mut canvas, telemetry.load());
        assert_eq!(scene.value_text(), "8000");
        assert_eq!(
            scene.needle(),
            NeedleSegment::compute(8000, SCREEN_WIDTH, SCREEN_HEIGHT, GAUGE_DIAMETER)
        );
    }
}
