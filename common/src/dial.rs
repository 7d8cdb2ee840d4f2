//! Drawing vocabulary for the dial: scale, rim arc, gradient ring, hub,
//! needle and labels.
//!
//! Every function here is generic over `DrawTarget<Color = Rgb565>` so the
//! same code paints the GC9A01 panel and the SDL simulator. Draw errors are
//! swallowed per primitive with `.ok()`: a dropped primitive shows up as a
//! one-frame glitch and the next tick or rebuild repaints it.
//!
//! All placement is polar around the screen center, in the y-down clockwise
//! angle convention of [`crate::config`], the same convention the needle
//! uses, so arc, ticks and needle always agree on where a given angle points.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{
    ARC_CHORD_STEPS, ARC_WIDTH, BRAND_TEXT, BRAND_TEXT_Y, CENTER_X, CENTER_Y, GAUGE_RADIUS,
    GAUGE_START_DEG, GAUGE_SWEEP_DEG, HUB_BORDER_WIDTH, HUB_DIAMETER, NEEDLE_WIDTH,
    RING_INNER_RADIUS, RING_OUTER_RADIUS, SCALE_TEXT_RADIUS, TICK_COUNT, TICK_MAJOR_EVERY,
    TICK_MAJOR_INNER_RADIUS, TICK_MAJOR_WIDTH, TICK_MINOR_INNER_RADIUS, TICK_MINOR_WIDTH,
    TICK_OUTER_RADIUS, VALUE_CLEAR_HEIGHT, VALUE_CLEAR_WIDTH, VALUE_TEXT_Y,
};
use crate::needle::NeedleSegment;
use crate::palette::Palette;
use crate::styles::{CENTERED_MIDDLE, LABEL_FONT, VALUE_FONT};

/// Point at `radius` from the screen center along `angle_deg`.
pub fn polar(angle_deg: f32, radius: f32) -> Point {
    let angle = angle_deg.to_radians();
    Point::new(
        (CENTER_X as f32 + angle.cos() * radius) as i32,
        (CENTER_Y as f32 + angle.sin() * radius) as i32,
    )
}

/// Dial angle of tick `index` (0 at the scale start, TICK_COUNT - 1 at the end).
fn tick_angle_deg(index: u32) -> f32 {
    GAUGE_START_DEG + GAUGE_SWEEP_DEG * index as f32 / (TICK_COUNT - 1) as f32
}

/// Fill the whole surface with the scheme background.
pub fn draw_background<D>(
    display: &mut D,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(palette.background).ok();
}

/// Draw the tick scale: a thin tick at every step, a heavier one with a
/// numeral at every [`TICK_MAJOR_EVERY`]-th step.
///
/// Called on every needle move as well as at build time: erasing the needle
/// also wipes the tick tails and numerals it crossed.
pub fn draw_scale<D>(
    display: &mut D,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let minor_style = PrimitiveStyle::with_stroke(palette.tick, TICK_MINOR_WIDTH);
    let major_style = PrimitiveStyle::with_stroke(palette.tick, TICK_MAJOR_WIDTH);
    let numeral_style = MonoTextStyle::new(LABEL_FONT, palette.scale_text);

    for index in 0..TICK_COUNT {
        let angle = tick_angle_deg(index);
        let is_major = index % TICK_MAJOR_EVERY == 0;
        let (inner_radius, style) = if is_major {
            (TICK_MAJOR_INNER_RADIUS, major_style)
        } else {
            (TICK_MINOR_INNER_RADIUS, minor_style)
        };

        Line::new(polar(angle, inner_radius), polar(angle, TICK_OUTER_RADIUS))
            .into_styled(style)
            .draw(display)
            .ok();

        if is_major {
            let mut numeral: String<4> = String::new();
            let _ = write!(numeral, "{}", index / TICK_MAJOR_EVERY);
            Text::with_text_style(
                &numeral,
                polar(angle, SCALE_TEXT_RADIUS),
                numeral_style,
                CENTERED_MIDDLE,
            )
            .draw(display)
            .ok();
        }
    }
}

/// Stroke the rim arc over the full sweep as overlapping chords.
///
/// Chords instead of an arc primitive keep the rim on the exact same angle
/// convention as [`polar`], so the arc ends land on the first and last tick.
pub fn draw_rim_arc<D>(
    display: &mut D,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(palette.tick, ARC_WIDTH);
    let step = GAUGE_SWEEP_DEG / ARC_CHORD_STEPS as f32;

    let mut prev = polar(GAUGE_START_DEG, GAUGE_RADIUS);
    for chord in 1..=ARC_CHORD_STEPS {
        let next = polar(GAUGE_START_DEG + step * chord as f32, GAUGE_RADIUS);
        Line::new(prev, next).into_styled(style).draw(display).ok();
        prev = next;
    }
}

/// Paint the decorative ring between the numerals and the tick roots:
/// concentric circles stepping the color from `ring_start` (inner) to
/// `ring_end` (outer).
pub fn draw_ring<D>(
    display: &mut D,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let span = (RING_OUTER_RADIUS - RING_INNER_RADIUS) as f32;
    for radius in RING_INNER_RADIUS..=RING_OUTER_RADIUS {
        let t = (radius - RING_INNER_RADIUS) as f32 / span;
        let color = blend(palette.ring_start, palette.ring_end, t);
        // Stroke 2 with a 1px radius step: adjacent circles overlap, so the
        // band has no moire gaps.
        Circle::with_center(Point::new(CENTER_X, CENTER_Y), radius * 2)
            .into_styled(PrimitiveStyle::with_stroke(color, 2))
            .draw(display)
            .ok();
    }
}

/// Draw the center hub over the needle root.
pub fn draw_hub<D>(
    display: &mut D,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(Point::new(CENTER_X, CENTER_Y), HUB_DIAMETER)
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(palette.hub_fill)
                .stroke_color(palette.hub_border)
                .stroke_width(HUB_BORDER_WIDTH)
                .build(),
        )
        .draw(display)
        .ok();
}

/// Draw the needle segment in `color`. Erasing is the same call with the
/// background color.
pub fn draw_needle<D>(
    display: &mut D,
    segment: NeedleSegment,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(segment.inner, segment.outer)
        .into_styled(PrimitiveStyle::with_stroke(color, NEEDLE_WIDTH))
        .draw(display)
        .ok();
}

/// Draw the numeric readout: clear its box to the background, then center
/// `text` in it.
pub fn draw_value_text<D>(
    display: &mut D,
    text: &str,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let top_left = Point::new(
        CENTER_X - (VALUE_CLEAR_WIDTH / 2) as i32,
        VALUE_TEXT_Y - (VALUE_CLEAR_HEIGHT / 2) as i32,
    );
    Rectangle::new(top_left, Size::new(VALUE_CLEAR_WIDTH, VALUE_CLEAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(palette.background))
        .draw(display)
        .ok();

    Text::with_text_style(
        text,
        Point::new(CENTER_X, VALUE_TEXT_Y),
        MonoTextStyle::new(VALUE_FONT, palette.value_text),
        CENTERED_MIDDLE,
    )
    .draw(display)
    .ok();
}

/// Draw the static brand line under the readout.
pub fn draw_brand_text<D>(
    display: &mut D,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(
        BRAND_TEXT,
        Point::new(CENTER_X, BRAND_TEXT_Y),
        MonoTextStyle::new(LABEL_FONT, palette.brand_text),
        CENTERED_MIDDLE,
    )
    .draw(display)
    .ok();
}

/// Linear mix of two Rgb565 colors, channel-wise; `t` runs 0.0 (`from`) to
/// 1.0 (`to`).
pub fn blend(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let mix = |shift: u32, mask: u16| -> u8 {
        let a = i32::from((from_raw >> shift) & mask);
        let b = i32::from((to_raw >> shift) & mask);
        (a + ((b - a) as f32 * t) as i32).clamp(0, i32::from(mask)) as u8
    };

    Rgb565::new(mix(11, 0x1F), mix(5, 0x3F), mix(0, 0x1F))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_axes() {
        assert_eq!(polar(0.0, 50.0), Point::new(CENTER_X + 50, CENTER_Y));
        // 90 degrees is straight down in screen coordinates.
        let down = polar(90.0, 50.0);
        assert!((down.x - CENTER_X).abs() <= 1);
        assert_eq!(down.y, CENTER_Y + 50);
    }

    #[test]
    fn test_tick_angles_span_the_sweep() {
        assert_eq!(tick_angle_deg(0), GAUGE_START_DEG);
        assert_eq!(tick_angle_deg(TICK_COUNT - 1), GAUGE_START_DEG + GAUGE_SWEEP_DEG);
    }

    #[test]
    fn test_major_ticks_carry_numerals_zero_to_eight() {
        let majors: Vec<u32> = (0..TICK_COUNT)
            .filter(|i| i % TICK_MAJOR_EVERY == 0)
            .map(|i| i / TICK_MAJOR_EVERY)
            .collect();
        assert_eq!(majors, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Rgb565::new(4, 8, 4);
        let b = Rgb565::new(31, 63, 31);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn test_blend_midpoint_sits_between() {
        let a = Rgb565::new(0, 0, 0);
        let b = Rgb565::new(30, 62, 30);
        assert_eq!(blend(a, b, 0.5), Rgb565::new(15, 31, 15));
    }

    #[test]
    fn test_blend_direction_reverses() {
        let a = Rgb565::new(2, 4, 2);
        let b = Rgb565::new(18, 36, 18);
        assert_eq!(blend(a, b, 0.25), blend(b, a, 0.75));
    }
}
