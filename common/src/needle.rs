//! Needle geometry: latest measurement to dial angle to line endpoints.
//!
//! Pure functions of their inputs, with no display access and no shared
//! state, so the whole mapping is exercised by host tests. On no_std builds the trig
//! comes from `micromath`; host tests resolve to std's `f32` methods instead,
//! keeping test assertions at full precision.

#[cfg(not(test))]
use micromath::F32Ext;

use embedded_graphics::prelude::Point;

use crate::config::{
    ARC_WIDTH, GAUGE_DIAMETER, GAUGE_START_DEG, GAUGE_SWEEP_DEG, NEEDLE_INNER_RATIO,
    NEEDLE_OUTER_RATIO, RPM_MAX, RPM_MIN, RPM_PER_UNIT, SCALE_MAX, SCALE_MIN, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

/// Map a measurement to its dial angle in degrees (y-down screen convention:
/// 135 is lower-left, 270 straight up, 405 lower-right).
///
/// The value is clamped twice, once as raw RPM and once in dial units; the
/// bounds are separate limits and both are applied even though they coincide
/// today.
pub fn needle_angle_deg(rpm: i32) -> f32 {
    let rpm = rpm.clamp(RPM_MIN, RPM_MAX);
    let units = (rpm as f32 / RPM_PER_UNIT).clamp(SCALE_MIN, SCALE_MAX);
    let t = (units - SCALE_MIN) / (SCALE_MAX - SCALE_MIN);
    GAUGE_START_DEG + t * GAUGE_SWEEP_DEG
}

/// The needle as one line segment on the dial, recomputed every refresh tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NeedleSegment {
    /// Endpoint near the hub.
    pub inner: Point,
    /// Endpoint toward the rim.
    pub outer: Point,
}

impl NeedleSegment {
    /// Compute both endpoints for `rpm` on a `screen_width` x `screen_height`
    /// surface with a dial of `gauge_diameter`.
    ///
    /// The root radius is taken from the full arc-centerline radius before
    /// that radius is shortened for the tip; the order matters for the
    /// drawn needle length.
    pub fn compute(
        rpm: i32,
        screen_width: u32,
        screen_height: u32,
        gauge_diameter: u32,
    ) -> Self {
        let angle = needle_angle_deg(rpm).to_radians();

        let mut radius = gauge_diameter as f32 / 2.0 - ARC_WIDTH as f32 / 2.0;
        let inner_radius = radius * NEEDLE_INNER_RATIO;
        radius *= NEEDLE_OUTER_RATIO;

        let cx = screen_width as f32 / 2.0;
        let cy = screen_height as f32 / 2.0;
        let cos = angle.cos();
        let sin = angle.sin();

        Self {
            inner: Point::new(
                (cx + cos * inner_radius) as i32,
                (cy + sin * inner_radius) as i32,
            ),
            outer: Point::new((cx + cos * radius) as i32, (cy + sin * radius) as i32),
        }
    }

    /// Needle parked at the start of the scale on the built-in screen layout.
    pub fn at_rest() -> Self {
        Self::compute(RPM_MIN, SCREEN_WIDTH, SCREEN_HEIGHT, GAUGE_DIAMETER)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CENTER_X, CENTER_Y};

    fn compute(rpm: i32) -> NeedleSegment {
        NeedleSegment::compute(rpm, SCREEN_WIDTH, SCREEN_HEIGHT, GAUGE_DIAMETER)
    }

    fn dist2_from_center(p: Point) -> i32 {
        let dx = p.x - CENTER_X;
        let dy = p.y - CENTER_Y;
        dx * dx + dy * dy
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for rpm in [i32::MIN, -1, 0, 1, 4000, 7999, 8000, 8001, i32::MAX] {
            let once = rpm.clamp(RPM_MIN, RPM_MAX);
            assert_eq!(once.clamp(RPM_MIN, RPM_MAX), once);
        }
    }

    #[test]
    fn test_negative_input_behaves_like_zero() {
        assert_eq!(compute(-1), compute(0));
        assert_eq!(compute(-40_000), compute(0));
        assert_eq!(needle_angle_deg(-500), needle_angle_deg(0));
    }

    #[test]
    fn test_overrange_input_behaves_like_max() {
        assert_eq!(compute(8001), compute(8000));
        assert_eq!(compute(i32::MAX), compute(8000));
        assert_eq!(needle_angle_deg(20_000), needle_angle_deg(8000));
    }

    #[test]
    fn test_angle_at_scale_start() {
        assert_eq!(needle_angle_deg(0), 135.0);
    }

    #[test]
    fn test_angle_at_scale_end_wraps_to_45() {
        assert_eq!(needle_angle_deg(8000), 405.0);
        assert_eq!(needle_angle_deg(8000).rem_euclid(360.0), 45.0);
    }

    #[test]
    fn test_angle_at_midpoint_points_straight_up() {
        assert_eq!(needle_angle_deg(4000), 270.0);
    }

    #[test]
    fn test_angle_is_monotone_over_the_range() {
        let mut last = needle_angle_deg(0);
        for rpm in (250..=8000).step_by(250) {
            let angle = needle_angle_deg(rpm);
            assert!(angle > last, "angle not rising at {rpm} rpm");
            last = angle;
        }
    }

    #[test]
    fn test_endpoints_at_rest_sit_lower_left() {
        let needle = compute(0);
        assert!(needle.outer.x < CENTER_X);
        assert!(needle.outer.y > CENTER_Y);
        assert!(needle.inner.x < CENTER_X);
        assert!(needle.inner.y > CENTER_Y);
    }

    #[test]
    fn test_midpoint_needle_is_vertical() {
        // 270 degrees: straight up. Allow one pixel of f32 rounding slack.
        let needle = compute(4000);
        assert!((needle.outer.x - CENTER_X).abs() <= 1);
        assert!(needle.outer.y < CENTER_Y);
        assert!((needle.inner.x - CENTER_X).abs() <= 1);
    }

    #[test]
    fn test_root_radius_uses_pre_shortened_gauge_radius() {
        // GAUGE_RADIUS 113: root at 0.20 x 113 = 22.6 px. Deriving it after
        // the 0.75 tip rescale would give 16.9 px instead.
        let needle = compute(0);
        let d2 = dist2_from_center(needle.inner);
        assert!((460..=560).contains(&d2), "root radius off: dist2 {d2}");
    }

    #[test]
    fn test_tip_radius_is_shortened_in_place() {
        // Tip at 0.75 x 113 = 84.75 px from center.
        let needle = compute(0);
        let d2 = dist2_from_center(needle.outer);
        assert!((6900..=7300).contains(&d2), "tip radius off: dist2 {d2}");
    }

    #[test]
    fn test_needle_stays_inside_the_rim() {
        let rim2 = (GAUGE_DIAMETER as i32 / 2) * (GAUGE_DIAMETER as i32 / 2);
        for rpm in (0..=8000).step_by(500) {
            let needle = compute(rpm);
            assert!(dist2_from_center(needle.outer) < rim2);
            assert!(dist2_from_center(needle.inner) < dist2_from_center(needle.outer));
        }
    }

    #[test]
    fn test_at_rest_matches_zero_rpm() {
        assert_eq!(NeedleSegment::at_rest(), compute(0));
    }
}
