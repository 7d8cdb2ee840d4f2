//! Gauge geometry and timing constants.
//!
//! # Pre-computed Layout Constants
//!
//! Every radius and anchor point on the dial is derived from the screen size at
//! compile time as `const`, so the drawing code never recalculates positions per
//! frame. Angles follow screen coordinates: y grows downward, degrees grow
//! clockwise, 0 degrees points right.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (GC9A01 round panel: 240x240).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Gauge diameter: the dial fills the round panel edge to edge.
pub const GAUGE_DIAMETER: u32 = 240;

// =============================================================================
// Measurement Range
// =============================================================================

/// Lowest accepted RPM reading.
pub const RPM_MIN: i32 = 0;

/// Highest accepted RPM reading. Frames above this are corrupt, not clamped.
pub const RPM_MAX: i32 = 8000;

/// RPM per dial unit: the face reads 0..=8 (x1000 rpm).
pub const RPM_PER_UNIT: f32 = 1000.0;

/// First dial unit on the scale.
pub const SCALE_MIN: f32 = 0.0;

/// Last dial unit on the scale.
pub const SCALE_MAX: f32 = 8.0;

// =============================================================================
// Sweep Geometry
// =============================================================================

/// Angle of the scale start (RPM_MIN), lower-left of the face.
pub const GAUGE_START_DEG: f32 = 135.0;

/// Angular travel from RPM_MIN to RPM_MAX. The remaining 90 degrees at the
/// bottom of the face stay needle-free and hold the readout and brand line.
pub const GAUGE_SWEEP_DEG: f32 = 270.0;

/// Stroke width of the rim arc.
pub const ARC_WIDTH: u32 = 14;

/// Radius of the rim arc centerline; also the base radius every needle and
/// tick length is derived from.
pub const GAUGE_RADIUS: f32 = GAUGE_DIAMETER as f32 / 2.0 - ARC_WIDTH as f32 / 2.0;

/// Chord segments used to stroke the rim arc. At this step the chords overlap
/// well inside the ARC_WIDTH stroke and the arc reads as continuous.
pub const ARC_CHORD_STEPS: u32 = 96;

// =============================================================================
// Scale Ticks
// =============================================================================

/// Total tick count across the sweep (8 units x 5 subdivisions, plus the end tick).
pub const TICK_COUNT: u32 = 41;

/// Every n-th tick is a major tick and carries a numeral.
pub const TICK_MAJOR_EVERY: u32 = 5;

/// Outer end of every tick, just inside the rim arc.
pub const TICK_OUTER_RADIUS: f32 = GAUGE_RADIUS - ARC_WIDTH as f32 / 2.0 - 2.0;

/// Inner end of a minor tick.
pub const TICK_MINOR_INNER_RADIUS: f32 = TICK_OUTER_RADIUS - 8.0;

/// Inner end of a major tick.
pub const TICK_MAJOR_INNER_RADIUS: f32 = TICK_OUTER_RADIUS - 14.0;

/// Minor tick stroke width.
pub const TICK_MINOR_WIDTH: u32 = 1;

/// Major tick stroke width.
pub const TICK_MAJOR_WIDTH: u32 = 3;

/// Radius of the scale numeral centers (0..=8 at the major ticks).
pub const SCALE_TEXT_RADIUS: f32 = 76.0;

// =============================================================================
// Decorative Ring
// =============================================================================

/// Innermost circle of the gradient ring. Sits outside the needle tip so the
/// ring is painted once per scene build and never disturbed by needle erases.
pub const RING_INNER_RADIUS: u32 = 89;

/// Outermost circle of the gradient ring, running under the tick roots.
pub const RING_OUTER_RADIUS: u32 = 92;

// =============================================================================
// Needle
// =============================================================================

/// Needle root radius as a fraction of the pre-shortened GAUGE_RADIUS.
pub const NEEDLE_INNER_RATIO: f32 = 0.20;

/// Needle tip shortening factor, applied to GAUGE_RADIUS after the root
/// radius is taken.
pub const NEEDLE_OUTER_RATIO: f32 = 0.75;

/// Needle stroke width.
pub const NEEDLE_WIDTH: u32 = 3;

/// Needle opacity over the face. Rgb565 has no alpha channel, so this is
/// realized as a fixed pre-blend of the needle color toward the background.
pub const NEEDLE_OPACITY: f32 = 0.55;

// =============================================================================
// Hub and Labels
// =============================================================================

/// Diameter of the center hub. Covers the needle root with margin.
pub const HUB_DIAMETER: u32 = 52;

/// Hub border stroke width.
pub const HUB_BORDER_WIDTH: u32 = 2;

/// Vertical center of the numeric readout, in the needle-free bottom gap.
pub const VALUE_TEXT_Y: i32 = CENTER_Y + 52;

/// Width of the readout clear box (fits "8000" in the value font).
pub const VALUE_CLEAR_WIDTH: u32 = 70;

/// Height of the readout clear box.
pub const VALUE_CLEAR_HEIGHT: u32 = 26;

/// Brand line under the readout.
pub const BRAND_TEXT: &str = "TACHPOD";

/// Vertical center of the brand line.
pub const BRAND_TEXT_Y: i32 = CENTER_Y + 74;

// =============================================================================
// Timing
// =============================================================================

/// Refresh tick period: the needle and readout track the latest measurement
/// at 10 Hz.
pub const REFRESH_PERIOD_MS: u64 = 100;
