//! Color schemes for the gauge face and the tap-to-cycle registry.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red (0-31), 6 bits green (0-63),
//! 5 bits blue (0-31). This is the native format of the GC9A01 panel, so no
//! conversion happens on the way to the display.
//!
//! # Schemes
//!
//! Three built-in palettes, cycled in order by tapping the face:
//! - [`MIDNIGHT`]: white-on-black with a cyan ring, the default.
//! - [`DAYLIGHT`]: black-on-white for direct sun.
//! - [`EMBER`]: amber night palette with a white needle.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// One complete paint job for the gauge face: the ten colors every visual
/// element pulls from. Static, defined at compile time, never mutated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Scheme name, for boot logs.
    pub name: &'static str,
    /// Full-face background fill.
    pub background: Rgb565,
    /// Tick marks and the rim arc.
    pub tick: Rgb565,
    /// Scale numerals (0..=8).
    pub scale_text: Rgb565,
    /// Gradient ring, innermost circle.
    pub ring_start: Rgb565,
    /// Gradient ring, outermost circle.
    pub ring_end: Rgb565,
    /// Needle, before the opacity pre-blend toward the background.
    pub needle: Rgb565,
    /// Center hub fill.
    pub hub_fill: Rgb565,
    /// Center hub border.
    pub hub_border: Rgb565,
    /// Numeric readout.
    pub value_text: Rgb565,
    /// Brand line under the readout.
    pub brand_text: Rgb565,
}

/// Default scheme: white chrome on black, cyan ring, red needle.
pub static MIDNIGHT: Palette = Palette {
    name: "midnight",
    background: Rgb565::BLACK,
    tick: Rgb565::WHITE,
    scale_text: Rgb565::new(22, 45, 22),
    ring_start: Rgb565::new(0, 8, 12),
    ring_end: Rgb565::CYAN,
    needle: Rgb565::RED,
    hub_fill: Rgb565::new(4, 8, 4),
    hub_border: Rgb565::new(14, 28, 14),
    value_text: Rgb565::WHITE,
    brand_text: Rgb565::new(10, 20, 10),
};

/// High-contrast scheme for direct sunlight: black chrome on near-white.
pub static DAYLIGHT: Palette = Palette {
    name: "daylight",
    background: Rgb565::new(28, 57, 28),
    tick: Rgb565::BLACK,
    scale_text: Rgb565::BLACK,
    ring_start: Rgb565::new(31, 42, 0),
    ring_end: Rgb565::RED,
    needle: Rgb565::new(25, 0, 0),
    hub_fill: Rgb565::WHITE,
    hub_border: Rgb565::BLACK,
    value_text: Rgb565::BLACK,
    brand_text: Rgb565::new(12, 24, 12),
};

/// Amber night scheme: warm black face, amber scale, white needle.
pub static EMBER: Palette = Palette {
    name: "ember",
    background: Rgb565::new(3, 2, 0),
    tick: Rgb565::new(31, 40, 0),
    scale_text: Rgb565::new(31, 48, 6),
    ring_start: Rgb565::new(10, 6, 0),
    ring_end: Rgb565::new(31, 24, 0),
    needle: Rgb565::WHITE,
    hub_fill: Rgb565::new(6, 6, 2),
    hub_border: Rgb565::new(25, 32, 0),
    value_text: Rgb565::new(31, 52, 10),
    brand_text: Rgb565::new(16, 22, 0),
};

/// The built-in registry, in tap order.
pub static SCHEMES: [Palette; 3] = [MIDNIGHT, DAYLIGHT, EMBER];

/// Cursor over an ordered, static palette registry.
///
/// Starts at index 0 and only ever moves forward, wrapping modulo the registry
/// size. A single-entry registry cycles to itself.
pub struct SchemeCycle {
    palettes: &'static [Palette],
    index: usize,
}

impl SchemeCycle {
    /// Cursor over the built-in [`SCHEMES`].
    pub const fn new() -> Self {
        Self::over(&SCHEMES)
    }

    /// Cursor over a caller-supplied registry. Must not be empty.
    pub const fn over(palettes: &'static [Palette]) -> Self {
        assert!(!palettes.is_empty());
        Self { palettes, index: 0 }
    }

    /// The active scheme.
    #[inline]
    pub const fn current(&self) -> &'static Palette {
        &self.palettes[self.index]
    }

    /// Step to the next scheme, wrapping at the end, and return it.
    pub fn advance(&mut self) -> &'static Palette {
        self.index = (self.index + 1) % self.palettes.len();
        self.current()
    }

    /// Position of the active scheme in the registry.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Default for SchemeCycle {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    static SINGLE: [Palette; 1] = [MIDNIGHT];

    #[test]
    fn test_cycle_starts_at_first_scheme() {
        let cycle = SchemeCycle::new();
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current().name, "midnight");
    }

    #[test]
    fn test_current_is_stable_without_advance() {
        let cycle = SchemeCycle::new();
        assert_eq!(cycle.current(), cycle.current());
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_advance_returns_next_scheme() {
        let mut cycle = SchemeCycle::new();
        assert_eq!(cycle.advance().name, "daylight");
        assert_eq!(cycle.index(), 1);
        assert_eq!(cycle.advance().name, "ember");
        assert_eq!(cycle.index(), 2);
    }

    #[test]
    fn test_full_cycle_returns_to_original() {
        let mut cycle = SchemeCycle::new();
        let original = cycle.current();
        for _ in 0..SCHEMES.len() {
            cycle.advance();
        }
        assert_eq!(cycle.current(), original);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_repeated_full_cycles_return_to_original() {
        let mut cycle = SchemeCycle::new();
        let original = cycle.current();
        for k in 1..=4 {
            for _ in 0..SCHEMES.len() {
                cycle.advance();
            }
            assert_eq!(cycle.current(), original, "off after {k} full cycles");
        }
    }

    #[test]
    fn test_single_scheme_registry_cycles_to_itself() {
        let mut cycle = SchemeCycle::over(&SINGLE);
        assert_eq!(cycle.advance(), &MIDNIGHT);
        assert_eq!(cycle.advance(), &MIDNIGHT);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_schemes_have_distinct_backgrounds() {
        assert_ne!(MIDNIGHT.background, DAYLIGHT.background);
        assert_ne!(DAYLIGHT.background, EMBER.background);
        assert_ne!(EMBER.background, MIDNIGHT.background);
    }
}
