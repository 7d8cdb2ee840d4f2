//! Fonts and text styles for the gauge face.
//!
//! Alignment and fonts are fixed, so they live here as `const` and cost
//! nothing at runtime. Text **colors** come from the active palette, which
//! only exists at call time, so drawing code builds its `MonoTextStyle` on
//! the spot with `MonoTextStyle::new(FONT, palette_color)`; only the color
//! varies, the font reference is shared.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

/// Centered on both axes. All dial text is positioned by its visual center,
/// which keeps the polar placement math free of per-font baseline offsets.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Numeric readout font (`ProFont` 24pt, ~16px advance).
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Scale numerals and the brand line (6x10 px).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;
