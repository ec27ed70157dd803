//! Glyph placement arithmetic
//!
//! Derives the advance width and the affine transform that moves the SVG
//! outline into font coordinates before conversion.

use kurbo::Affine;

use crate::config::GlyphMapping;

/// Computed placement for one glyph.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Advance width in font units.
    pub advance: f64,
    /// Transform applied to outline coordinates before storage.
    pub affine: Affine,
}

/// Compute the placement for an outline of `width`×`height` pixels.
///
/// The translation is asymmetric on purpose: x shifts by the left bearing
/// only, while y shifts by the outline height plus the configured baseline
/// offset. Glyphs authored top-down stack onto the baseline this way.
pub fn compute(
    mapping: &GlyphMapping,
    base_transform: [f64; 6],
    width: f64,
    height: f64,
) -> Placement {
    let advance = width + f64::from(mapping.left) + f64::from(mapping.right);

    let mut coefficients = base_transform;
    coefficients[4] += f64::from(mapping.left);
    coefficients[5] += height + f64::from(mapping.base);

    Placement {
        advance,
        affine: Affine::new(coefficients),
    }
}
