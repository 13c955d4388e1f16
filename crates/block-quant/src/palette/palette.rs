//! Palette struct with nearest-color and exact-match lookup.
//!
//! The palette is the fixed set of named reference colors every block
//! resolves to. It is built once, validated at construction, and never
//! mutated afterwards.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// A named reference color.
///
/// Swatches are immutable: construct a new one rather than editing in
/// place. Cloning is cheap enough for per-conversion summary output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Human-readable color name, e.g. `"Dark Teal"`.
    pub name: String,
    /// The reference color.
    pub rgb: Rgb,
}

impl Swatch {
    /// Create a new swatch.
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }
}

/// An immutable, ordered collection of named reference colors.
///
/// Construction validates the palette once so that every later lookup is
/// total: a `Palette` is never empty and never contains two swatches with
/// the same RGB value. Order matters — nearest-color ties resolve to the
/// earliest swatch.
///
/// # Example
///
/// ```
/// use block_quant::{Palette, Rgb, Swatch};
///
/// let palette = Palette::new(vec![
///     Swatch::new("black", Rgb::new(0, 0, 0)),
///     Swatch::new("white", Rgb::new(255, 255, 255)),
/// ])
/// .unwrap();
///
/// let (idx, dist) = palette.nearest(Rgb::new(10, 10, 10));
/// assert_eq!(palette.swatch(idx).name, "black");
/// assert_eq!(dist, 300);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Create a palette from an ordered list of swatches.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `swatches` is empty
    /// - [`PaletteError::DuplicateColor`] if two swatches share an RGB value
    ///
    /// # Example
    ///
    /// ```
    /// use block_quant::{Palette, PaletteError, Rgb, Swatch};
    ///
    /// let result = Palette::new(vec![]);
    /// assert!(matches!(result, Err(PaletteError::EmptyPalette)));
    /// ```
    pub fn new(swatches: Vec<Swatch>) -> Result<Self, PaletteError> {
        if swatches.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (i, swatch) in swatches.iter().enumerate() {
            if !seen.insert(swatch.rgb.packed()) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self { swatches })
    }

    /// Create a palette from hex color strings.
    ///
    /// A convenience constructor for callers that only have raw colors, no
    /// names: each swatch is named after its normalized hex form.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for validation failures.
    ///
    /// # Example
    ///
    /// ```
    /// use block_quant::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert_eq!(palette.swatch(1).name, "#FFFFFF");
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let swatches = colors
            .iter()
            .map(|s| {
                let rgb = Rgb::from_str(s).map_err(PaletteError::ParseColor)?;
                Ok(Swatch::new(rgb.to_string(), rgb))
            })
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Palette::new(swatches)
    }

    /// Returns the number of swatches in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Get the swatch at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`. Indices returned by [`nearest()`] are
    /// always valid.
    ///
    /// [`nearest()`]: Palette::nearest
    #[inline]
    pub fn swatch(&self, idx: usize) -> &Swatch {
        &self.swatches[idx]
    }

    /// All swatches in palette order.
    #[inline]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Find the nearest swatch to the given color.
    ///
    /// Returns `(index, distance)` where `distance` is the squared
    /// Euclidean RGB distance. The scan is linear — optimal for the small
    /// fixed palettes this crate targets — and deterministic: the best
    /// candidate is replaced only on strictly smaller distance, so an exact
    /// tie resolves to the earliest swatch in palette order.
    ///
    /// # Example
    ///
    /// ```
    /// use block_quant::{Palette, Rgb, Swatch};
    ///
    /// let palette = Palette::new(vec![
    ///     Swatch::new("red", Rgb::new(255, 0, 0)),
    ///     Swatch::new("blue", Rgb::new(0, 0, 255)),
    /// ])
    /// .unwrap();
    ///
    /// let (idx, dist) = palette.nearest(Rgb::new(200, 30, 30));
    /// assert_eq!(idx, 0);
    /// assert!(dist > 0);
    /// ```
    #[inline]
    pub fn nearest(&self, color: Rgb) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = self.swatches[0].rgb.distance_squared(color);

        for (i, swatch) in self.swatches.iter().enumerate().skip(1) {
            let dist = swatch.rgb.distance_squared(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Find the swatch whose RGB value equals `color` exactly.
    ///
    /// Unlike [`nearest()`](Palette::nearest) this never approximates:
    /// `None` means no swatch matches byte-for-byte, which is a normal
    /// result for inspection features, not an error.
    #[inline]
    pub fn exact_match(&self, color: Rgb) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.rgb == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bw() -> Palette {
        Palette::new(vec![
            Swatch::new("black", Rgb::new(0, 0, 0)),
            Swatch::new("white", Rgb::new(255, 255, 255)),
        ])
        .unwrap()
    }

    #[test]
    fn test_basic_construction() {
        let palette = bw();
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette.swatch(0).name, "black");
        assert_eq!(palette.swatch(1).rgb, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = Palette::new(vec![]);
        assert!(matches!(result, Err(PaletteError::EmptyPalette)));
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let result = Palette::new(vec![
            Swatch::new("red", Rgb::new(255, 0, 0)),
            Swatch::new("green", Rgb::new(0, 255, 0)),
            Swatch::new("also red", Rgb::new(255, 0, 0)),
        ]);
        assert!(matches!(
            result,
            Err(PaletteError::DuplicateColor { index: 2 })
        ));
    }

    #[test]
    fn test_duplicate_names_allowed() {
        // Only RGB values have to be unique; names are free-form labels.
        let result = Palette::new(vec![
            Swatch::new("grey", Rgb::new(120, 120, 120)),
            Swatch::new("grey", Rgb::new(210, 210, 210)),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_nearest_exact_match_has_zero_distance() {
        let palette = bw();
        let (idx, dist) = palette.nearest(Rgb::new(0, 0, 0));
        assert_eq!(idx, 0);
        assert_eq!(dist, 0);
    }

    #[test]
    fn test_nearest_picks_closest() {
        let palette = bw();

        let (idx, _) = palette.nearest(Rgb::new(64, 64, 64));
        assert_eq!(idx, 0, "dark grey should match black");

        let (idx, _) = palette.nearest(Rgb::new(192, 192, 192));
        assert_eq!(idx, 1, "light grey should match white");
    }

    #[test]
    fn test_nearest_tie_breaks_to_earliest() {
        // (100,0,0) is equidistant from (90,0,0) and (110,0,0); the
        // earlier swatch must win.
        let palette = Palette::new(vec![
            Swatch::new("a", Rgb::new(90, 0, 0)),
            Swatch::new("b", Rgb::new(110, 0, 0)),
        ])
        .unwrap();
        let (idx, dist) = palette.nearest(Rgb::new(100, 0, 0));
        assert_eq!(idx, 0);
        assert_eq!(dist, 100);

        // Same colors in the opposite order flip the winner.
        let flipped = Palette::new(vec![
            Swatch::new("b", Rgb::new(110, 0, 0)),
            Swatch::new("a", Rgb::new(90, 0, 0)),
        ])
        .unwrap();
        let (idx, _) = flipped.nearest(Rgb::new(100, 0, 0));
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_nearest_exact_beats_proximity() {
        // A pixel exactly equal to a palette color resolves to that swatch
        // no matter how close other entries are.
        let palette = Palette::new(vec![
            Swatch::new("near", Rgb::new(100, 100, 101)),
            Swatch::new("exact", Rgb::new(100, 100, 100)),
        ])
        .unwrap();
        let (idx, dist) = palette.nearest(Rgb::new(100, 100, 100));
        assert_eq!(idx, 1);
        assert_eq!(dist, 0);
    }

    #[test]
    fn test_single_swatch_palette() {
        let palette = Palette::new(vec![Swatch::new("only", Rgb::new(12, 34, 56))]).unwrap();
        let (idx, _) = palette.nearest(Rgb::new(255, 255, 255));
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_exact_match() {
        let palette = bw();
        assert_eq!(
            palette.exact_match(Rgb::new(0, 0, 0)).map(|s| &s.name[..]),
            Some("black")
        );
        assert!(palette.exact_match(Rgb::new(1, 0, 0)).is_none());
    }

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex(&["#000000", "#FFF", "ED1C24"]).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.swatch(1).rgb, Rgb::new(255, 255, 255));
        assert_eq!(palette.swatch(2).name, "#ED1C24");
    }

    #[test]
    fn test_from_hex_invalid() {
        let result = Palette::from_hex(&["#000000", "#ZZZZZZ"]);
        assert!(matches!(result, Err(PaletteError::ParseColor(_))));
    }

    #[test]
    fn test_from_hex_duplicate() {
        // #FFF and #FFFFFF normalize to the same color
        let result = Palette::from_hex(&["#FFF", "#FFFFFF"]);
        assert!(matches!(result, Err(PaletteError::DuplicateColor { .. })));
    }
}
