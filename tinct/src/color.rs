//! A simple representation of color

use std::fmt;

/// A datatype representing color.
///
/// This is a 32 bit RGBA value, red in the most significant byte and alpha
/// in the least. No color space is implied; converting into whatever a
/// native brush expects is the job of the backend.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    #[doc(hidden)]
    Rgba32(u32),
}

impl Color {
    /// Create a color from a 32-bit rgba value (alpha as least significant byte).
    pub const fn rgba32(rgba: u32) -> Color {
        Color::Rgba32(rgba)
    }

    /// Create a color from a 24-bit rgb value (red most significant, blue least).
    pub const fn rgb24(rgb: u32) -> Color {
        Color::rgba32((rgb << 8) | 0xff)
    }

    /// Create a color from four 8-bit components.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::rgba32(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Create an opaque color from three 8-bit components.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::rgba8(r, g, b, 0xff)
    }

    /// Create a color from four floating point values, each in the range 0.0 to 1.0.
    ///
    /// Values outside the range are clamped. The interpretation is the same
    /// as rgba32, and no greater precision is assumed.
    pub fn rgba<F: Into<f64>>(r: F, g: F, b: F, a: F) -> Color {
        let r = frac_to_byte(r.into());
        let g = frac_to_byte(g.into());
        let b = frac_to_byte(b.into());
        let a = frac_to_byte(a.into());
        Color::rgba32((r << 24) | (g << 16) | (b << 8) | a)
    }

    /// Create an opaque color from three floating point values, each in the
    /// range 0.0 to 1.0.
    pub fn rgb<F: Into<f64>>(r: F, g: F, b: F) -> Color {
        Color::rgba::<f64>(r.into(), g.into(), b.into(), 1.0)
    }

    /// Change just the alpha value of a color.
    ///
    /// The `a` value represents alpha in the range 0.0 to 1.0.
    pub fn with_alpha(self, a: impl Into<f64>) -> Color {
        let a = frac_to_byte(a.into());
        Color::rgba32((self.as_rgba_u32() & !0xff) | a)
    }

    /// Convert a color value to a 32-bit rgba value.
    pub const fn as_rgba_u32(self) -> u32 {
        match self {
            Color::Rgba32(rgba) => rgba,
        }
    }

    /// Convert a color value to four 8-bit rgba values.
    pub const fn as_rgba8(self) -> (u8, u8, u8, u8) {
        let rgba = self.as_rgba_u32();
        (
            (rgba >> 24) as u8,
            ((rgba >> 16) & 255) as u8,
            ((rgba >> 8) & 255) as u8,
            (rgba & 255) as u8,
        )
    }

    /// Convert a color value to four f64 values, each in the range 0.0 to 1.0.
    pub fn as_rgba(self) -> (f64, f64, f64, f64) {
        let rgba = self.as_rgba_u32();
        (
            byte_to_frac(rgba >> 24),
            byte_to_frac(rgba >> 16),
            byte_to_frac(rgba >> 8),
            byte_to_frac(rgba),
        )
    }

    /// Whether the alpha component is zero.
    pub const fn is_transparent(self) -> bool {
        self.as_rgba_u32() & 0xff == 0
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba32(0);

    /// Opaque white.
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);

    /// Opaque black.
    pub const BLACK: Color = Color::rgb8(0, 0, 0);

    /// Opaque red.
    pub const RED: Color = Color::rgb8(0xff, 0, 0);

    /// Opaque green.
    pub const GREEN: Color = Color::rgb8(0, 0xff, 0);

    /// Opaque blue.
    pub const BLUE: Color = Color::rgb8(0, 0, 0xff);
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:08x}", self.as_rgba_u32())
    }
}

fn frac_to_byte(frac: f64) -> u32 {
    (frac.max(0.0).min(1.0) * 255.0).round() as u32
}

fn byte_to_frac(byte: u32) -> f64 {
    ((byte & 255) as f64) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_round_trip_through_u32() {
        let c = Color::rgba8(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.as_rgba_u32(), 0x1234_5678);
        assert_eq!(c.as_rgba8(), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn float_components_are_clamped() {
        let c = Color::rgba(2.0, -1.0, 0.0, 1.0);
        assert_eq!(c, Color::RED);
        assert_eq!(Color::rgb(0.0, 0.0, 1.0), Color::BLUE);
    }

    #[test]
    fn alpha_only_changes_the_low_byte() {
        let c = Color::GREEN.with_alpha(0.0);
        assert_eq!(c.as_rgba_u32(), 0x00ff_0000);
        assert!(c.is_transparent());
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }

    #[test]
    fn unit_floats() {
        let (r, g, b, a) = Color::rgba8(255, 0, 0, 0).as_rgba();
        assert_eq!((r, g, b, a), (1.0, 0.0, 0.0, 0.0));
    }
}
