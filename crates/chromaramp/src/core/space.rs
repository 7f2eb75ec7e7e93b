/// The enumeration of supported color spaces.
///
/// # RGB
///
/// Chromaramp reads and writes [sRGB](https://en.wikipedia.org/wiki/SRGB)
/// colors only. Besides the gamma-corrected form used by hexadecimal and CSS
/// notation, it also supports linear sRGB, which is the stepping stone to XYZ.
/// In-gamut coordinates for both range from 0 to 1, inclusive.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as the
/// foundational color space, with all conversions between unrelated color
/// spaces going through it. Chromaramp uses XYZ with the D65 standard
/// illuminant and scales coordinates to `0..=100`, so that the Y of the
/// reference white is 100.
///
/// # CIELAB and CIELCH
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) uses one
/// coordinate for lightness L and two coordinates a, b for "colorness." The
/// lightness of real colors ranges `0..=100`, whereas a and b have no set
/// limits but in practice stay within `-128..=127`. CIELCH is the polar
/// version of the same color space, with chroma C and hue hº replacing a and
/// b. Palette generation holds a/b fixed while sweeping L, which is why L is
/// never clamped. Values beyond `0..=100` pass through to the final 24-bit
/// quantization.
///
/// # HSL
///
/// [HSL](https://en.wikipedia.org/wiki/HSL_and_HSV) is a cylindrical
/// rearrangement of sRGB. Hue is in degrees, whereas saturation and lightness
/// range `0..=1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Xyz,
    Lab,
    Lch,
    Hsl,
}

impl ColorSpace {
    /// Determine whether this color space is polar, i.e., has a hue.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Lch | Self::Hsl)
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is XYZ.
    pub const fn is_xyz(&self) -> bool {
        matches!(*self, Self::Xyz)
    }

    /// Determine whether this color space is one of the CIELAB variations.
    pub const fn is_cie(&self) -> bool {
        matches!(*self, Self::Lab | Self::Lch)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Xyz => "XYZ D65",
            Lab => "CIELAB",
            Lch => "CIELCH",
            Hsl => "HSL",
        };

        f.write_str(s)
    }
}
