use std::str::FromStr;

use crate::core::{
    convert, encode, format, from_24bit, parse, to_24bit, to_eq_coordinates, ColorFormat,
    ColorSpace,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A color value.
///
/// A color pairs a [`ColorSpace`] with three coordinates. It is immutable:
/// [`Color::to`] and friends return new colors.
///
/// # Coordinates
///
/// See [`ColorSpace`] for the conventions of each space. None of the nominal
/// ranges is enforced. Palette generation routinely creates CIELAB colors
/// with a lightness above 100 or below 0, and those colors keep their
/// coordinates until [`Color::to_24bit`] clamps the result to `0..=255` per
/// channel.
///
/// # Equality and Hashing
///
/// Two colors are equal if they have the same color space and their
/// coordinates agree after replacing not-a-number with zero, reducing hues
/// to a single turn, and rounding away the last few bits of precision.
/// Hashing uses the same normalized coordinates.
///
/// ```
/// # use chromaramp::Color;
/// assert_eq!(Color::lch(60.0, 30.0, 400.0), Color::lch(60.0, 30.0, 40.0));
/// assert_ne!(Color::lab(60.0, 0.0, 0.0), Color::lch(60.0, 0.0, 0.0));
/// ```
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Create a color from its color space and coordinates.
    ///
    /// ```
    /// # use chromaramp::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Lch, [70.0, 60.0, 0.0]);
    /// assert_eq!(pink.space(), ColorSpace::Lch);
    /// assert_eq!(pink[1], 60.0);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Create a gamma-corrected sRGB color.
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Srgb, [r.into(), g.into(), b.into()])
    }

    /// Create a CIELAB color.
    pub fn lab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Lab, [l.into(), a.into(), b.into()])
    }

    /// Create a CIELCH color.
    pub fn lch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Lch, [l.into(), c.into(), h.into()])
    }

    /// Create an HSL color. Saturation and lightness have unit range.
    pub fn hsl(h: impl Into<Float>, s: impl Into<Float>, l: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Hsl, [h.into(), s.into(), l.into()])
    }

    /// Create an sRGB color from 8-bit channels.
    ///
    /// ```
    /// # use chromaramp::Color;
    /// let orange = Color::from_24bit(0xff, 0x80, 0x00);
    /// assert_eq!(orange, Color::srgb(1.0, 128.0 / 255.0, 0.0));
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Convert to the given color space.
    ///
    /// ```
    /// # use chromaramp::{Color, ColorSpace};
    /// let red = Color::from_24bit(0xff, 0, 0).to(ColorSpace::Lch);
    /// assert_eq!(red[0].round(), 53.0);
    /// assert_eq!(red[2].round(), 40.0);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    /// Quantize to 8-bit sRGB channels.
    ///
    /// This is where out-of-gamut and extrapolated colors get clamped.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&convert(self.space, ColorSpace::Srgb, &self.coordinates))
    }

    /// Write as `#rrggbb` with lowercase digits.
    ///
    /// ```
    /// # use chromaramp::Color;
    /// let blue = Color::lab(48.79305521809559, 37.47870497376332, -80.53000503953878);
    /// assert_eq!(blue.to_hex_format(), "#3366ff");
    /// ```
    pub fn to_hex_format(&self) -> String {
        self.encode(ColorFormat::Hex)
    }

    /// Write in the given output format.
    ///
    /// ```
    /// # use chromaramp::{Color, ColorFormat};
    /// let blue = Color::from_24bit(0x33, 0x66, 0xff);
    /// assert_eq!(blue.encode(ColorFormat::Rgb), "rgb(51, 102, 255)");
    /// assert_eq!(blue.encode(ColorFormat::Hsl), "hsl(225, 100%, 60%)");
    /// ```
    pub fn encode(&self, format: ColorFormat) -> String {
        encode(self.space, &self.coordinates, format)
    }
}

impl Default for Color {
    /// Black in sRGB.
    fn default() -> Self {
        Self::new(ColorSpace::Srgb, [0.0; 3])
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Parse `#rrggbb` or its short form `#rgb`.
    ///
    /// Case does not matter and surrounding white space is ignored.
    ///
    /// ```
    /// # use chromaramp::Color;
    /// # use chromaramp::error::ColorFormatError;
    /// let navy: Color = " #011480 ".parse()?;
    /// assert_eq!(navy, Color::from_24bit(0x01, 0x14, 0x80));
    /// assert_eq!("#ABC".parse::<Color>()?, Color::from_24bit(0xaa, 0xbb, 0xcc));
    /// assert!("#01148".parse::<Color>().is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b] = parse(s)?;
        Ok(Self::from_24bit(r, g, b))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Get the coordinate at the index.
    ///
    /// # Panics
    ///
    /// If the index is 3 or larger.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);
        to_eq_coordinates(self.space, &self.coordinates).hash(state);
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.space == other.space
            && (self.coordinates == other.coordinates
                || to_eq_coordinates(self.space, &self.coordinates)
                    == to_eq_coordinates(other.space, &other.coordinates))
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Color")
            .field(&self.space)
            .field(&self.coordinates)
            .finish()
    }
}

impl std::fmt::Display for Color {
    /// Write a CSS-like color function, e.g., `lab(48.793 37.479 -80.53)`.
    ///
    /// The precision defaults to five fractional digits for unit-range
    /// coordinates and three for the others. An explicit precision applies
    /// to unit-range coordinates, with the others getting two digits less.
    ///
    /// ```
    /// # use chromaramp::Color;
    /// let mint = Color::from_24bit(0xa1, 0xd2, 0xae);
    /// assert_eq!(mint.to_string(), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", mint), "color(srgb 0.631 0.824 0.682)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}
