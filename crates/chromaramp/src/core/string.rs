use serde::{Deserialize, Serialize};

use super::{convert, to_24bit};
use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Decode `#rgb` or `#rrggbb` into three 8-bit channels.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    let width = match digits.len() {
        3 => 1,
        6 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };
    if !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    let mut channels = [0_u8; 3];
    for (channel, chunk) in channels.iter_mut().zip(digits.as_bytes().chunks(width)) {
        let mut value = 0_u8;
        for &byte in chunk {
            let digit = char::from(byte)
                .to_digit(16)
                .ok_or(ColorFormatError::MalformedHex)?;
            value = value * 16 + digit as u8;
        }
        // #abc is short for #aabbcc
        *channel = if width == 1 { value * 17 } else { value };
    }

    Ok(channels)
}

/// Parse a color in hashed hexadecimal notation after trimming surrounding
/// white space.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    parse_hashed(&s.trim().to_ascii_lowercase())
}

// --------------------------------------------------------------------------------------------------------------------

/// The string encoding for emitted colors.
///
/// The format only determines how a color is written out, after all
/// computation is done. All three formats describe 24-bit sRGB colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Hashed hexadecimal notation with lowercase digits, e.g., `#3366ff`.
    #[default]
    Hex,
    /// The CSS `rgb()` function with integer channels, e.g., `rgb(51, 102, 255)`.
    Rgb,
    /// The CSS `hsl()` function with integer components, e.g., `hsl(225, 100%, 60%)`.
    Hsl,
}

impl ColorFormat {
    /// Get this format's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(format!("unknown color format `{}`", other)),
        }
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Encode the color coordinates in the given format.
///
/// Encoding first quantizes the color to 24-bit sRGB, clamping out-of-gamut
/// coordinates. For HSL, it then recomputes hue, saturation, and lightness
/// from the quantized color, so that saturation and lightness stay within
/// `0..=100%` and hue within `0..360`.
pub(crate) fn encode(space: ColorSpace, coordinates: &[Float; 3], format: ColorFormat) -> String {
    let srgb = convert(space, ColorSpace::Srgb, coordinates);
    let [r, g, b] = to_24bit(&srgb);

    match format {
        ColorFormat::Hex => format!("#{:02x}{:02x}{:02x}", r, g, b),
        ColorFormat::Rgb => format!("rgb({}, {}, {})", r, g, b),
        ColorFormat::Hsl => {
            let [h, s, l] = convert(
                ColorSpace::Srgb,
                ColorSpace::Hsl,
                &super::from_24bit(r, g, b),
            );
            let h = (h.round() as i64).rem_euclid(360);
            let s = (s * 100.0).round() as i64;
            let l = (l * 100.0).round() as i64;
            format!("hsl({}, {}%, {}%)", h, s, l)
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(space: ColorSpace) -> &'static str {
    use ColorSpace::*;
    match space {
        Srgb => "color(srgb ",
        LinearSrgb => "color(srgb-linear ",
        Xyz => "color(xyz-d65 ",
        Lab => "lab(",
        Lch => "lch(",
        Hsl => "color(--hsl ",
    }
}

/// Write the coordinates as a CSS-like color function.
///
/// Unit-range coordinates get the formatter's precision, 5 by default. XYZ,
/// CIELAB, CIELCH, and HSL hue coordinates are about a hundred times larger
/// and get two fractional digits less. Trailing zeros are dropped. HSL has no
/// CSS form with unit-range saturation and lightness, hence the
/// custom-property-like `--hsl` name.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let scale = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);

    f.write_str(css_prefix(space))?;
    for (index, &value) in coordinates.iter().enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        if value.is_nan() {
            f.write_str("none")?;
            continue;
        }

        let large = space.is_xyz() || space.is_cie() || (space == ColorSpace::Hsl && index == 0);
        let scale = if large { scale / 100.0 } else { scale };
        let rounded = (value * scale).round() / scale;
        if rounded.fract() == 0.0 {
            write!(f, "{:.0}", rounded)?;
        } else {
            write!(f, "{}", rounded)?;
        }
    }
    f.write_str(")")
}
