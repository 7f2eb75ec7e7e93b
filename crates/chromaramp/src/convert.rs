//! Step-by-step conversion functions.
//!
//! [`Color::to`] covers all conversions between color spaces. The functions in
//! this module expose the individual steps of the pipeline from hashed
//! hexadecimal notation to CIELCH, which is handy for inspecting how a base
//! color ends up with the lightness and chroma it has.
//!
//! All functions operate on unrounded coordinates, with exception of
//! [`hex_to_rounded_lch`], which reports integers for display.
//!
//! Hashed hexadecimal input may use the short form `#rgb`, which denotes the
//! same color as `#rrggbb` with each digit doubled. Any other length fails
//! with [`ColorFormatError::UnexpectedCharacters`].

use crate::core::{
    convert, from_24bit, lab_to_lch as lab_to_lch_impl, linear_srgb_to_xyz, parse,
    rgb_to_linear_rgb, xyz_to_lab as xyz_to_lab_impl, ColorFormat, ColorSpace,
};
use crate::error::ColorFormatError;
use crate::{Color, Float};

fn hex_to_srgb(hex: &str) -> Result<[Float; 3], ColorFormatError> {
    let [r, g, b] = parse(hex)?;
    Ok(from_24bit(r, g, b))
}

/// Decode the hashed hexadecimal color and convert it to linear sRGB.
///
/// ```
/// # use chromaramp::convert::hex_to_linear_rgb;
/// # use chromaramp::error::ColorFormatError;
/// assert_eq!(hex_to_linear_rgb("#ff0000")?, [1.0, 0.0, 0.0]);
/// assert!(hex_to_linear_rgb("#ff00").is_err());
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn hex_to_linear_rgb(hex: &str) -> Result<[Float; 3], ColorFormatError> {
    hex_to_srgb(hex).map(|srgb| rgb_to_linear_rgb(&srgb))
}

/// Convert linear sRGB to XYZ D65, with Y of the reference white at 100.
pub fn linear_rgb_to_xyz(rgb: &[Float; 3]) -> [Float; 3] {
    linear_srgb_to_xyz(rgb)
}

/// Convert XYZ D65 to CIELAB.
pub fn xyz_to_lab(xyz: &[Float; 3]) -> [Float; 3] {
    xyz_to_lab_impl(xyz)
}

/// Convert CIELAB to CIELCH.
///
/// The hue is in degrees and never negative.
///
/// ```
/// # use chromaramp::convert::lab_to_lch;
/// let [_, _, h] = lab_to_lch(&[50.0, -10.0, -10.0]);
/// assert!((180.0..270.0).contains(&h));
/// ```
pub fn lab_to_lch(lab: &[Float; 3]) -> [Float; 3] {
    lab_to_lch_impl(lab)
}

/// Decode the hashed hexadecimal color and convert it to CIELCH.
pub fn hex_to_lch(hex: &str) -> Result<[Float; 3], ColorFormatError> {
    let linear = hex_to_linear_rgb(hex)?;
    Ok(lab_to_lch(&xyz_to_lab(&linear_rgb_to_xyz(&linear))))
}

/// Decode the hashed hexadecimal color and report its CIELCH coordinates as
/// integers.
///
/// This function serves inspection only. Palette generation never rounds
/// intermediate coordinates.
///
/// ```
/// # use chromaramp::convert::hex_to_rounded_lch;
/// # use chromaramp::error::ColorFormatError;
/// let [l, _, h] = hex_to_rounded_lch("#ff0000")?;
/// assert_eq!((l, h), (53, 40));
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn hex_to_rounded_lch(hex: &str) -> Result<[i32; 3], ColorFormatError> {
    let [l, c, h] = hex_to_lch(hex)?;
    Ok([
        l.round() as i32,
        c.round() as i32,
        (h.round() as i32).rem_euclid(360),
    ])
}

/// Decode the hashed hexadecimal color and convert it to CIELAB.
pub fn hex_to_lab(hex: &str) -> Result<[Float; 3], ColorFormatError> {
    hex_to_srgb(hex).map(|srgb| convert(ColorSpace::Srgb, ColorSpace::Lab, &srgb))
}

/// Create a color from CIELAB coordinates.
///
/// Lightness outside `0..=100` is passed through as is.
pub fn lab_to_color(lab: &[Float; 3]) -> Color {
    Color::new(ColorSpace::Lab, *lab)
}

/// Decode the hashed hexadecimal color and convert it to HSL.
///
/// ```
/// # use chromaramp::convert::hex_to_hsl;
/// # use chromaramp::error::ColorFormatError;
/// let [h, s, l] = hex_to_hsl("#3366ff")?;
/// assert_eq!([h.round(), (100.0 * s).round(), (100.0 * l).round()], [225.0, 100.0, 60.0]);
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn hex_to_hsl(hex: &str) -> Result<[Float; 3], ColorFormatError> {
    hex_to_srgb(hex).map(|srgb| convert(ColorSpace::Srgb, ColorSpace::Hsl, &srgb))
}

/// Create a color from HSL coordinates, with saturation and lightness in
/// unit range.
pub fn hsl_to_color(hsl: &[Float; 3]) -> Color {
    Color::new(ColorSpace::Hsl, *hsl)
}

/// Encode the color in the given format.
pub fn encode(color: &Color, format: ColorFormat) -> String {
    color.encode(format)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_pipeline() -> Result<(), ColorFormatError> {
        let linear = hex_to_linear_rgb("#3366ff")?;
        assert_close_enough!(linear[0], 0.033104766570885055);
        assert_close_enough!(linear[1], 0.13286832155381798);
        assert_close_enough!(linear[2], 1.0);

        let xyz = linear_rgb_to_xyz(&linear);
        assert_close_enough!(xyz[1], 17.426549694826075);

        let lab = xyz_to_lab(&xyz);
        assert_close_enough!(lab[0], 48.79305521809559);
        assert_close_enough!(lab[1], 37.47870497376332);
        assert_close_enough!(lab[2], -80.53000503953878);
        assert_eq!(hex_to_lab("#3366ff")?, lab);

        let lch = lab_to_lch(&lab);
        assert_close_enough!(lch[1], 88.82418048132239);
        assert_close_enough!(lch[2], 294.95729234261023);
        assert_eq!(hex_to_lch("#3366ff")?, lch);

        assert_eq!(lab_to_color(&lab).to_hex_format(), "#3366ff");
        Ok(())
    }

    #[test]
    fn test_rounded_lch() -> Result<(), ColorFormatError> {
        let [l, c, h] = hex_to_rounded_lch("#ff0000")?;
        assert_eq!(l, 53);
        assert!((104..=105).contains(&c));
        assert_eq!(h, 40);

        assert_eq!(hex_to_rounded_lch("#000")?, [0, 0, 0]);
        assert_eq!(hex_to_rounded_lch("#3366ff")?, [49, 89, 295]);
        Ok(())
    }

    #[test]
    fn test_hsl() -> Result<(), ColorFormatError> {
        let hsl = hex_to_hsl("#3366ff")?;
        assert_eq!(hsl_to_color(&hsl).to_hex_format(), "#3366ff");
        assert_eq!(
            encode(&hsl_to_color(&[225.0, 1.0, 0.6]), ColorFormat::Hsl),
            "hsl(225, 100%, 60%)"
        );
        assert_eq!(hex_to_hsl("#777")?[0], 0.0);
        Ok(())
    }

    #[test]
    fn test_invalid_color() {
        assert_eq!(hex_to_lch("3366ff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            hex_to_hsl("#3366f"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(hex_to_lab("#33x6ff"), Err(ColorFormatError::MalformedHex));
    }

    #[test]
    fn test_short_hex() -> Result<(), ColorFormatError> {
        assert_eq!(hex_to_lch("#abc")?, hex_to_lch("#aabbcc")?);
        assert_eq!(hex_to_hsl("#F0A")?, hex_to_hsl("#ff00aa")?);
        assert_eq!(
            hex_to_lab("#abcd"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        Ok(())
    }
}
