use super::{normalize, ColorSpace};
use crate::Float;

/// Scale 8-bit channels to unit range.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r, g, b].map(|c| Float::from(c) / 255.0)
}

/// Quantize gamma-corrected sRGB coordinates to 8-bit channels.
///
/// Extrapolated ramps produce coordinates outside `0..=1`. They are clamped
/// here and nowhere else.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    normalize(coordinates).map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the product of a 3x3 matrix and a column vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = *vector;
    matrix.map(|[a, b, c]| a.mul_add(x, b.mul_add(y, c * z)))
}

// --------------------------------------------------------------------------------------------------------------------

/// Undo the sRGB transfer function for one channel.
#[inline]
fn expand(c: Float) -> Float {
    let magnitude = c.abs();
    if magnitude <= 0.04045 {
        c / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(c)
    }
}

/// Apply the sRGB transfer function to one channel.
///
/// The power is taken of the magnitude so that negative channels, which
/// extrapolated lightness produces, stay numbers.
#[inline]
fn compress(c: Float) -> Float {
    let magnitude = c.abs();
    if magnitude <= 0.0031308 {
        c * 12.92
    } else {
        magnitude.powf(1.0 / 2.4).mul_add(1.055, -0.055).copysign(c)
    }
}

/// Convert gamma-corrected sRGB to linear sRGB.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(expand)
}

/// Convert linear sRGB to gamma-corrected sRGB.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(compress)
}

// --------------------------------------------------------------------------------------------------------------------
// The four-digit matrices popularized by http://www.easyrgb.com/en-math.php

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124, 0.3576, 0.1805 ],
    [ 0.2126, 0.7152, 0.0722 ],
    [ 0.0193, 0.1192, 0.9505 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2406, -1.5372, -0.4986 ],
    [ -0.9689,  1.8758,  0.0415 ],
    [  0.0557, -0.2040,  1.0570 ],
];

/// Convert linear sRGB in unit range to XYZ on the `0..=100` scale.
pub(crate) fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, &value.map(|c| c * 100.0))
}

/// Convert XYZ on the `0..=100` scale to linear sRGB in unit range.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, &value.map(|c| c / 100.0))
}

// --------------------------------------------------------------------------------------------------------------------

mod cielab {
    use crate::Float;

    /// The D65 reference white on the `0..=100` scale.
    const REFERENCE_WHITE: [Float; 3] = [95.047, 100.000, 108.883];

    const EPSILON: Float = 0.008856;
    const KAPPA: Float = 7.787;
    const OFFSET: Float = 16.0 / 116.0;

    /// Convert coordinates for XYZ to CIELAB. This is a one-hop, direct
    /// conversion.
    #[allow(non_snake_case)]
    pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn f(t: Float) -> Float {
            if t > EPSILON {
                t.cbrt()
            } else {
                KAPPA.mul_add(t, OFFSET)
            }
        }

        let [Xn, Yn, Zn] = REFERENCE_WHITE;
        let [x, y, z] = *value;
        let (fx, fy, fz) = (f(x / Xn), f(y / Yn), f(z / Zn));

        [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
    }

    /// Convert coordinates for CIELAB to XYZ. This is a one-hop, direct
    /// conversion.
    #[allow(non_snake_case)]
    pub(crate) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn f_inv(t: Float) -> Float {
            let cubed = t * t * t;
            if cubed > EPSILON {
                cubed
            } else {
                (t - OFFSET) / KAPPA
            }
        }

        let [L, a, b] = *value;
        let fy = (L + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        let [Xn, Yn, Zn] = REFERENCE_WHITE;
        [Xn * f_inv(fx), Yn * f_inv(fy), Zn * f_inv(fz)]
    }

    /// Convert coordinates for CIELAB to CIELCH. This is a one-hop, direct
    /// conversion. The hue of a color without chroma is 0.
    #[allow(non_snake_case)]
    pub(crate) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;

        let C = a.hypot(b);
        let h = b.atan2(a).to_degrees();
        let h = if h < 0.0 { h + 360.0 } else { h };

        [L, C, h]
    }

    /// Convert coordinates for CIELCH to CIELAB. This is a one-hop, direct
    /// conversion.
    #[allow(non_snake_case)]
    pub(crate) fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;
        let hue_radian = h.to_radians();
        [L, C * hue_radian.cos(), C * hue_radian.sin()]
    }
}

pub(crate) use cielab::{lab_to_lch, lab_to_xyz, lch_to_lab, xyz_to_lab};

// --------------------------------------------------------------------------------------------------------------------

mod hsl {
    use crate::Float;

    /// Convert coordinates for sRGB to HSL. This is a one-hop, direct
    /// conversion. The hue of a gray is 0.
    pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
        let [r, g, b] = *value;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return [0.0, 0.0, lightness];
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
        let sextant = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        [sextant * 60.0, saturation, lightness]
    }

    /// Convert coordinates for HSL to sRGB. This is a one-hop, direct
    /// conversion.
    ///
    /// Lightness and saturation are used as is. Lightness beyond `0..=1`
    /// yields coordinates beyond `0..=1`, which the 24-bit quantization
    /// clamps.
    pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
        let [h, s, l] = *value;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sextant = h.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sextant.rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let [r, g, b] = match sextant as u8 {
            0 => [chroma, x, 0.0],
            1 => [x, chroma, 0.0],
            2 => [0.0, chroma, x],
            3 => [0.0, x, chroma],
            4 => [x, 0.0, chroma],
            _ => [chroma, 0.0, x],
        };

        [r + m, g + m, b + m]
    }
}

pub(crate) use hsl::{hsl_to_srgb, srgb_to_hsl};

// --------------------------------------------------------------------------------------------------------------------

/// Convert from any color space to XYZ.
fn to_xyz(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    match space {
        Srgb => linear_srgb_to_xyz(&rgb_to_linear_rgb(value)),
        LinearSrgb => linear_srgb_to_xyz(value),
        Xyz => *value,
        Lab => lab_to_xyz(value),
        Lch => lab_to_xyz(&lch_to_lab(value)),
        Hsl => linear_srgb_to_xyz(&rgb_to_linear_rgb(&hsl_to_srgb(value))),
    }
}

/// Convert from XYZ to any color space.
fn from_xyz(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    match space {
        Srgb => linear_rgb_to_rgb(&xyz_to_linear_srgb(value)),
        LinearSrgb => xyz_to_linear_srgb(value),
        Xyz => *value,
        Lab => xyz_to_lab(value),
        Lch => lab_to_lch(&xyz_to_lab(value)),
        Hsl => srgb_to_hsl(&linear_rgb_to_rgb(&xyz_to_linear_srgb(value))),
    }
}

/// Convert coordinates between color spaces.
///
/// Not-a-number coordinates are replaced with zero first. Conversions within
/// the RGB family and between CIELAB and CIELCH are direct. All others pass
/// through XYZ. Nothing is clamped.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    let coordinates = normalize(coordinates);
    match (from_space, to_space) {
        (from, to) if from == to => coordinates,
        (Srgb, LinearSrgb) => rgb_to_linear_rgb(&coordinates),
        (LinearSrgb, Srgb) => linear_rgb_to_rgb(&coordinates),
        (Srgb, Hsl) => srgb_to_hsl(&coordinates),
        (Hsl, Srgb) => hsl_to_srgb(&coordinates),
        (LinearSrgb, Hsl) => srgb_to_hsl(&linear_rgb_to_rgb(&coordinates)),
        (Hsl, LinearSrgb) => rgb_to_linear_rgb(&hsl_to_srgb(&coordinates)),
        (Lab, Lch) => lab_to_lch(&coordinates),
        (Lch, Lab) => lch_to_lab(&coordinates),
        (from, to) => from_xyz(to, &to_xyz(from, &coordinates)),
    }
}
