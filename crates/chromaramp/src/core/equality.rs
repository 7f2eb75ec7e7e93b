use super::ColorSpace;
use crate::{Bits, Float};

/// Coordinates are multiplied by this factor and rounded before comparison.
///
/// XYZ and CIELAB coordinates reach into the hundreds, which leaves 1e9 at
/// roughly the resolution of `f64`.
#[cfg(feature = "f64")]
const ROUNDING_FACTOR: Float = 1e9;
#[cfg(not(feature = "f64"))]
const ROUNDING_FACTOR: Float = 1e2;

/// Assert that two floating point quantities agree up to the resolution used
/// for color equality.
///
/// Both quantities go through [`to_eq_bits`]. Not-a-number therefore equals
/// zero and negative zero equals positive zero.
///
/// # Panics
///
/// If the quantities differ, with both values on lines of their own.
#[macro_export]
macro_rules! assert_close_enough {
    ($left:expr, $right:expr $(,)?) => {
        let (left, right) = ($left, $right);
        assert_eq!(
            $crate::to_eq_bits(left),
            $crate::to_eq_bits(right),
            "quantities differ:\n{:?}\n{:?}",
            left,
            right
        );
    };
}

/// Assert that two coordinate arrays denote the same color in the given
/// color space.
///
/// # Panics
///
/// If the coordinates differ after [`to_eq_coordinates`], with both arrays on
/// lines of their own.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr, $left:expr, $right:expr $(,)?) => {
        let (space, left, right) = ($space, $left, $right);
        assert_eq!(
            $crate::core::to_eq_coordinates(space, left),
            $crate::core::to_eq_coordinates(space, right),
            "coordinates differ:\n{:?}\n{:?}",
            left,
            right
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Replace not-a-number coordinates with zero.
///
/// Lightness is left alone. Ramps depend on extrapolated lightness making it
/// all the way to the 24-bit quantization.
#[inline]
pub(crate) fn normalize(coordinates: &[Float; 3]) -> [Float; 3] {
    coordinates.map(|c| if c.is_nan() { 0.0 } else { c })
}

/// Round a finite quantity to the comparison resolution and return its bits,
/// with negative zero folded into positive zero.
#[inline]
fn quantize(value: Float) -> Bits {
    let rounded = (value * ROUNDING_FACTOR).round();
    // -0.0 == 0.0, so this also drops the sign of negative zero
    if rounded == 0.0 {
        (0.0 as Float).to_bits()
    } else {
        rounded.to_bits()
    }
}

/// Turn coordinates into bits suitable for equality testing and hashing.
///
/// Hues are reduced to a single turn and scaled to unit range first, so that
/// 370º and 10º compare equal.
#[must_use = "function returns new bits and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let mut coordinates = normalize(coordinates);

    let hue = match space {
        ColorSpace::Lch => Some(2),
        ColorSpace::Hsl => Some(0),
        _ => None,
    };
    if let Some(index) = hue {
        coordinates[index] = coordinates[index].rem_euclid(360.0) / 360.0;
    }

    coordinates.map(quantize)
}

// --------------------------------------------------------------------------------------------------------------------

/// Turn a single floating point quantity into bits for comparison.
///
/// Not-a-number becomes zero. Exposed for [`assert_close_enough`] only.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    quantize(if f.is_nan() { 0.0 } else { f })
}
