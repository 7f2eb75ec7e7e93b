mod conversion;
mod equality;
mod space;
mod string;

// conversion
pub(crate) use conversion::{
    convert, from_24bit, lab_to_lch, linear_srgb_to_xyz, rgb_to_linear_rgb, to_24bit, xyz_to_lab,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// space
pub use space::ColorSpace;

// string
pub use string::ColorFormat;
pub(crate) use string::{encode, format, parse};
