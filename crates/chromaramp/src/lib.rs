//! # Chromaramp
//!
//! Chromaramp turns a handful of base colors into lightness ramps for design
//! tokens and emits them as CSS custom properties.
//!
//!
//! ## 1. Overview
//!
//! Chromaramp's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates. It converts between
//!     sRGB, linear sRGB, XYZ, CIELAB, CIELCH, and HSL and encodes colors in
//!     one of the [`ColorFormat`]s for output.
//!   * [`palette::Section`] names a base color and asks for a ramp, optionally
//!     with contrast entries, inversion, and edge entries.
//!   * [`palette::PaletteGenerator`] applies one of three
//!     [`palette::GenerationStrategy`]s to sections and produces
//!     [`palette::Palette`]s, i.e., ordered sequences of
//!     [`palette::PaletteEntry`].
//!   * [`config::Configuration`] bundles sections, strategy, control points,
//!     and output format and reads and writes them as JSON.
//!
//! The [`convert`] module exposes the individual steps of the conversion
//! pipeline, including the integer CIELCH report used for inspection.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use chromaramp::config::Configuration;
//! # use chromaramp::palette::{GenerationStrategy, Section};
//! # use chromaramp::ColorFormat;
//! # use std::error::Error;
//! let json = r##"{
//!     "sections": [
//!         { "name": "primary", "color": "#3366ff", "generateContrast": true, "inverse": false },
//!         { "name": "", "color": "#ffffff", "generateContrast": true, "inverse": false }
//!     ],
//!     "colorFormat": "rgb",
//!     "strategy": "fixed-step"
//! }"##;
//!
//! let config = Configuration::from_json(json)?;
//! assert_eq!(config.strategy, GenerationStrategy::FixedStep);
//! assert_eq!(config.color_format, ColorFormat::Rgb);
//!
//! let css = config.to_css(":root")?;
//! assert!(css.starts_with(":root {\n"));
//! assert!(css.contains("  --color-primary-500: rgb(51, 102, 255);\n"));
//! assert_eq!(css.lines().count(), 20);
//! # Ok::<(), Box<dyn Error>>(())
//! ```
//!
//!
//! ## 3. Extrapolation
//!
//! Lightness and control points are never clamped. A ramp step that asks for
//! a CIELAB lightness of 140 or an HSL lightness of -20% is computed as is,
//! and only the final quantization to 24-bit sRGB clamps each channel to
//! `0..=255`. Consequently, extreme steps of a ramp may saturate to pure
//! white or black, or to the brightest or darkest version of the base hue.
//!
//!
//! ## 4. Feature Flags
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod config;
pub mod convert;
mod core;
pub mod error;
mod object;
pub mod palette;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{ColorFormat, ColorSpace};
pub use object::Color;
