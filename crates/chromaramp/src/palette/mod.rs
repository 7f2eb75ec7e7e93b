//! Generation of lightness ramps for design tokens.
//!
//! A [`Section`] names a base color. The [`PaletteGenerator`] turns each
//! section into a [`Palette`] of nine ramp entries, optionally framed by two
//! edge entries and optionally followed by a contrast block of the same
//! shape. Every [`PaletteEntry`] carries a CSS custom property name of the
//! form `--color-{name}-{slot}` or `--color-{name}-contrast-{slot}`.
//!
//! How the ramp's lightness values are chosen is up to the
//! [`GenerationStrategy`]. Two of the three strategies are driven by the
//! shared [`PercentageValues`].
//!
//! ```
//! # use chromaramp::error::ColorFormatError;
//! # use chromaramp::palette::{GenerationStrategy, PaletteGenerator, Section};
//! # use chromaramp::ColorFormat;
//! let generator = PaletteGenerator::with_strategy(GenerationStrategy::FixedStep);
//! let palette = generator
//!     .generate_section(&Section::new("primary", "#3366ff"))?
//!     .expect("section is complete");
//!
//! assert_eq!(palette.len(), 18);
//! assert_eq!(palette.entries()[0].variable_name(), "--color-primary-100");
//! assert_eq!(palette.entries()[17].variable_name(), "--color-primary-contrast-900");
//! assert_eq!(palette.entries()[4].value(ColorFormat::Rgb), "rgb(51, 102, 255)");
//! # Ok::<(), ColorFormatError>(())
//! ```

mod entry;
mod generator;
mod section;
mod strategy;

pub use entry::{Palette, PaletteEntry, Slot};
pub use generator::PaletteGenerator;
pub use section::Section;
pub use strategy::{GenerationStrategy, PercentageValues};
