use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ColorFormatError;
use crate::Color;

/// A named request for one ramp.
///
/// A section with an empty name or an empty color is incomplete and
/// generates no entries. Whether to emit edge entries only matters for the
/// fixed step strategy.
///
/// Sections serialize with the camel-cased field names `name`, `color`,
/// `generateContrast`, `inverse`, and `includeEdges`, the last one being
/// optional.
///
/// ```
/// # use chromaramp::palette::Section;
/// let section = Section::new("primary", "#3366ff").with_contrast(false);
/// assert!(!section.is_empty());
/// assert!(!section.generate_contrast);
/// assert!(Section::default().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// The name used in variable names.
    pub name: String,
    /// The base color in hashed hexadecimal notation.
    pub color: String,
    /// Whether to also generate the contrast block.
    pub generate_contrast: bool,
    /// Whether to run the ramp from light to dark.
    pub inverse: bool,
    /// Whether to add entries for slots 0 and 1000.
    #[serde(default)]
    pub include_edges: bool,
}

impl Section {
    /// Create a new section with contrast entries and without inversion or
    /// edges.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            ..Default::default()
        }
    }

    /// Update whether to generate contrast entries.
    #[must_use = "method returns a new section and does not mutate original value"]
    pub fn with_contrast(mut self, generate_contrast: bool) -> Self {
        self.generate_contrast = generate_contrast;
        self
    }

    /// Update whether to invert the ramp.
    #[must_use = "method returns a new section and does not mutate original value"]
    pub fn inverted(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Update whether to include edge entries.
    #[must_use = "method returns a new section and does not mutate original value"]
    pub fn with_edges(mut self, include_edges: bool) -> Self {
        self.include_edges = include_edges;
        self
    }

    /// Determine whether this section is incomplete, i.e., has an empty name
    /// or color. A name or color of only white space is not empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() || self.color.is_empty()
    }

    /// Parse the base color.
    pub fn base_color(&self) -> Result<Color, ColorFormatError> {
        Color::from_str(&self.color)
    }
}

impl Default for Section {
    /// Create the blank section: no name, white, and contrast entries only.
    fn default() -> Self {
        Self {
            name: String::new(),
            color: String::from("#ffffff"),
            generate_contrast: true,
            inverse: false,
            include_edges: false,
        }
    }
}
