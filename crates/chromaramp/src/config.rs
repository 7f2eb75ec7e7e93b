//! The palette configuration and its JSON interchange format.
//!
//! A [`Configuration`] bundles everything that determines the generated
//! palettes: the ordered sections, the strategy, the shared control points,
//! and the output format. It serializes to a JSON object:
//!
//! ```json
//! {
//!   "sections": [
//!     {
//!       "name": "primary",
//!       "color": "#3366ff",
//!       "generateContrast": true,
//!       "inverse": false,
//!       "includeEdges": false
//!     }
//!   ],
//!   "colorFormat": "hex",
//!   "percentageValues": [5.0, 15.0, 25.0, 35.0, 45.0, 55.0, 65.0, 75.0, 85.0],
//!   "strategy": "hsl-percentage"
//! }
//! ```
//!
//! All fields but `sections` are optional when reading. The first version of
//! the tool exported a bare array of sections. [`Configuration::from_json`]
//! still reads such arrays, treating them as fixed step configurations with
//! hexadecimal output.

use serde::{Deserialize, Serialize};

use crate::error::{ColorFormatError, ConfigError};
use crate::palette::{GenerationStrategy, Palette, PaletteGenerator, PercentageValues, Section};
use crate::ColorFormat;

/// A complete palette configuration.
///
/// ```
/// # use chromaramp::config::Configuration;
/// # use chromaramp::palette::Section;
/// # use chromaramp::error::ConfigError;
/// let mut config = Configuration::default();
/// config.sections.push(Section::new("primary", "#3366ff"));
///
/// let json = config.to_json()?;
/// assert_eq!(Configuration::from_json(&json)?, config);
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// The sections in emission order.
    pub sections: Vec<Section>,
    /// The format for emitted colors.
    #[serde(default)]
    pub color_format: ColorFormat,
    /// The control points for percentage-based strategies.
    #[serde(default)]
    pub percentage_values: PercentageValues,
    /// The generation strategy.
    #[serde(default)]
    pub strategy: GenerationStrategy,
}

impl Configuration {
    /// Create a new configuration with the given sections and strategy and
    /// otherwise default values.
    pub fn new(sections: Vec<Section>, strategy: GenerationStrategy) -> Self {
        Self {
            sections,
            strategy,
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|err| {
            log::warn!("configuration is not valid JSON: {err}");
            ConfigError::Parse(err)
        })?;
        Self::from_value(value)
    }

    /// Convert a JSON value into a configuration.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let result = if value.is_array() {
            serde_json::from_value::<Vec<Section>>(value)
                .map(|sections| Self::new(sections, GenerationStrategy::FixedStep))
        } else {
            serde_json::from_value::<Self>(value)
        };

        result.map_err(|err| {
            log::warn!("configuration parse failed: {err}");
            ConfigError::Parse(err)
        })
    }

    /// Serialize this configuration as compact JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::Serialize)
    }

    /// Serialize this configuration as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Create the generator for this configuration.
    pub fn generator(&self) -> PaletteGenerator {
        PaletteGenerator::new(self.strategy, self.percentage_values)
    }

    /// Generate the palettes for all complete sections.
    pub fn palettes(&self) -> Result<Vec<Palette>, ColorFormatError> {
        self.generator().generate(&self.sections)
    }

    /// Generate the CSS custom property declarations wrapped in a rule for
    /// the given selector.
    ///
    /// ```
    /// # use chromaramp::config::Configuration;
    /// # use chromaramp::palette::{GenerationStrategy, Section};
    /// # use chromaramp::error::ColorFormatError;
    /// let config = Configuration::new(
    ///     vec![Section::new("primary", "#3366ff").with_contrast(false)],
    ///     GenerationStrategy::FixedStep,
    /// );
    /// let css = config.to_css(":root")?;
    /// assert!(css.starts_with(":root {\n  --color-primary-100: #"));
    /// assert!(css.contains("\n  --color-primary-500: #3366ff;\n"));
    /// assert!(css.ends_with(";\n}"));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn to_css(&self, selector: &str) -> Result<String, ColorFormatError> {
        let body = self
            .generator()
            .generate_css(&self.sections, self.color_format)?;
        Ok(PaletteGenerator::wrap_css(selector, &body))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Append a blank section and return it for editing.
    pub fn add_section(&mut self) -> &mut Section {
        self.sections.push(Section::default());
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Remove the section with the given index.
    ///
    /// This method returns `None` if the index is out of bounds.
    pub fn remove_section(&mut self, index: usize) -> Option<Section> {
        if index < self.sections.len() {
            Some(self.sections.remove(index))
        } else {
            None
        }
    }

    /// Swap the section with the given index with its predecessor.
    ///
    /// This method does nothing for the first section and out-of-bounds
    /// indices. It returns whether the sections changed.
    pub fn move_section_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.sections.len() {
            return false;
        }

        self.sections.swap(index - 1, index);
        true
    }

    /// Swap the section with the given index with its successor.
    ///
    /// This method does nothing for the last section and out-of-bounds
    /// indices. It returns whether the sections changed.
    pub fn move_section_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.sections.len() {
            return false;
        }

        self.sections.swap(index, index + 1);
        true
    }
}

impl std::str::FromStr for Configuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
