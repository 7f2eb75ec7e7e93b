use super::strategy::{Flags, Stop};
use super::{GenerationStrategy, Palette, PaletteEntry, PercentageValues, Section};
use crate::error::ColorFormatError;
use crate::{Color, ColorFormat, ColorSpace};

/// A generator of color ramps.
///
/// The generator combines a [`GenerationStrategy`] with the shared
/// [`PercentageValues`]. It is a pure function of its inputs: it never
/// retains or modifies the sections it is asked to process, and the same
/// sections always produce the same palettes.
///
/// ```
/// # use chromaramp::error::ColorFormatError;
/// # use chromaramp::palette::{GenerationStrategy, PaletteGenerator, Section};
/// # use chromaramp::ColorFormat;
/// let generator = PaletteGenerator::with_strategy(GenerationStrategy::FixedStep);
/// let sections = [Section::new("primary", "#3366ff").with_contrast(false)];
///
/// let body = generator.generate_css(&sections, ColorFormat::Hex)?;
/// assert!(body.starts_with("  --color-primary-100: "));
/// assert!(body.contains("  --color-primary-500: #3366ff;\n"));
/// assert_eq!(body.lines().count(), 9);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteGenerator {
    strategy: GenerationStrategy,
    percentages: PercentageValues,
}

impl PaletteGenerator {
    /// Create a new generator.
    pub const fn new(strategy: GenerationStrategy, percentages: PercentageValues) -> Self {
        Self {
            strategy,
            percentages,
        }
    }

    /// Create a new generator with the default control points.
    pub fn with_strategy(strategy: GenerationStrategy) -> Self {
        Self::new(strategy, PercentageValues::default())
    }

    /// Get the strategy.
    pub fn strategy(&self) -> GenerationStrategy {
        self.strategy
    }

    /// Get the control points.
    pub fn percentages(&self) -> &PercentageValues {
        &self.percentages
    }

    /// Generate the palette for one section.
    ///
    /// This method returns `None` if the section is incomplete, i.e., has an
    /// empty name or color. It fails if the base color cannot be parsed.
    pub fn generate_section(&self, section: &Section) -> Result<Option<Palette>, ColorFormatError> {
        if section.is_empty() {
            log::debug!(
                "skipping incomplete section name={:?} color={:?}",
                section.name,
                section.color
            );
            return Ok(None);
        }

        let name = section.name.as_str();
        let space = self.strategy.space();
        let base = section.base_color()?.to(space);
        let [c1, c2, c3] = *base.as_ref();

        let lightness = match space {
            ColorSpace::Hsl => c3 * 100.0,
            _ => c1,
        };
        let flags = Flags {
            contrast: section.generate_contrast,
            inverse: section.inverse,
            edges: section.include_edges && self.strategy.has_edges(),
        };
        let stops = self.strategy.stops(lightness, flags, &self.percentages);

        let color_at = |stop: &Stop| match space {
            ColorSpace::Hsl => Color::hsl(c1, c2, stop.lightness / 100.0),
            _ => Color::lab(stop.lightness, c2, c3),
        };

        let ramp = stops
            .ramp
            .iter()
            .map(|stop| PaletteEntry::new(name, stop.slot, color_at(stop), stop.percentage, false));
        let contrast = stops
            .contrast
            .iter()
            .map(|stop| PaletteEntry::new(name, stop.slot, color_at(stop), stop.percentage, true));
        let entries: Vec<_> = ramp.chain(contrast).collect();

        log::trace!(
            "generated {} entries for section {:?} with {}",
            entries.len(),
            name,
            self.strategy
        );
        Ok(Some(Palette::new(name, entries)))
    }

    /// Generate the palettes for all sections, in order.
    ///
    /// Incomplete sections are skipped. If any base color is malformed, this
    /// method fails without producing any palettes.
    pub fn generate(&self, sections: &[Section]) -> Result<Vec<Palette>, ColorFormatError> {
        let mut palettes = Vec::with_capacity(sections.len());
        for section in sections {
            if let Some(palette) = self.generate_section(section)? {
                palettes.push(palette);
            }
        }

        Ok(palettes)
    }

    /// Generate the CSS custom property declarations for all sections.
    ///
    /// The result has one indented declaration per line and is meant to be
    /// placed inside a rule, e.g., with [`PaletteGenerator::wrap_css`].
    pub fn generate_css(
        &self,
        sections: &[Section],
        format: ColorFormat,
    ) -> Result<String, ColorFormatError> {
        Ok(self
            .generate(sections)?
            .iter()
            .map(|palette| palette.css(format))
            .collect())
    }

    /// Wrap the declarations in a rule for the given selector.
    ///
    /// ```
    /// # use chromaramp::palette::PaletteGenerator;
    /// let css = PaletteGenerator::wrap_css(":root", "  --color-x-100: #000000;\n");
    /// assert_eq!(css, ":root {\n  --color-x-100: #000000;\n}");
    /// ```
    pub fn wrap_css(selector: &str, body: &str) -> String {
        format!("{} {{\n{}}}", selector, body)
    }
}

#[cfg(test)]
mod test {
    use super::PaletteGenerator;
    use crate::error::ColorFormatError;
    use crate::palette::{GenerationStrategy, PercentageValues, Section, Slot};
    use crate::{Color, ColorFormat, ColorSpace};
    use std::str::FromStr;

    /// Assert that the two hashed hexadecimal colors differ by at most one
    /// per channel.
    fn assert_hex_close(actual: &str, expected: &str) {
        let a = Color::from_str(actual).unwrap().to_24bit();
        let e = Color::from_str(expected).unwrap().to_24bit();
        for index in 0..3 {
            assert!(
                (a[index] as i16 - e[index] as i16).abs() <= 1,
                "colors differ:\n{}\n{}",
                actual,
                expected
            );
        }
    }

    fn hex_values(palette: &crate::palette::Palette, contrast: bool) -> Vec<String> {
        palette
            .entries()
            .iter()
            .filter(|entry| entry.is_contrast() == contrast)
            .map(|entry| entry.value(ColorFormat::Hex))
            .collect()
    }

    #[test]
    fn test_end_to_end() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::with_strategy(GenerationStrategy::FixedStep);
        let section = Section::new("primary", "#3366ff");
        let palette = generator.generate_section(&section)?.unwrap();

        let names: Vec<_> = palette
            .entries()
            .iter()
            .map(|entry| entry.variable_name().to_owned())
            .collect();
        let mut expected: Vec<_> = (1..=9)
            .map(|step| format!("--color-primary-{}00", step))
            .collect();
        expected.extend((1..=9).map(|step| format!("--color-primary-contrast-{}00", step)));
        assert_eq!(names, expected);

        let ramp = hex_values(&palette, false);
        assert_eq!(ramp[4], "#3366ff");
        for (actual, expected) in ramp.iter().zip([
            "#00138e", "#0024a9", "#0038c5", "#004ee2", "#3366ff", "#5e7fff", "#8199ff",
            "#a2b3ff", "#c2cfff",
        ]) {
            assert_hex_close(actual, expected);
        }

        let contrast = hex_values(&palette, true);
        for (actual, expected) in contrast.iter().zip([
            "#cad5ff", "#aabaff", "#899fff", "#6785ff", "#3f6cff", "#0054e9", "#003dcc",
            "#0029b0", "#001794",
        ]) {
            assert_hex_close(actual, expected);
        }

        Ok(())
    }

    #[test]
    fn test_fixed_step_symmetry() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::with_strategy(GenerationStrategy::FixedStep);
        let gray = Section::new("gray", "#777777").with_contrast(false);
        let base = Color::from_str("#777777")?.to(ColorSpace::Lab)[0];

        let forward = generator.generate_section(&gray)?.unwrap();
        let backward = generator.generate_section(&gray.clone().inverted(true))?.unwrap();
        assert_eq!(forward.len(), 9);

        let lightness = |palette: &crate::palette::Palette, index: usize| {
            palette.entries()[index].color().to(ColorSpace::Lab)[0]
        };
        assert_eq!(lightness(&forward, 4), base);
        assert_eq!(lightness(&backward, 4), base);
        assert_eq!(lightness(&forward, 0), base - 40.0);
        assert_eq!(lightness(&forward, 8), base + 40.0);
        assert_eq!(lightness(&backward, 0), base + 40.0);
        assert_eq!(lightness(&backward, 8), base - 40.0);

        assert_eq!(forward.entries()[4].value(ColorFormat::Hex), "#777777");
        assert_hex_close(&forward.entries()[0].value(ColorFormat::Hex), "#1c1c1c");
        assert_hex_close(&forward.entries()[8].value(ColorFormat::Hex), "#e2e2e2");
        assert!(forward.entries().iter().all(|entry| entry.percentage().is_none()));
        Ok(())
    }

    #[test]
    fn test_fixed_step_edges() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::with_strategy(GenerationStrategy::FixedStep);
        let section = Section::new("primary", "#3366ff").with_edges(true);
        let palette = generator.generate_section(&section)?.unwrap();
        assert_eq!(palette.len(), 22);

        let entries = palette.entries();
        assert_eq!(entries[0].variable_name(), "--color-primary-0");
        assert_eq!(entries[0].value(ColorFormat::Hex), "#3366ff");
        assert_eq!(entries[10].variable_name(), "--color-primary-1000");
        assert_hex_close(&entries[10].value(ColorFormat::Hex), "#e6eeff");
        assert_eq!(entries[11].variable_name(), "--color-primary-contrast-0");
        assert_hex_close(&entries[11].value(ColorFormat::Hex), "#e6eeff");
        assert_eq!(entries[21].variable_name(), "--color-primary-contrast-1000");
        assert_hex_close(&entries[21].value(ColorFormat::Hex), "#000076");
        assert_eq!(entries[21].slot(), Slot::Edge1000);
        Ok(())
    }

    #[test]
    fn test_edges_need_fixed_step() -> Result<(), ColorFormatError> {
        let section = Section::new("primary", "#3366ff").with_edges(true);
        for strategy in [
            GenerationStrategy::LabPercentage,
            GenerationStrategy::HslPercentage,
        ] {
            let palette = PaletteGenerator::with_strategy(strategy)
                .generate_section(&section)?
                .unwrap();
            assert_eq!(palette.len(), 18);
            assert!(palette.entries().iter().all(|entry| !entry.slot().is_edge()));
        }
        Ok(())
    }

    #[test]
    fn test_lab_percentage_complement() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::with_strategy(GenerationStrategy::LabPercentage);
        for inverse in [false, true] {
            let section = Section::new("accent", "#ff0000").inverted(inverse);
            let palette = generator.generate_section(&section)?.unwrap();
            let ramp: Vec<_> = palette.ramp().collect();
            let contrast: Vec<_> = palette.contrast().collect();
            assert_eq!(ramp.len(), 9);
            assert_eq!(contrast.len(), 9);

            for (index, (r, c)) in ramp.iter().zip(contrast.iter()).enumerate() {
                let rl = r.color()[0];
                let cl = c.color()[0];
                assert_eq!(rl + cl, 100.0);
                assert_eq!(r.percentage(), Some(rl));

                let expected = 5.0 + 10.0 * index as crate::Float;
                assert_eq!(if inverse { cl } else { rl }, expected);
            }
        }
        Ok(())
    }

    #[test]
    fn test_hsl_percentage_reversal() -> Result<(), ColorFormatError> {
        let values = PercentageValues::new([3.0, 10.0, 22.0, 35.0, 50.0, 61.0, 77.0, 90.0, 98.0]);
        let inverted = PaletteGenerator::new(GenerationStrategy::HslPercentage, values);
        let reversed = PaletteGenerator::new(GenerationStrategy::HslPercentage, values.reversed());

        let section = Section::new("brand", "#a1d2ae");
        let one = inverted.generate_section(&section.clone().inverted(true))?.unwrap();
        let two = reversed.generate_section(&section)?.unwrap();
        assert_eq!(one, two);
        assert_eq!(one.entries()[0].percentage(), Some(98.0));
        assert_eq!(one.entries()[9].percentage(), Some(2.0));
        Ok(())
    }

    #[test]
    fn test_hsl_percentage() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::default();
        let palette = generator
            .generate_section(&Section::new("primary", "#3366ff").with_contrast(false))?
            .unwrap();
        for (actual, expected) in hex_values(&palette, false).iter().zip([
            "#000619", "#00134d", "#002080", "#002db2", "#0039e6", "#1a53ff", "#4d79ff",
            "#809fff", "#b2c6ff",
        ]) {
            assert_hex_close(actual, expected);
        }
        Ok(())
    }

    #[test]
    fn test_extrapolation() -> Result<(), ColorFormatError> {
        let values = PercentageValues::new([-10.0, 0.0, 10.0, 30.0, 50.0, 70.0, 90.0, 100.0, 120.0]);
        for strategy in [
            GenerationStrategy::LabPercentage,
            GenerationStrategy::HslPercentage,
        ] {
            let generator = PaletteGenerator::new(strategy, values);
            let palette = generator
                .generate_section(&Section::new("x", "#3366ff").with_contrast(false))?
                .unwrap();
            let entries = palette.entries();
            assert_eq!(entries[0].percentage(), Some(-10.0));
            assert_eq!(entries[8].percentage(), Some(120.0));
            assert_eq!(entries[8].value(ColorFormat::Hex), "#ffffff");
            assert_eq!(entries[8].value(ColorFormat::Rgb), "rgb(255, 255, 255)");
            for entry in entries {
                let hex = entry.value(ColorFormat::Hex);
                assert_eq!(hex.len(), 7);
                assert!(hex[1..].bytes().all(|b| b.is_ascii_hexdigit()));
                assert!(!entry.value(ColorFormat::Hsl).contains('-'));
            }
        }
        Ok(())
    }

    #[test]
    fn test_skip_incomplete() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::default();
        let sections = [
            Section::new("", "#fff"),
            Section::new("x", ""),
            Section::new("y", "#fff").with_contrast(false),
        ];

        assert_eq!(generator.generate_section(&sections[0])?, None);
        assert_eq!(generator.generate_section(&sections[1])?, None);

        let palettes = generator.generate(&sections)?;
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].name(), "y");

        let css = generator.generate_css(&sections[..2], ColorFormat::Hex)?;
        assert_eq!(css, "");
        Ok(())
    }

    #[test]
    fn test_blank_fields() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::with_strategy(GenerationStrategy::FixedStep);

        let palette = generator
            .generate_section(&Section::new(" x ", "#3366ff").with_contrast(false))?
            .unwrap();
        assert_eq!(palette.name(), " x ");
        assert_eq!(palette.entries()[0].variable_name(), "--color- x -100");

        assert!(generator
            .generate_section(&Section::new(" ", "#ffffff"))?
            .is_some());
        assert_eq!(
            generator.generate_section(&Section::new("x", "   ")),
            Err(ColorFormatError::UnknownFormat)
        );
        Ok(())
    }

    #[test]
    fn test_fixed_step_inverse_contrast() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::with_strategy(GenerationStrategy::FixedStep);
        let section = Section::new("gray", "#777777").inverted(true).with_edges(true);
        let base = Color::from_str("#777777")?.to(ColorSpace::Lab)[0];

        let palette = generator.generate_section(&section)?.unwrap();
        assert_eq!(palette.len(), 22);

        let ramp: Vec<_> = palette.ramp().collect();
        let contrast: Vec<_> = palette.contrast().collect();
        assert_eq!(ramp[0].slot(), Slot::Edge0);
        assert_eq!(ramp[0].color()[0], base);
        assert_eq!(ramp[1].slot(), Slot::Step(1));
        assert_eq!(ramp[1].color()[0], base + 40.0);
        assert_eq!(ramp[9].color()[0], base - 40.0);
        assert_eq!(ramp[10].slot(), Slot::Edge1000);
        assert_eq!(ramp[10].color()[0], 100.0);

        assert_eq!(contrast[0].color()[0], 100.0);
        assert_eq!(contrast[1].variable_name(), "--color-gray-contrast-100");
        assert_eq!(contrast[1].color()[0], 100.0 - (base + 40.0));
        assert_eq!(contrast[9].color()[0], 100.0 - (base - 40.0));
        assert_eq!(contrast[10].color()[0], 0.0);
        Ok(())
    }

    #[test]
    fn test_invalid_color_fails() {
        let generator = PaletteGenerator::default();
        let sections = [Section::new("ok", "#3366ff"), Section::new("bad", "#33")];
        assert_eq!(
            generator.generate(&sections),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert!(generator
            .generate_css(&sections, ColorFormat::Rgb)
            .is_err());
    }

    #[test]
    fn test_css_order() -> Result<(), ColorFormatError> {
        let generator = PaletteGenerator::with_strategy(GenerationStrategy::LabPercentage);
        let sections = [
            Section::new("b", "#00ff00").with_contrast(false),
            Section::new("a", "#0000ff").with_contrast(false),
        ];
        let css = generator.generate_css(&sections, ColorFormat::Hsl)?;
        let names: Vec<_> = css
            .lines()
            .map(|line| line.trim().split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(names.len(), 18);
        assert_eq!(names[0], "--color-b-100");
        assert_eq!(names[9], "--color-a-100");
        assert!(css.lines().all(|line| line.starts_with("  --color-")
            && line.ends_with(';')
            && line.contains(": hsl(")));
        Ok(())
    }
}
