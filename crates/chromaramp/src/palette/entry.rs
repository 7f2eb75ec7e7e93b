use crate::{Color, ColorFormat, Float};

/// The position of an entry within a ramp.
///
/// Steps are numbered `1..=9` and render as `100` through `900`. The two
/// edges render as `0` and `1000`.
///
/// ```
/// # use chromaramp::palette::Slot;
/// assert_eq!(Slot::Edge0.to_string(), "0");
/// assert_eq!(Slot::Step(3).to_string(), "300");
/// assert_eq!(Slot::Edge1000.value(), 1000);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The leading edge.
    Edge0,
    /// One of the nine regular steps, counting from 1.
    Step(u8),
    /// The trailing edge.
    Edge1000,
}

impl Slot {
    /// Get the numeric value used in variable names.
    pub const fn value(&self) -> u16 {
        match *self {
            Self::Edge0 => 0,
            Self::Step(step) => step as u16 * 100,
            Self::Edge1000 => 1000,
        }
    }

    /// Determine whether this slot is an edge.
    pub const fn is_edge(&self) -> bool {
        !matches!(*self, Self::Step(_))
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A generated color together with its CSS custom property name.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    variable_name: String,
    slot: Slot,
    color: Color,
    percentage: Option<Float>,
    contrast: bool,
}

impl PaletteEntry {
    /// Create a new palette entry for the named section.
    ///
    /// The variable name is `--color-{name}-{slot}` for ramp entries and
    /// `--color-{name}-contrast-{slot}` for contrast entries.
    pub fn new(
        name: &str,
        slot: Slot,
        color: Color,
        percentage: Option<Float>,
        contrast: bool,
    ) -> Self {
        let variable_name = if contrast {
            format!("--color-{}-contrast-{}", name, slot)
        } else {
            format!("--color-{}-{}", name, slot)
        };

        Self {
            variable_name,
            slot,
            color,
            percentage,
            contrast,
        }
    }

    /// Get the CSS custom property name, including the leading dashes.
    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    /// Get the slot.
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Get the color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Get the lightness percentage this entry was generated at.
    ///
    /// Only strategies with control points report a percentage.
    pub fn percentage(&self) -> Option<Float> {
        self.percentage
    }

    /// Determine whether this entry belongs to the contrast block.
    pub fn is_contrast(&self) -> bool {
        self.contrast
    }

    /// Encode the color in the given format.
    pub fn value(&self, format: ColorFormat) -> String {
        self.color.encode(format)
    }

    /// Render this entry as an indented CSS declaration, including the
    /// trailing newline.
    ///
    /// ```
    /// # use chromaramp::{Color, ColorFormat};
    /// # use chromaramp::palette::{PaletteEntry, Slot};
    /// let entry = PaletteEntry::new(
    ///     "primary", Slot::Step(5), Color::from_24bit(0x33, 0x66, 0xff), None, false);
    /// assert_eq!(
    ///     entry.css_line(ColorFormat::Rgb),
    ///     "  --color-primary-500: rgb(51, 102, 255);\n"
    /// );
    /// ```
    pub fn css_line(&self, format: ColorFormat) -> String {
        format!("  {}: {};\n", self.variable_name, self.value(format))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The generated entries for one section.
///
/// Ramp entries come first, followed by contrast entries if any, each block
/// ordered by slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    name: String,
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a new palette.
    pub fn new(name: impl Into<String>, entries: Vec<PaletteEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Get the section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the entries.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an iterator over the ramp entries.
    pub fn ramp(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter().filter(|entry| !entry.is_contrast())
    }

    /// Get an iterator over the contrast entries.
    pub fn contrast(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter().filter(|entry| entry.is_contrast())
    }

    /// Render all entries as CSS declarations.
    pub fn css(&self, format: ColorFormat) -> String {
        self.entries
            .iter()
            .map(|entry| entry.css_line(format))
            .collect()
    }
}

impl AsRef<[PaletteEntry]> for Palette {
    fn as_ref(&self) -> &[PaletteEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod test {
    use super::{Palette, PaletteEntry, Slot};
    use crate::{Color, ColorFormat};

    #[test]
    fn test_variable_names() {
        let color = Color::from_24bit(0, 0, 0);
        let ramp = PaletteEntry::new("brand", Slot::Edge1000, color.clone(), None, false);
        assert_eq!(ramp.variable_name(), "--color-brand-1000");
        assert!(ramp.slot().is_edge());

        let contrast = PaletteEntry::new("brand", Slot::Step(9), color, Some(85.0), true);
        assert_eq!(contrast.variable_name(), "--color-brand-contrast-900");
        assert_eq!(contrast.percentage(), Some(85.0));
        assert!(!contrast.slot().is_edge());
    }

    #[test]
    fn test_palette_css() {
        let entries = vec![
            PaletteEntry::new("a", Slot::Step(1), Color::from_24bit(0, 0, 0), None, false),
            PaletteEntry::new("a", Slot::Step(1), Color::from_24bit(255, 255, 255), None, true),
        ];
        let palette = Palette::new("a", entries);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.ramp().count(), 1);
        assert_eq!(palette.contrast().count(), 1);
        assert_eq!(
            palette.css(ColorFormat::Hex),
            "  --color-a-100: #000000;\n  --color-a-contrast-100: #ffffff;\n"
        );
        assert_eq!(
            palette.css(ColorFormat::Hsl),
            "  --color-a-100: hsl(0, 0%, 0%);\n  --color-a-contrast-100: hsl(0, 0%, 100%);\n"
        );
    }
}
