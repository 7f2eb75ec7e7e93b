use serde::{Deserialize, Serialize};

use super::Slot;
use crate::{ColorSpace, Float};

/// The nine lightness control points shared by all sections.
///
/// Each control point is a lightness percentage. Values outside `0..=100`
/// are accepted and extrapolate beyond black and white.
///
/// ```
/// # use chromaramp::palette::PercentageValues;
/// let values = PercentageValues::default();
/// assert_eq!(values[0], 5.0);
/// assert_eq!(values[8], 85.0);
/// assert_eq!(values.reversed()[0], 85.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PercentageValues([Float; 9]);

impl PercentageValues {
    /// The number of control points.
    pub const COUNT: usize = 9;

    /// Create new control points.
    pub const fn new(values: [Float; 9]) -> Self {
        Self(values)
    }

    /// Get the control points in reverse order.
    #[must_use = "method returns new control points and does not mutate original value"]
    pub fn reversed(&self) -> Self {
        let mut values = self.0;
        values.reverse();
        Self(values)
    }

    /// Get an iterator over the control points.
    pub fn iter(&self) -> impl Iterator<Item = Float> + '_ {
        self.0.iter().copied()
    }
}

impl Default for PercentageValues {
    /// Create the default control points `5, 15, 25, ..., 85`.
    fn default() -> Self {
        Self([5.0, 15.0, 25.0, 35.0, 45.0, 55.0, 65.0, 75.0, 85.0])
    }
}

impl From<[Float; 9]> for PercentageValues {
    fn from(values: [Float; 9]) -> Self {
        Self(values)
    }
}

impl AsRef<[Float; 9]> for PercentageValues {
    fn as_ref(&self) -> &[Float; 9] {
        &self.0
    }
}

impl std::ops::Index<usize> for PercentageValues {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A lightness target for one palette entry.
///
/// Lightness is a percentage for all strategies, even for HSL, whose
/// lightness coordinate has unit range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Stop {
    pub slot: Slot,
    pub lightness: Float,
    pub percentage: Option<Float>,
}

impl Stop {
    const fn fixed(slot: Slot, lightness: Float) -> Self {
        Self {
            slot,
            lightness,
            percentage: None,
        }
    }

    const fn controlled(slot: Slot, lightness: Float) -> Self {
        Self {
            slot,
            lightness,
            percentage: Some(lightness),
        }
    }
}

/// The lightness targets for a ramp and its contrast block.
#[derive(Clone, Debug, Default)]
pub(crate) struct Stops {
    pub ramp: Vec<Stop>,
    pub contrast: Vec<Stop>,
}

/// A section's flags as far as lightness targets are concerned.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Flags {
    pub contrast: bool,
    pub inverse: bool,
    pub edges: bool,
}

// --------------------------------------------------------------------------------------------------------------------

/// The policy for deriving a ramp from a base color.
///
/// All three strategies vary only lightness while holding the base color's
/// other coordinates fixed. They differ in the color space they operate in
/// and in how they pick lightness values.
///
/// # Fixed Step
///
/// Steps through CIELAB lightness in increments of 10, centered on the base
/// color: slot 500 is the base color itself, slot 100 is 40 darker, and slot
/// 900 is 40 lighter. Inversion flips the direction. Optional edge entries
/// pin slot 0 to the base lightness and slot 1000 to a lightness of 100.
/// Contrast entries have lightness `100 - L`.
///
/// # Lab Percentage
///
/// Uses the shared [`PercentageValues`] as CIELAB lightness. Inversion
/// mirrors each control point to `100 - p`. Contrast entries have the
/// complementary lightness, so that ramp and contrast lightness always add
/// up to 100.
///
/// # HSL Percentage
///
/// Uses the shared [`PercentageValues`] as HSL lightness. Inversion reverses
/// the order of the control points instead of mirroring them. Contrast
/// entries have lightness `100 - p`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationStrategy {
    /// Fixed steps of 10 in CIELAB lightness around the base color.
    FixedStep,
    /// Shared control points as CIELAB lightness.
    LabPercentage,
    /// Shared control points as HSL lightness.
    #[default]
    HslPercentage,
}

impl GenerationStrategy {
    /// Get this strategy's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FixedStep => "fixed-step",
            Self::LabPercentage => "lab-percentage",
            Self::HslPercentage => "hsl-percentage",
        }
    }

    /// Get the color space whose lightness this strategy varies.
    pub const fn space(&self) -> ColorSpace {
        match self {
            Self::FixedStep | Self::LabPercentage => ColorSpace::Lab,
            Self::HslPercentage => ColorSpace::Hsl,
        }
    }

    /// Determine whether this strategy supports edge entries.
    pub const fn has_edges(&self) -> bool {
        matches!(self, Self::FixedStep)
    }

    /// Determine whether this strategy uses the shared control points.
    pub const fn uses_percentages(&self) -> bool {
        !matches!(self, Self::FixedStep)
    }

    /// Compute the lightness targets.
    ///
    /// The base lightness is a percentage and only matters for the fixed
    /// step strategy.
    pub(crate) fn stops(
        &self,
        base_lightness: Float,
        flags: Flags,
        percentages: &PercentageValues,
    ) -> Stops {
        match self {
            Self::FixedStep => fixed_step(base_lightness, flags),
            Self::LabPercentage => lab_percentage(flags, percentages),
            Self::HslPercentage => hsl_percentage(flags, percentages),
        }
    }
}

fn fixed_step(base: Float, flags: Flags) -> Stops {
    let mut stops = Stops::default();

    if flags.edges {
        stops.ramp.push(Stop::fixed(Slot::Edge0, base));
    }
    for step in 1..=9_u8 {
        let offset = (step as Float - 5.0) * 10.0;
        let lightness = if flags.inverse {
            base - offset
        } else {
            base + offset
        };
        stops.ramp.push(Stop::fixed(Slot::Step(step), lightness));
    }
    if flags.edges {
        stops.ramp.push(Stop::fixed(Slot::Edge1000, 100.0));
    }

    if flags.contrast {
        stops.contrast = stops
            .ramp
            .iter()
            .map(|stop| match stop.slot {
                Slot::Edge0 => Stop::fixed(Slot::Edge0, 100.0),
                Slot::Edge1000 => Stop::fixed(Slot::Edge1000, 0.0),
                slot => Stop::fixed(slot, 100.0 - stop.lightness),
            })
            .collect();
    }

    stops
}

fn lab_percentage(flags: Flags, percentages: &PercentageValues) -> Stops {
    let mut stops = Stops::default();

    for (step, percentage) in (1..=9_u8).zip(percentages.iter()) {
        let slot = Slot::Step(step);
        let (ramp, contrast) = if flags.inverse {
            (100.0 - percentage, percentage)
        } else {
            (percentage, 100.0 - percentage)
        };

        stops.ramp.push(Stop::controlled(slot, ramp));
        if flags.contrast {
            stops.contrast.push(Stop::controlled(slot, contrast));
        }
    }

    stops
}

fn hsl_percentage(flags: Flags, percentages: &PercentageValues) -> Stops {
    let values = if flags.inverse {
        percentages.reversed()
    } else {
        *percentages
    };

    let mut stops = Stops::default();
    for (step, value) in (1..=9_u8).zip(values.iter()) {
        let slot = Slot::Step(step);
        stops.ramp.push(Stop::controlled(slot, value));
        if flags.contrast {
            stops.contrast.push(Stop::controlled(slot, 100.0 - value));
        }
    }

    stops
}

impl std::str::FromStr for GenerationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed-step" => Ok(Self::FixedStep),
            "lab-percentage" => Ok(Self::LabPercentage),
            "hsl-percentage" => Ok(Self::HslPercentage),
            other => Err(format!("unknown generation strategy `{}`", other)),
        }
    }
}

impl std::fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
