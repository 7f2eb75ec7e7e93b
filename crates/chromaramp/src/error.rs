//! Utility module with chromaramp's errors.

use thiserror::Error;

/// An erroneous color format.
///
/// Chromaramp only reads colors in hashed hexadecimal notation, i.e., `#rgb`
/// or `#rrggbb`. Anything else is rejected with one of the following variants
/// instead of being turned into not-a-number coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    #[error("color format should start with `#`")]
    UnknownFormat,

    /// A color format with an unexpected number of characters. For example,
    /// `#00` is missing a hexadecimal digit and `#00000` is missing two.
    #[error("color format should have 3 or 6 hexadecimal digits")]
    UnexpectedCharacters,

    /// A color format with the correct length but a digit that isn't
    /// hexadecimal. For example, `#efg` has a malformed third coordinate.
    #[error("color format coordinates should be hexadecimal integers but are not")]
    MalformedHex,
}

/// An error while reading or writing a palette configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or does not have the expected
    /// structure, e.g., a percentage array with other than nine entries.
    #[error("could not parse palette configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// The configuration could not be serialized.
    #[error("could not serialize palette configuration: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<ConfigError> for std::io::Error {
    fn from(value: ConfigError) -> Self {
        match value {
            ConfigError::Parse(_) => std::io::Error::new(std::io::ErrorKind::InvalidData, value),
            ConfigError::Serialize(_) => std::io::Error::other(value),
        }
    }
}
