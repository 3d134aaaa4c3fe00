use serde::Deserialize;

use crate::error::FormatError;
use crate::locale::Locale;

/// How the numeric input to [`crate::humanize`] is interpreted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub enum InputUnit {
    /// Values of 1000 or more are milliseconds, smaller values are seconds.
    /// Best effort only: prefer an explicit unit when the caller knows it.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "ms")]
    Millis,
    #[serde(rename = "s")]
    Seconds,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FormatOptions {
    /// Render a single "ago" phrase instead of an exact breakdown.
    pub relative: bool,
    pub unit: InputUnit,
    pub locale: Locale,
    /// Maximum number of segments in exact mode.
    pub precision: usize,
    /// Abbreviated labels, no spaces.
    pub short: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            relative: false,
            unit: InputUnit::Auto,
            locale: Locale::En,
            precision: 2,
            short: false,
        }
    }
}

/// Options table as written in TOML. The locale stays a raw tag so an unknown
/// one surfaces as [`FormatError::UnsupportedLocale`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawOptions {
    relative: Option<bool>,
    unit: Option<InputUnit>,
    locale: Option<String>,
    precision: Option<usize>,
    short: Option<bool>,
}

impl FormatOptions {
    /// Parse options from a TOML table, e.g. a section of a host config file.
    ///
    /// # Errors
    /// Returns [`FormatError::OptionsParse`] when the text is not a valid options
    /// table, [`FormatError::UnsupportedLocale`] for an unknown locale tag, or
    /// [`FormatError::InvalidPrecision`] when `precision` is zero.
    pub fn from_toml_str(text: &str) -> Result<Self, FormatError> {
        let raw: RawOptions =
            toml::from_str(text).map_err(|source| FormatError::OptionsParse { source })?;
        let defaults = Self::default();
        let locale = match raw.locale {
            Some(tag) => tag.parse()?,
            None => defaults.locale,
        };
        let opts = Self {
            relative: raw.relative.unwrap_or(defaults.relative),
            unit: raw.unit.unwrap_or(defaults.unit),
            locale,
            precision: raw.precision.unwrap_or(defaults.precision),
            short: raw.short.unwrap_or(defaults.short),
        };
        opts.validate()?;
        Ok(opts)
    }

    /// # Errors
    /// Returns [`FormatError::InvalidPrecision`] when `precision` is zero.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.precision == 0 {
            return Err(FormatError::InvalidPrecision {
                precision: self.precision,
            });
        }
        Ok(())
    }
}
