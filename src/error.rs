use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid duration {value}: must be finite and non-negative")]
    InvalidDuration { value: f64 },

    #[error("unsupported locale '{tag}' (expected one of: en, fr)")]
    UnsupportedLocale { tag: String },

    #[error("invalid precision {precision}: at least one segment is required")]
    InvalidPrecision { precision: usize },

    #[error("failed to parse format options: {source}")]
    OptionsParse {
        #[source]
        source: toml::de::Error,
    },
}
