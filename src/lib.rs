#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod error;
mod format;
mod locale;
mod normalize;
mod system;
mod types;
mod unit;

pub use error::FormatError;
pub use format::{
    Segment, decompose, format_exact, format_relative, humanize, humanize_duration,
    humanize_since,
};
pub use locale::{Locale, LocaleBundle, UnitNames};
pub use normalize::total_seconds;
pub use system::{Clock, DefaultClock};
pub use types::{FormatOptions, InputUnit};
pub use unit::{LADDER, TimeUnit};
