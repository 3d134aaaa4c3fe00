mod exact;
mod relative;

pub use exact::{Segment, decompose, format_exact};
pub use relative::format_relative;

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::FormatError;
use crate::normalize::total_seconds;
use crate::system::{Clock, elapsed_seconds};
use crate::types::FormatOptions;

/// Format a numeric duration according to `opts`.
///
/// The input is interpreted per `opts.unit`; see [`crate::InputUnit::Auto`] for
/// the caveats of the default.
///
/// # Errors
/// Returns [`FormatError::InvalidDuration`] for negative or non-finite input and
/// [`FormatError::InvalidPrecision`] when `opts.precision` is zero.
pub fn humanize(duration: f64, opts: &FormatOptions) -> Result<String, FormatError> {
    opts.validate()?;
    let secs = total_seconds(duration, opts.unit)?;
    Ok(render(secs, opts))
}

/// Format a [`Duration`] as whole seconds. `opts.unit` is ignored.
///
/// # Errors
/// Returns [`FormatError::InvalidPrecision`] when `opts.precision` is zero.
pub fn humanize_duration(dur: Duration, opts: &FormatOptions) -> Result<String, FormatError> {
    opts.validate()?;
    Ok(render(dur.as_secs(), opts))
}

/// Format the time elapsed since `then`, measured against `clock`, in whole
/// seconds. `opts.unit` is ignored.
///
/// # Errors
/// Returns [`FormatError::InvalidPrecision`] when `opts.precision` is zero.
pub fn humanize_since(
    then: DateTime<Utc>,
    clock: &dyn Clock,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    opts.validate()?;
    Ok(render(elapsed_seconds(clock.now(), then), opts))
}

fn render(secs: u64, opts: &FormatOptions) -> String {
    if opts.relative {
        format_relative(secs, opts.locale)
    } else {
        format_exact(secs, opts.locale, opts.precision, opts.short)
    }
}
