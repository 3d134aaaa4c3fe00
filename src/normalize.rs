use crate::error::FormatError;
use crate::types::InputUnit;

const MS_PER_SEC: f64 = 1000.0;

/// Convert a raw duration to whole seconds according to `unit`.
///
/// Fractional seconds are truncated and values past `u64::MAX` saturate.
///
/// # Errors
/// Returns [`FormatError::InvalidDuration`] for negative or non-finite input.
pub fn total_seconds(duration: f64, unit: InputUnit) -> Result<u64, FormatError> {
    if !duration.is_finite() || duration < 0.0 {
        tracing::debug!(duration, "rejecting duration");
        return Err(FormatError::InvalidDuration { value: duration });
    }
    let secs = match unit {
        InputUnit::Seconds => duration,
        InputUnit::Millis => duration / MS_PER_SEC,
        InputUnit::Auto if duration >= MS_PER_SEC => {
            tracing::debug!(duration, "auto unit: treating input as milliseconds");
            duration / MS_PER_SEC
        }
        InputUnit::Auto => duration,
    };
    Ok(whole_seconds(secs))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_seconds(secs: f64) -> u64 {
    secs.trunc() as u64
}
