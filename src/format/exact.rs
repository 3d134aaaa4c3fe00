use crate::locale::Locale;
use crate::unit::{LADDER, TimeUnit};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    pub value: u64,
    pub unit: TimeUnit,
}

/// Break `total_seconds` into at most `precision` non-zero segments, largest
/// unit first. Whatever is left below the last emitted unit is dropped.
#[must_use]
pub fn decompose(total_seconds: u64, precision: usize) -> Vec<Segment> {
    let mut remainder = total_seconds;
    let mut segments = Vec::with_capacity(precision.min(LADDER.len()));
    for unit in LADDER {
        if segments.len() >= precision {
            break;
        }
        let size = unit.seconds();
        let value = remainder / size;
        if value > 0 {
            remainder %= size;
            segments.push(Segment { value, unit });
        }
    }
    tracing::trace!(total_seconds, precision, ?segments, "decomposed");
    segments
}

/// Exact breakdown such as `"1 hour 1 minute"`, or `"1h1m"` in short mode.
/// Short mode drops the space between segments as well as before each label,
/// so 90 seconds renders `"1m30s"` rather than `"1m 30s"`.
/// Zero renders as the empty string.
#[must_use]
pub fn format_exact(total_seconds: u64, locale: Locale, precision: usize, short: bool) -> String {
    let bundle = locale.bundle();
    let parts: Vec<String> = decompose(total_seconds, precision)
        .into_iter()
        .map(|seg| {
            if short {
                format!("{}{}", seg.value, bundle.names(seg.unit).short)
            } else {
                format!("{} {}", seg.value, bundle.label(seg.unit, seg.value))
            }
        })
        .collect();
    let sep = if short { "" } else { " " };
    parts.join(sep)
}
