use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct DefaultClock;
impl Clock for DefaultClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Whole seconds from `then` until `now`; timestamps in the future give 0.
pub(crate) fn elapsed_seconds(now: DateTime<Utc>, then: DateTime<Utc>) -> u64 {
    let diff = now.signed_duration_since(then);
    diff.num_seconds().try_into().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn elapsed_counts_whole_seconds() {
        let then = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let now = then + TimeDelta::milliseconds(90_500);
        assert_eq!(elapsed_seconds(now, then), 90);
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let then = now + TimeDelta::seconds(30);
        assert_eq!(elapsed_seconds(now, then), 0);
    }
}
