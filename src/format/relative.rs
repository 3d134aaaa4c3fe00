use crate::locale::Locale;
use crate::unit::TimeUnit;

const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;
const DAYS_PER_MONTH: u64 = 30;
const MONTHS_PER_YEAR: u64 = 12;

/// Coarsest single unit, e.g. `"ago 3 days"` or `"il y a 2 heures"`.
#[must_use]
pub fn format_relative(total_seconds: u64, locale: Locale) -> String {
    let bundle = locale.bundle();
    if total_seconds == 0 {
        return bundle.just_now.to_string();
    }
    let (count, unit) = coarsest(total_seconds);
    format!("{} {count} {}", bundle.ago, bundle.label(unit, count))
}

fn coarsest(secs: u64) -> (u64, TimeUnit) {
    if secs < TimeUnit::Minutes.seconds() {
        return (secs, TimeUnit::Seconds);
    }
    let mins = secs / TimeUnit::Minutes.seconds();
    if mins < MINUTES_PER_HOUR {
        return (mins, TimeUnit::Minutes);
    }
    let hrs = mins / MINUTES_PER_HOUR;
    if hrs < HOURS_PER_DAY {
        return (hrs, TimeUnit::Hours);
    }
    let days = hrs / HOURS_PER_DAY;
    if days < DAYS_PER_MONTH {
        return (days, TimeUnit::Days);
    }
    let months = days / DAYS_PER_MONTH;
    if months < MONTHS_PER_YEAR {
        return (months, TimeUnit::Months);
    }
    (months / MONTHS_PER_YEAR, TimeUnit::Years)
}
