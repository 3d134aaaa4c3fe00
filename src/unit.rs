const SEC_PER_MIN: u64 = 60;
const SEC_PER_HOUR: u64 = 60 * 60;
const SEC_PER_DAY: u64 = 60 * 60 * 24;
const SEC_PER_MONTH: u64 = SEC_PER_DAY * 30;
const SEC_PER_YEAR: u64 = SEC_PER_DAY * 365;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TimeUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

/// Units used for decomposition, largest first.
pub const LADDER: [TimeUnit; 6] = [
    TimeUnit::Years,
    TimeUnit::Months,
    TimeUnit::Days,
    TimeUnit::Hours,
    TimeUnit::Minutes,
    TimeUnit::Seconds,
];

impl TimeUnit {
    #[must_use]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Years => SEC_PER_YEAR,
            Self::Months => SEC_PER_MONTH,
            Self::Days => SEC_PER_DAY,
            Self::Hours => SEC_PER_HOUR,
            Self::Minutes => SEC_PER_MIN,
            Self::Seconds => 1,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Years => 0,
            Self::Months => 1,
            Self::Days => 2,
            Self::Hours => 3,
            Self::Minutes => 4,
            Self::Seconds => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_strictly_descending() {
        for pair in LADDER.windows(2) {
            assert!(pair[0].seconds() > pair[1].seconds());
        }
    }

    #[test]
    fn ladder_sizes() {
        assert_eq!(TimeUnit::Years.seconds(), 31_536_000);
        assert_eq!(TimeUnit::Months.seconds(), 2_592_000);
        assert_eq!(TimeUnit::Days.seconds(), 86_400);
        assert_eq!(TimeUnit::Hours.seconds(), 3_600);
        assert_eq!(TimeUnit::Minutes.seconds(), 60);
        assert_eq!(TimeUnit::Seconds.seconds(), 1);
    }

    #[test]
    fn index_matches_ladder_position() {
        for (i, unit) in LADDER.iter().enumerate() {
            assert_eq!(unit.index(), i);
        }
    }
}
