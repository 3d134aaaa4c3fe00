use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::FormatError;
use crate::unit::TimeUnit;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

#[derive(Debug)]
pub struct UnitNames {
    pub singular: &'static str,
    pub plural: &'static str,
    pub short: &'static str,
}

/// Strings for one locale. `units` is indexed in ladder order, so every unit
/// has a singular, plural and abbreviated form.
#[derive(Debug)]
pub struct LocaleBundle {
    units: [UnitNames; 6],
    pub ago: &'static str,
    pub just_now: &'static str,
}

static EN: LocaleBundle = LocaleBundle {
    units: [
        UnitNames { singular: "year", plural: "years", short: "y" },
        UnitNames { singular: "month", plural: "months", short: "mo" },
        UnitNames { singular: "day", plural: "days", short: "d" },
        UnitNames { singular: "hour", plural: "hours", short: "h" },
        UnitNames { singular: "minute", plural: "minutes", short: "m" },
        UnitNames { singular: "second", plural: "seconds", short: "s" },
    ],
    ago: "ago",
    just_now: "just now",
};

static FR: LocaleBundle = LocaleBundle {
    units: [
        UnitNames { singular: "an", plural: "ans", short: "a" },
        UnitNames { singular: "mois", plural: "mois", short: "mo" },
        UnitNames { singular: "jour", plural: "jours", short: "j" },
        UnitNames { singular: "heure", plural: "heures", short: "h" },
        UnitNames { singular: "minute", plural: "minutes", short: "m" },
        UnitNames { singular: "seconde", plural: "secondes", short: "s" },
    ],
    ago: "il y a",
    just_now: "à l'instant",
};

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    #[must_use]
    pub fn bundle(self) -> &'static LocaleBundle {
        match self {
            Self::En => &EN,
            Self::Fr => &FR,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

impl LocaleBundle {
    #[must_use]
    pub fn names(&self, unit: TimeUnit) -> &UnitNames {
        &self.units[unit.index()]
    }

    /// Plural only above one; zero and one both take the singular form.
    #[must_use]
    pub fn label(&self, unit: TimeUnit, count: u64) -> &'static str {
        let names = self.names(unit);
        if count > 1 { names.plural } else { names.singular }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    /// Matches on the primary language subtag, case-insensitively: `"fr-CA"`
    /// and `"FR"` both select French.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let primary = trimmed.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(primary))
            .ok_or_else(|| FormatError::UnsupportedLocale {
                tag: trimmed.to_string(),
            })
    }
}

impl TryFrom<String> for Locale {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::LADDER;

    #[test]
    fn every_locale_names_every_unit() {
        for locale in Locale::ALL {
            let bundle = locale.bundle();
            assert!(!bundle.ago.is_empty());
            assert!(!bundle.just_now.is_empty());
            for unit in LADDER {
                let names = bundle.names(unit);
                assert!(!names.singular.is_empty(), "{locale} {unit:?}");
                assert!(!names.plural.is_empty(), "{locale} {unit:?}");
                assert!(!names.short.is_empty(), "{locale} {unit:?}");
            }
        }
    }

    #[test]
    fn label_pluralizes_above_one() {
        let en = Locale::En.bundle();
        assert_eq!(en.label(TimeUnit::Hours, 0), "hour");
        assert_eq!(en.label(TimeUnit::Hours, 1), "hour");
        assert_eq!(en.label(TimeUnit::Hours, 2), "hours");
        let fr = Locale::Fr.bundle();
        assert_eq!(fr.label(TimeUnit::Years, 1), "an");
        assert_eq!(fr.label(TimeUnit::Years, 3), "ans");
        assert_eq!(fr.label(TimeUnit::Months, 3), "mois");
    }

    #[test]
    fn french_abbreviations_cover_days_and_years() {
        let fr = Locale::Fr.bundle();
        assert_eq!(fr.names(TimeUnit::Days).short, "j");
        assert_eq!(fr.names(TimeUnit::Years).short, "a");
        assert_eq!(fr.names(TimeUnit::Months).short, "mo");
    }

    #[test]
    fn parse_accepts_region_and_case() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!(" fr-CA ".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!("en_GB".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedLocale { ref tag } if tag == "de"));
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn display_round_trips_tag() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
