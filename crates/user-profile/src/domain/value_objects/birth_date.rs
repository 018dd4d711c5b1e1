// crates/user-profile/src/domain/value_objects/birth_date.rs

use chrono::{Datelike, NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_kernel::clock::{Clock, SystemClock};
use shared_kernel::domain::value_objects::ValueObject;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::errors::{ProfileError, Result};

// Année sur 4 chiffres exactement, sans signe ni espace. Mois et jour sur 1 ou 2 chiffres.
static DATE_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub const MIN_AGE: u32 = 20;
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn try_new(date: NaiveDate) -> Result<Self> {
        Self::try_new_at(date, &SystemClock)
    }

    /// Valide la date par rapport à l'horloge fournie
    pub fn try_new_at(date: NaiveDate, clock: &dyn Clock) -> Result<Self> {
        let birth_date = Self(date);
        birth_date.check_at(clock)?;
        Ok(birth_date)
    }

    /// Parse une date `YYYY-MM-DD` (sans validation métier)
    pub fn parse_date(input: &str) -> Result<NaiveDate> {
        let malformed = || ProfileError::MalformedDate {
            input: input.to_owned(),
        };

        // chrono tolère "90", "+1990" ou un espace initial pour %Y : on fige la forme avant
        if !DATE_SHAPE_REGEX.is_match(input) {
            return Err(malformed());
        }

        NaiveDate::parse_from_str(input, Self::FORMAT).map_err(|_| malformed())
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    /// Calcule l'âge exact au calendrier (gère les années bissextiles).
    /// Une référence antérieure à la naissance donne 0 (saturation, jamais d'âge négatif).
    pub fn age_at(&self, reference: NaiveDate) -> u32 {
        let mut age = reference.year() - self.0.year();
        if (reference.month(), reference.day()) < (self.0.month(), self.0.day()) {
            age -= 1;
        }

        age.max(0).unsigned_abs()
    }

    pub fn age_on(&self, clock: &dyn Clock) -> u32 {
        self.age_at(clock.today())
    }

    /// Deux granularités différentes :
    /// - "futur" : la date (à minuit) est comparée à l'instant courant complet
    /// - "trop jeune" : l'âge est calculé sur la date calendaire du jour
    pub fn check_at(&self, clock: &dyn Clock) -> Result<()> {
        let starts_at = self.0.and_time(NaiveTime::MIN).and_utc();
        if starts_at > clock.now() {
            return Err(ProfileError::FutureBirthday { date: self.0 });
        }

        if self.age_on(clock) < Self::MIN_AGE {
            return Err(ProfileError::UserTooYoung {
                min_age: Self::MIN_AGE,
            });
        }

        Ok(())
    }
}

impl ValueObject for BirthDate {
    type Error = ProfileError;

    fn validate(&self) -> Result<()> {
        self.check_at(&SystemClock)
    }
}

// --- CONVERSIONS ---

impl TryFrom<NaiveDate> for BirthDate {
    type Error = ProfileError;
    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::try_new(date)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(birth_date: BirthDate) -> Self {
        birth_date.0
    }
}

impl FromStr for BirthDate {
    type Err = ProfileError;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(Self::parse_date(s)?)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use shared_kernel::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Invalid date")
    }

    #[test]
    fn test_birth_date_happy_path() {
        let birth_date = BirthDate::try_new_at(date(1990, 5, 15), &clock());

        assert!(birth_date.is_ok());
        assert_eq!(birth_date.unwrap().value(), date(1990, 5, 15));
    }

    #[test]
    fn test_birth_date_exactly_min_age() {
        // Pile 20 ans aujourd'hui
        assert!(BirthDate::try_new_at(date(2005, 6, 15), &clock()).is_ok());

        // La veille de ses 20 ans
        let result = BirthDate::try_new_at(date(2005, 6, 16), &clock());
        assert_eq!(result, Err(ProfileError::UserTooYoung { min_age: 20 }));
    }

    #[test]
    fn test_birth_date_in_future() {
        let tomorrow = date(2025, 6, 16);
        let result = BirthDate::try_new_at(tomorrow, &clock());

        assert_eq!(result, Err(ProfileError::FutureBirthday { date: tomorrow }));
    }

    #[test]
    fn test_birth_date_today_is_not_future_but_too_young() {
        // Minuit aujourd'hui <= maintenant : pas dans le futur, mais 0 an
        let result = BirthDate::try_new_at(date(2025, 6, 15), &clock());
        assert!(matches!(result, Err(ProfileError::UserTooYoung { .. })));
    }

    #[test]
    fn test_future_check_uses_full_timestamp() {
        // A minuit pile, la date du jour n'est pas "après maintenant"
        let midnight = FixedClock::at_date(2025, 6, 15).unwrap();
        let result = BirthDate::try_new_at(date(2025, 6, 15), &midnight);
        assert!(matches!(result, Err(ProfileError::UserTooYoung { .. })));

        // Une seconde avant minuit, le lendemain est bien dans le futur
        midnight.advance(Duration::seconds(-1));
        let result = BirthDate::try_new_at(date(2025, 6, 15), &midnight);
        assert!(matches!(result, Err(ProfileError::FutureBirthday { .. })));
    }

    #[test]
    fn test_age_calculation_logic() {
        let vo = BirthDate(date(2000, 10, 15));

        // 1. La veille
        assert_eq!(vo.age_at(date(2010, 10, 14)), 9);
        // 2. Le jour même
        assert_eq!(vo.age_at(date(2010, 10, 15)), 10);
        // 3. Le lendemain
        assert_eq!(vo.age_at(date(2010, 10, 16)), 10);
        // 4. Mois antérieur, jour postérieur
        assert_eq!(vo.age_at(date(2010, 9, 30)), 9);
    }

    #[test]
    fn test_age_saturates_before_birth() {
        let vo = BirthDate(date(2000, 10, 15));

        assert_eq!(vo.age_at(date(2000, 10, 14)), 0);
        assert_eq!(vo.age_at(date(1950, 1, 1)), 0);
    }

    #[test]
    fn test_age_of_leap_day_birth() {
        let vo = BirthDate(date(2000, 2, 29));

        assert_eq!(vo.age_at(date(2021, 2, 28)), 20);
        assert_eq!(vo.age_at(date(2021, 3, 1)), 21);
        assert_eq!(vo.age_at(date(2024, 2, 29)), 24);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(BirthDate::parse_date("1990-05-15"), Ok(date(1990, 5, 15)));

        // Mois et jour sur un chiffre restent acceptés
        assert_eq!(BirthDate::parse_date("1990-5-1"), Ok(date(1990, 5, 1)));

        let malformed = [
            "15/05/1990",
            "1990-02-31",
            "",
            "1990-05-15T00:00:00",
            "yesterday",
            "90-05-15",
            "+1990-05-15",
            "-1990-05-15",
            " 1990-05-15",
            "1990-05-15 ",
            "+12345-01-01",
            "12345-01-01",
            "1990-005-15",
        ];

        for input in malformed {
            assert_eq!(
                BirthDate::parse_date(input),
                Err(ProfileError::MalformedDate { input: input.to_string() }),
                "should reject {input:?}"
            );
        }
    }

    #[test]
    fn test_display_formats_as_iso_date() {
        let vo = BirthDate::try_new_at(date(1990, 5, 5), &clock()).unwrap();
        assert_eq!(vo.to_string(), "1990-05-05");
    }

    #[test]
    fn test_serialization_cycle() {
        let vo = BirthDate::try_new(date(1995, 5, 20)).unwrap();

        let serialized = serde_json::to_string(&vo).unwrap();
        assert_eq!(serialized, "\"1995-05-20\"");

        let deserialized: BirthDate = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, vo);

        // La désérialisation repasse par la validation
        let future = (Utc::now().date_naive() + Duration::days(2))
            .format("\"%Y-%m-%d\"")
            .to_string();
        assert!(serde_json::from_str::<BirthDate>(&future).is_err());
    }
}
