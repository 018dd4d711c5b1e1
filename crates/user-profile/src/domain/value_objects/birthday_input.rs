// crates/user-profile/src/domain/value_objects/birthday_input.rs

use chrono::NaiveDate;
use shared_kernel::clock::Clock;

use crate::domain::value_objects::BirthDate;
use crate::errors::Result;

/// Date de naissance brute : soit une date, soit un texte `YYYY-MM-DD` à parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayInput {
    Date(NaiveDate),
    Text(String),
}

impl BirthdayInput {
    /// Parse (si texte) puis valide
    pub fn into_birth_date(self, clock: &dyn Clock) -> Result<BirthDate> {
        let date = match self {
            Self::Date(date) => date,
            Self::Text(text) => BirthDate::parse_date(&text)?,
        };

        BirthDate::try_new_at(date, clock)
    }
}

impl From<NaiveDate> for BirthdayInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for BirthdayInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for BirthdayInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
