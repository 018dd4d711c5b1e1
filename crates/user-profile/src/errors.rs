// crates/user-profile/src/errors.rs

use chrono::NaiveDate;
use shared_kernel::errors::{AppError, ErrorContext};
use std::fmt;
use thiserror::Error;

/// Règle de mot de passe violée.
/// Une seule est rapportée : la première dans l'ordre de vérification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    TooShort { min: usize },
    MissingLowercase,
    MissingUppercase,
    MissingSpecialCharacter { allowed: &'static str },
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min } => {
                write!(f, "The password must contain at least {min} characters")
            }
            Self::MissingLowercase => {
                f.write_str("The password must contain at least one lowercase letter")
            }
            Self::MissingUppercase => {
                f.write_str("The password must contain at least one uppercase letter")
            }
            Self::MissingSpecialCharacter { allowed } => write!(
                f,
                "The password must contain at least one special character from {allowed}"
            ),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("The username must contain at least {min} characters")]
    NameTooShort { min: usize },

    #[error("The username must contain at least one alphabetic character")]
    NameNonAlphabetic,

    #[error("The email must contain '@' and a '.'")]
    InvalidEmailFormat,

    #[error("{0}")]
    InvalidPasswordFormat(PasswordRule),

    #[error("Invalid date '{input}'. Expected YYYY-MM-DD")]
    MalformedDate { input: String },

    #[error("The birthday must be in the past")]
    FutureBirthday { date: NaiveDate },

    #[error("The user must be older than {min_age} years")]
    UserTooYoung { min_age: u32 },
}

impl ProfileError {
    /// Champ du profil concerné par l'erreur
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } | Self::NameNonAlphabetic => "name",
            Self::InvalidEmailFormat => "email",
            Self::InvalidPasswordFormat(_) => "password",
            Self::MalformedDate { .. }
            | Self::FutureBirthday { .. }
            | Self::UserTooYoung { .. } => "birthday",
        }
    }

    fn context(&self) -> ErrorContext {
        let context = ErrorContext::new(self.field(), self.to_string());

        match self {
            Self::NameTooShort { min } => context.with_metadata("min", min),
            Self::InvalidPasswordFormat(PasswordRule::TooShort { min }) => {
                context.with_metadata("min", min)
            }
            Self::InvalidPasswordFormat(PasswordRule::MissingSpecialCharacter { allowed }) => {
                context.with_metadata("allowed", allowed)
            }
            Self::MalformedDate { input } => context.with_metadata("input", input),
            Self::FutureBirthday { date } => context.with_metadata("date", date),
            Self::UserTooYoung { min_age } => context.with_metadata("min_age", min_age),
            _ => context,
        }
    }
}

// Traduction vers l'erreur applicative (400 côté API)
impl From<ProfileError> for AppError {
    fn from(error: ProfileError) -> Self {
        AppError::validation(error.context())
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
