// crates/user-profile/src/domain/value_objects/password.rs

use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;

use crate::errors::{PasswordRule, ProfileError, Result};

/// Mot de passe en clair, validé. Jamais sérialisé, masqué dans `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LEN: usize = 8;
    pub const SPECIAL_CHARS: &'static str = "~!@%$#^&*";

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let password = Self(value.into());
        password.validate()?;
        Ok(password)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Première règle violée, dans l'ordre : longueur, minuscule, majuscule, caractère spécial
    fn first_broken_rule(&self) -> Option<PasswordRule> {
        let value = self.0.as_str();

        if value.chars().count() < Self::MIN_LEN {
            return Some(PasswordRule::TooShort { min: Self::MIN_LEN });
        }
        if !value.chars().any(char::is_lowercase) {
            return Some(PasswordRule::MissingLowercase);
        }
        if !value.chars().any(char::is_uppercase) {
            return Some(PasswordRule::MissingUppercase);
        }
        if !value.chars().any(|c| Self::SPECIAL_CHARS.contains(c)) {
            return Some(PasswordRule::MissingSpecialCharacter {
                allowed: Self::SPECIAL_CHARS,
            });
        }

        None
    }
}

impl ValueObject for Password {
    type Error = ProfileError;

    fn validate(&self) -> Result<()> {
        match self.first_broken_rule() {
            Some(rule) => Err(ProfileError::InvalidPasswordFormat(rule)),
            None => Ok(()),
        }
    }
}

impl TryFrom<String> for Password {
    type Error = ProfileError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
