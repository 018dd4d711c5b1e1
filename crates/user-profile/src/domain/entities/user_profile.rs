// crates/user-profile/src/domain/entities/user_profile.rs

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use shared_kernel::clock::{Clock, SystemClock};

use crate::domain::value_objects::{BirthDate, BirthdayInput, Email, Name, Password};
use crate::errors::{ProfileError, Result};

/// Profil utilisateur validé.
///
/// Les quatre champs validés ne sont modifiables que via leurs setters, qui repassent
/// par les mêmes constructeurs de Value Objects que la création. Un setter en échec
/// ne modifie rien. `created_at` est fixé à la création et n'a pas de setter.
///
/// L'âge n'est jamais stocké : il est recalculé à chaque lecture avec l'horloge du profil.
#[derive(Debug, Clone)]
pub struct UserProfile {
    name: Name,
    email: Email,
    password: Password,
    birth_date: BirthDate,
    created_at: DateTime<Utc>,
    clock: Arc<dyn Clock>,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        birthday: impl Into<BirthdayInput>,
    ) -> Result<Self> {
        Self::with_clock(name, email, password, birthday, Arc::new(SystemClock))
    }

    /// Création avec une horloge injectée. Ordre de validation : nom, email, mot de passe,
    /// date de naissance. La première erreur interrompt la création.
    pub fn with_clock(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        birthday: impl Into<BirthdayInput>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let name = Name::try_new(name)?;
        let email = Email::try_new(email)?;
        let password = Password::try_new(password)?;
        let birth_date = birthday.into().into_birth_date(clock.as_ref())?;

        let profile = Self {
            name,
            email,
            password,
            birth_date,
            created_at: clock.now(),
            clock,
        };

        tracing::debug!(
            identity_key = profile.identity_key(),
            "User profile created for {}",
            profile.name
        );

        Ok(profile)
    }

    // ==========================================
    // SETTERS VALIDÉS
    // ==========================================

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<()> {
        let name = Name::try_new(value).map_err(|e| self.rejected(e))?;
        self.name = name;
        self.changed("name");
        Ok(())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<()> {
        let email = Email::try_new(value).map_err(|e| self.rejected(e))?;
        self.email = email;
        self.changed("email");
        Ok(())
    }

    pub fn set_password(&mut self, value: impl Into<String>) -> Result<()> {
        let password = Password::try_new(value).map_err(|e| self.rejected(e))?;
        self.password = password;
        self.changed("password");
        Ok(())
    }

    /// L'âge est recalculé sur la NOUVELLE date avant d'être vérifié :
    /// une date trop récente est refusée et l'ancienne date est conservée.
    pub fn set_birthday(&mut self, value: impl Into<BirthdayInput>) -> Result<()> {
        let birth_date = value
            .into()
            .into_birth_date(self.clock.as_ref())
            .map_err(|e| self.rejected(e))?;
        self.birth_date = birth_date;
        self.changed("birthday");
        Ok(())
    }

    fn rejected(&self, error: ProfileError) -> ProfileError {
        tracing::warn!(
            identity_key = self.identity_key(),
            field = error.field(),
            "Rejected profile update: {}",
            error
        );
        error
    }

    fn changed(&self, field: &'static str) {
        tracing::debug!(identity_key = self.identity_key(), field, "Profile field updated");
    }

    // ==========================================
    // GETTERS (READ-ONLY)
    // ==========================================

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birth_date.value()
    }

    /// Âge exact au calendrier, à la date du jour de l'horloge
    pub fn age(&self) -> u32 {
        self.birth_date.age_on(self.clock.as_ref())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Clé d'identité dérivée du nom seul (SeaHash).
    /// Pas un identifiant unique : deux profils de même nom ont la même clé.
    pub fn identity_key(&self) -> u64 {
        self.name.hash_value()
    }
}

impl From<&UserProfile> for u64 {
    fn from(profile: &UserProfile) -> Self {
        profile.identity_key()
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserProfile(name={}, email={}, birthday={}, age={}, created_at={})",
            self.name,
            self.email,
            self.birth_date,
            self.age(),
            self.created_at.format("%Y-%m-%d %H:%M:%S%.6f")
        )
    }
}

// Vue sérialisable : le mot de passe n'en fait jamais partie
#[derive(Serialize)]
struct ProfileView<'a> {
    name: &'a Name,
    email: &'a Email,
    birthday: BirthDate,
    age: u32,
    created_at: DateTime<Utc>,
}

impl Serialize for UserProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ProfileView {
            name: &self.name,
            email: &self.email,
            birthday: self.birth_date,
            age: self.age(),
            created_at: self.created_at,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "tests/user_profile_test.rs"]
mod user_profile_test;
