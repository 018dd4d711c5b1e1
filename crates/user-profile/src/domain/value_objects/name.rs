// crates/user-profile/src/domain/value_objects/name.rs

use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use seahash::SeaHasher;
use shared_kernel::domain::value_objects::ValueObject;

use crate::errors::{ProfileError, Result};

/// Nom d'utilisateur tel que saisi (aucune normalisation : l'accesseur rend la valeur fournie).
///
/// Le hash SeaHash est calculé une fois à la construction. Il sert de clé d'identité
/// mais n'est PAS unique : deux profils de même nom partagent la même clé.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    inner: String,
    hash: u64,
}

impl Name {
    pub const MIN_LEN: usize = 4;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let inner = value.into();
        let mut hasher = SeaHasher::new();
        inner.hash(&mut hasher);

        let name = Self {
            inner,
            hash: hasher.finish(),
        };
        name.validate()?;

        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn hash_value(&self) -> u64 {
        self.hash
    }
}

impl ValueObject for Name {
    type Error = ProfileError;

    fn validate(&self) -> Result<()> {
        // 1. Longueur (en caractères, pas en octets)
        if self.inner.chars().count() < Self::MIN_LEN {
            return Err(ProfileError::NameTooShort { min: Self::MIN_LEN });
        }

        // 2. Au moins une lettre
        if !self.inner.chars().any(char::is_alphabetic) {
            return Err(ProfileError::NameNonAlphabetic);
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Name {
    type Error = ProfileError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.inner
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
