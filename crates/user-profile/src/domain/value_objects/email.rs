// crates/user-profile/src/domain/value_objects/email.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;

use crate::errors::{ProfileError, Result};

/// Adresse email. Le contrôle est volontairement faible : présence de '@' et de '.',
/// sans vérifier leur position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let email = Self(value.into());
        email.validate()?;
        Ok(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    type Error = ProfileError;

    fn validate(&self) -> Result<()> {
        if !self.0.contains('@') || !self.0.contains('.') {
            return Err(ProfileError::InvalidEmailFormat);
        }

        Ok(())
    }
}

impl TryFrom<String> for Email {
    type Error = ProfileError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
