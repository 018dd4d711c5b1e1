// crates/user-profile/src/lib.rs

pub mod domain;
pub mod errors;

pub use domain::entities::UserProfile;
pub use domain::value_objects::{BirthDate, BirthdayInput, Email, Name, Password};
pub use errors::{PasswordRule, ProfileError, Result};
