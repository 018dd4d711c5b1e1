mod birth_date;
mod birthday_input;
mod email;
mod name;
mod password;

pub use birth_date::BirthDate;
pub use birthday_input::BirthdayInput;
pub use email::Email;
pub use name::Name;
pub use password::Password;

#[cfg(test)]
mod tests;
