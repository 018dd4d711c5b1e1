// crates/shared-kernel/src/clock/mod.rs

mod fixed;
mod system;

use chrono::{DateTime, NaiveDate, Utc};

pub use fixed::FixedClock;
pub use system::SystemClock;

/// Source de temps injectable.
/// Le domaine ne lit jamais `Utc::now()` directement : tout passe par ce trait.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> DateTime<Utc>;

    /// Date calendaire du jour (UTC)
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
