//! Time source port trait.

use chrono::{DateTime, Utc};

/// Supplies the current instant.
///
/// The game clock never reads the wall clock directly; injecting the time
/// source lets tests drive elapsed-time effects deterministically.
pub trait ClockPort {
    fn now(&self) -> DateTime<Utc>;
}
