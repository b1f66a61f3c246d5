//! Identity assignment policy for stored documents.
//!
//! A document that reaches the store without an identifier or creation timestamp has
//! them back-filled here. Both sources are pluggable so hosts and tests can make them
//! deterministic.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of fresh document identifiers.
///
/// Implementations must make collisions negligible; the store does not check whether a
/// generated id is already taken.
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns a new, non-empty identifier.
    fn generate(&self) -> String;
}

/// Generates random UUID v4 identifiers in their hyphenated string form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the current wall-clock instant.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
