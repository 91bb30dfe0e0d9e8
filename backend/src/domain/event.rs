//! Event data model.
//!
//! Events are owned by another part of the wider system; this service only
//! reads them to guard person operations with an existence check.

use std::fmt;
use std::num::ParseIntError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Database-generated identifier of an event row.
///
/// Path segments parse into this type via [`std::str::FromStr`]; anything
/// that is not a 64-bit integer identifies no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Event row attributes as returned by the existence check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Primary key.
    pub id: EventId,
    /// Human-readable event title.
    pub title: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
