//! Person data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::event::EventId;

/// Maximum allowed length for a person name, in characters.
pub const PERSON_NAME_MAX: usize = 120;

/// Validation errors returned by [`PersonName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    EmptyName,
    NameTooLong { max: usize },
}

impl fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "person name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "person name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for PersonValidationError {}

/// Database-generated identifier of a person row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
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

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated attendee name.
///
/// Stored as given; validation only requires the name to be non-empty once
/// trimmed and no longer than [`PERSON_NAME_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, PersonValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, PersonValidationError> {
        if name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        if name.chars().count() > PERSON_NAME_MAX {
            return Err(PersonValidationError::NameTooLong {
                max: PERSON_NAME_MAX,
            });
        }
        Ok(Self(name))
    }

    /// Access the validated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        let PersonName(raw) = value;
        raw
    }
}

impl TryFrom<String> for PersonName {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Attendee of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Primary key.
    pub id: PersonId,
    /// Owning event.
    pub event_id: EventId,
    /// Attendee name.
    pub name: PersonName,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
