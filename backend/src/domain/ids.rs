//! Entity identifiers.
//!
//! Every document carries two identifiers:
//!
//! - a storage identifier ([`StudentId`], [`CourseId`]) naming the document
//!   in the store and in URLs, serialised as `_id`;
//! - a business code ([`PublicId`]) generated alongside it, serialised as
//!   `id`. Only enrolment records use it (as their `codigo`).

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Raised when a path segment is not a well-formed storage identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identifier must be a UUID: {value}")]
pub struct InvalidIdentifier {
    value: String,
}

macro_rules! storage_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an identifier read back from storage.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse an identifier received from a client.
            pub fn parse(raw: &str) -> Result<Self, InvalidIdentifier> {
                Uuid::parse_str(raw).map(Self).map_err(|_| InvalidIdentifier {
                    value: raw.to_owned(),
                })
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

storage_id! {
    /// Storage identifier of a student document.
    StudentId
}

storage_id! {
    /// Storage identifier of a course document.
    CourseId
}

/// Application-generated business code of a document.
///
/// Opaque to the service: codes read back from storage are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicId(String);

impl PublicId {
    /// Generate a fresh code.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the code.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for PublicId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<PublicId> for String {
    fn from(value: PublicId) -> Self {
        value.0
    }
}

impl fmt::Display for PublicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
