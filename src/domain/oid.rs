use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

/// The stable string identity of an inventory record.
///
/// The value is opaque — it is taken verbatim from the `oid` attribute of the
/// producing element and never re-derived. The only constraint is that it is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Oid(NonEmptyString);

impl Oid {
    /// Creates a new `Oid` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the string is empty.
    pub fn new(s: String) -> Result<Self, Error> {
        let non_empty = NonEmptyString::new(s).map_err(|_| Error)?;
        Ok(Self(non_empty))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for Oid {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Oid {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Oid {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when an object identifier is empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("object identifier must not be empty")]
pub struct Error;
