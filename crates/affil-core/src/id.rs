//! Identifier newtypes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The caller-supplied organization identifier (a Ringgold ID).
///
/// Opaque: it is only ever formatted into the search query and compared
/// against the disambiguated organization id of employment entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
  /// Build an id from `raw`, trimming surrounding whitespace.
  pub fn new(raw: impl AsRef<str>) -> Result<Self, Error> {
    let trimmed = raw.as_ref().trim();
    if trimmed.is_empty() {
      return Err(Error::InvalidOrganizationId);
    }
    Ok(Self(trimmed.to_owned()))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// Whether a disambiguated organization id taken from a record refers to
  /// this organization.
  pub fn matches(&self, disambiguated: &str) -> bool {
    disambiguated.trim() == self.0
  }
}

impl FromStr for OrganizationId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> { Self::new(s) }
}

impl fmt::Display for OrganizationId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A registry subject identifier (an ORCID iD path such as
/// `0000-0002-1825-0097`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
  pub fn new(raw: impl Into<String>) -> Self { Self(raw.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for SubjectId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl fmt::Display for SubjectId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
