//! Error types for `affil-core`.

use thiserror::Error;

use crate::{id::SubjectId, registry::RegistryError};

#[derive(Debug, Error)]
pub enum Error {
  #[error("organization id must not be empty")]
  InvalidOrganizationId,

  #[error("page size must be at least 1")]
  InvalidPageSize,

  /// A search page could not be fetched; nothing was classified.
  #[error("enumerating affiliates (start={start}): {source}")]
  Enumerate {
    start:  u64,
    #[source]
    source: RegistryError,
  },

  /// A subject record could not be fetched; earlier matches are discarded.
  #[error("classifying {subject}: {source}")]
  Classify {
    subject: SubjectId,
    #[source]
    source:  RegistryError,
  },
}

impl Error {
  /// The underlying registry failure, if this error came from the registry.
  pub fn registry_error(&self) -> Option<&RegistryError> {
    match self {
      Error::Enumerate { source, .. } | Error::Classify { source, .. } => {
        Some(source)
      }
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
