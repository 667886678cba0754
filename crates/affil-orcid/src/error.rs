//! Error type for `affil-orcid`.

use thiserror::Error;

/// Failure to construct an [`OrcidClient`](crate::OrcidClient).
///
/// Request failures are reported as [`affil_core::RegistryError`].
#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Http(#[from] reqwest::Error),

  #[error("invalid base url {url:?}: {source}")]
  InvalidBaseUrl {
    url:    String,
    #[source]
    source: url::ParseError,
  },

  #[error("base url {0:?} cannot carry a path")]
  NotABaseUrl(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
