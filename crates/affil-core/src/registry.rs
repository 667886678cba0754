//! The `Registry` trait: the transport seam between the pipeline and the
//! remote search API.
//!
//! Implemented by `affil-orcid` over HTTP and by an in-memory fake in tests.

use std::future::Future;

use thiserror::Error;

use crate::{
  id::{OrganizationId, SubjectId},
  record::{SearchPage, SubjectRecord},
};

/// A failed registry call.
#[derive(Debug, Error)]
pub enum RegistryError {
  /// The request never produced a response.
  #[error("network error: {0}")]
  Network(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The registry answered with a non-success status.
  #[error("bad status {status} from {url}")]
  HttpStatus { status: u16, url: String },

  /// The response body did not have the expected shape.
  #[error("malformed response: {0}")]
  Malformed(String),
}

/// Read access to a bibliographic-identifier registry.
///
/// Callers await each call before issuing the next; implementations need
/// not support overlapping requests.
pub trait Registry: Send + Sync {
  /// Search for subjects affiliated with `org`, returning up to `rows`
  /// results starting at the zero-based offset `start`.
  fn search<'a>(
    &'a self,
    org: &'a OrganizationId,
    start: u64,
    rows: u32,
  ) -> impl Future<Output = Result<SearchPage, RegistryError>> + Send + 'a;

  /// Fetch the full record of one subject.
  fn record<'a>(
    &'a self,
    subject: &'a SubjectId,
  ) -> impl Future<Output = Result<SubjectRecord, RegistryError>> + Send + 'a;
}

// A shared reference to a registry is a registry, so a pipeline can borrow
// one it does not own.
impl<R: Registry> Registry for &R {
  async fn search(
    &self,
    org: &OrganizationId,
    start: u64,
    rows: u32,
  ) -> Result<SearchPage, RegistryError> {
    (**self).search(org, start, rows).await
  }

  async fn record(&self, subject: &SubjectId) -> Result<SubjectRecord, RegistryError> {
    (**self).record(subject).await
  }
}
