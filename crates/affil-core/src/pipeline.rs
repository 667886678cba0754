//! The enumerate-then-classify pipeline.

use std::time::Instant;

use tracing::info;

use crate::{
  Result,
  classify::classify_faculty,
  enumerate::{DEFAULT_PAGE_SIZE, enumerate_affiliates},
  id::OrganizationId,
  progress::{NullProgress, Progress},
  record::FacultyRecord,
  registry::Registry,
};

/// Owns everything one run needs: the registry, the organization, the
/// search page size and the progress sink.
pub struct Pipeline<R, P = NullProgress> {
  registry:  R,
  org:       OrganizationId,
  page_size: u32,
  progress:  P,
}

impl<R: Registry> Pipeline<R> {
  pub fn new(registry: R, org: OrganizationId) -> Self {
    Self {
      registry,
      org,
      page_size: DEFAULT_PAGE_SIZE,
      progress: NullProgress,
    }
  }
}

impl<R: Registry, P: Progress> Pipeline<R, P> {
  /// Rows requested per search page.
  pub fn page_size(mut self, page_size: u32) -> Self {
    self.page_size = page_size;
    self
  }

  /// Replace the progress sink.
  pub fn with_progress<Q: Progress>(self, progress: Q) -> Pipeline<R, Q> {
    Pipeline {
      registry: self.registry,
      org: self.org,
      page_size: self.page_size,
      progress,
    }
  }

  pub fn organization(&self) -> &OrganizationId { &self.org }

  /// Enumerate every affiliate, then classify them.
  ///
  /// Fails on the first registry error; no partial result is returned.
  /// The progress sink is finished either way.
  pub async fn run(mut self) -> Result<Vec<FacultyRecord>> {
    let started = Instant::now();
    let result = self.run_inner().await;
    self.progress.finish();

    if let Ok(faculty) = &result {
      info!(
        org = %self.org,
        faculty = faculty.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "pipeline finished"
      );
    }
    result
  }

  async fn run_inner(&mut self) -> Result<Vec<FacultyRecord>> {
    let affiliates =
      enumerate_affiliates(&self.registry, &self.org, self.page_size).await?;
    info!(org = %self.org, affiliates = affiliates.len(), "enumerated affiliates");

    self.progress.begin(affiliates.len());
    classify_faculty(&self.registry, &self.org, affiliates, &mut self.progress)
      .await
  }
}
