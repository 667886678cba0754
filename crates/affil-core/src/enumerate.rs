//! Affiliate enumeration: page through search results for an organization.

use tracing::{debug, warn};

use crate::{
  Error, Result,
  id::{OrganizationId, SubjectId},
  registry::Registry,
};

/// Rows requested per search page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Collect every subject the registry lists as affiliated with `org`.
///
/// Pages are fetched one after another. The reported `num_found` is an upper
/// bound: enumeration also stops at the first page that comes back shorter
/// than the registry said it would be.
///
/// Any failed page aborts the whole enumeration.
pub async fn enumerate_affiliates<R>(
  registry: &R,
  org: &OrganizationId,
  page_size: u32,
) -> Result<Vec<SubjectId>>
where
  R: Registry,
{
  if page_size == 0 {
    return Err(Error::InvalidPageSize);
  }

  let mut affiliates = Vec::new();
  let mut start = 0u64;

  loop {
    let page = match registry.search(org, start, page_size).await {
      Ok(page) => page,
      Err(source) => return Err(Error::Enumerate { start, source }),
    };

    let batch = page.subjects.len() as u64;
    let expected = u64::from(page_size).min(page.num_found.saturating_sub(start));
    affiliates.extend(page.subjects);
    start += batch;

    debug!(
      org = %org,
      collected = start,
      num_found = page.num_found,
      "fetched search page"
    );

    if start >= page.num_found {
      break;
    }
    if batch < expected {
      warn!(
        org = %org,
        collected = start,
        num_found = page.num_found,
        "search page shorter than expected; stopping early"
      );
      break;
    }
  }

  Ok(affiliates)
}
