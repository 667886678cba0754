//! Async HTTP client for the ORCID public API.

use std::time::Duration;

use affil_core::{
  OrganizationId, Registry, RegistryError, SearchPage, SubjectId, SubjectRecord,
};
use reqwest::{
  Client,
  header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{
  Error, Result,
  wire::{RecordResponse, SearchResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://pub.orcid.org/v2.0/";

/// Media type of ORCID's versioned JSON representation.
pub const ORCID_JSON: &str = "application/vnd.orcid+json";

/// Connection settings for the registry.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub base_url:   String,
  /// Whole-request timeout; `None` leaves requests unbounded.
  pub timeout:    Option<Duration>,
  pub user_agent: String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url:   DEFAULT_BASE_URL.to_string(),
      timeout:    Some(Duration::from_secs(30)),
      user_agent: concat!("affil/", env!("CARGO_PKG_VERSION")).to_string(),
    }
  }
}

/// [`Registry`] backed by the ORCID public API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct OrcidClient {
  client:   Client,
  base_url: Url,
}

impl OrcidClient {
  pub fn new(config: ClientConfig) -> Result<Self> {
    let base_url = parse_base_url(&config.base_url)?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ORCID_JSON));

    let mut builder = Client::builder()
      .default_headers(headers)
      .user_agent(config.user_agent);
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }

    Ok(Self { client: builder.build()?, base_url })
  }

  pub fn base_url(&self) -> &Url { &self.base_url }

  /// `GET <base>/search/?q=ringgold-org-id:<org>&start=<start>&rows=<rows>`
  pub fn search_url(&self, org: &OrganizationId, start: u64, rows: u32) -> Url {
    let mut url = self.endpoint(&["search", ""]);
    url
      .query_pairs_mut()
      .append_pair("q", &format!("ringgold-org-id:{org}"))
      .append_pair("start", &start.to_string())
      .append_pair("rows", &rows.to_string());
    url
  }

  /// `GET <base>/<orcid>/record`
  pub fn record_url(&self, subject: &SubjectId) -> Url {
    self.endpoint(&[subject.as_str(), "record"])
  }

  /// Append path segments to the base URL. Segments are percent-encoded, so
  /// an identifier can never escape its path position.
  fn endpoint(&self, segments: &[&str]) -> Url {
    let mut url = self.base_url.clone();
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    url
  }

  async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RegistryError> {
    debug!(%url, "GET");
    let resp = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|e| RegistryError::Network(Box::new(e)))?;

    let status = resp.status();
    if !status.is_success() {
      return Err(RegistryError::HttpStatus {
        status: status.as_u16(),
        url:    url.to_string(),
      });
    }

    let body = resp
      .bytes()
      .await
      .map_err(|e| RegistryError::Network(Box::new(e)))?;
    serde_json::from_slice(&body)
      .map_err(|e| RegistryError::Malformed(format!("{url}: {e}")))
  }
}

impl Registry for OrcidClient {
  async fn search(
    &self,
    org: &OrganizationId,
    start: u64,
    rows: u32,
  ) -> Result<SearchPage, RegistryError> {
    let response: SearchResponse = self.get_json(self.search_url(org, start, rows)).await?;
    Ok(response.into())
  }

  async fn record(&self, subject: &SubjectId) -> Result<SubjectRecord, RegistryError> {
    let response: RecordResponse = self.get_json(self.record_url(subject)).await?;
    Ok(response.into())
  }
}

fn parse_base_url(raw: &str) -> Result<Url> {
  let url = Url::parse(raw).map_err(|source| Error::InvalidBaseUrl {
    url: raw.to_string(),
    source,
  })?;
  if url.cannot_be_a_base() {
    return Err(Error::NotABaseUrl(raw.to_string()));
  }
  Ok(url)
}
