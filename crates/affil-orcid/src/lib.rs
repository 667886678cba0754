//! ORCID public API backend for `affil`.
//!
//! [`OrcidClient`] implements [`affil_core::Registry`] over the v2.0 public
//! API: the `search` endpoint for affiliates and `/{orcid}/record` for
//! employment details. The [`wire`] module holds the JSON shapes and their
//! conversion into `affil-core` types.

mod client;
pub mod error;
pub mod wire;

pub use client::{ClientConfig, DEFAULT_BASE_URL, ORCID_JSON, OrcidClient};
pub use error::{Error, Result};
