//! Core types and pipeline for `affil`.
//!
//! Enumerates the registry subjects affiliated with an organization, then
//! keeps the ones whose employment record shows a current appointment there.
//!
//! This crate is free of HTTP dependencies. Transport lives behind the
//! [`Registry`](registry::Registry) trait; `affil-orcid` provides the real
//! implementation.

pub mod classify;
pub mod enumerate;
pub mod error;
pub mod id;
pub mod pipeline;
pub mod progress;
pub mod record;
pub mod registry;

pub use error::{Error, Result};
pub use id::{OrganizationId, SubjectId};
pub use pipeline::Pipeline;
pub use record::{EmploymentEntry, FacultyRecord, SearchPage, SubjectRecord};
pub use registry::{Registry, RegistryError};
