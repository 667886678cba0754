//! Domain view of registry data and the faculty records built from it.
//!
//! These are transport-neutral: `affil-orcid` decodes the wire format into
//! [`SearchPage`] and [`SubjectRecord`], and the pipeline only ever sees
//! these shapes.

use serde::{Deserialize, Serialize};

use crate::id::SubjectId;

/// Email placeholder for subjects whose email list is empty or hidden.
pub const PRIVATE_EMAIL: &str = "private";

// ─── Registry views ──────────────────────────────────────────────────────────

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
  pub subjects:  Vec<SubjectId>,
  /// Total matches reported by the registry. Treated as an upper bound.
  pub num_found: u64,
}

/// One entry of a subject's employment summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmploymentEntry {
  pub organization_name:             String,
  pub disambiguated_organization_id: Option<String>,
  pub department_name:               Option<String>,
  pub role_title:                    Option<String>,
  /// `None` means the appointment is ongoing.
  pub end_date:                      Option<String>,
}

/// The parts of a subject's full record that classification reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectRecord {
  pub given_names: Option<String>,
  pub family_name: Option<String>,
  /// Public email addresses in registry order.
  pub emails:      Vec<String>,
  /// `None` when the record carries no employment summary at all.
  pub employments: Option<Vec<EmploymentEntry>>,
}

impl SubjectRecord {
  /// Given names and family name joined by a single space. Missing parts
  /// are left out.
  pub fn full_name(&self) -> String {
    [self.given_names.as_deref(), self.family_name.as_deref()]
      .into_iter()
      .flatten()
      .map(str::trim)
      .filter(|part| !part.is_empty())
      .collect::<Vec<_>>()
      .join(" ")
  }

  /// The first listed email, or [`PRIVATE_EMAIL`].
  pub fn primary_email(&self) -> &str {
    self
      .emails
      .first()
      .map(String::as_str)
      .unwrap_or(PRIVATE_EMAIL)
  }

  pub fn employments(&self) -> &[EmploymentEntry] {
    self.employments.as_deref().unwrap_or_default()
  }
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// A subject holding a current appointment at the organization.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRecord {
  #[serde(rename = "orcid")]
  pub subject:      SubjectId,
  pub name:         String,
  pub email:        String,
  #[serde(rename = "orgname")]
  pub organization: String,
  #[serde(rename = "depname")]
  pub department:   Option<String>,
  pub title:        Option<String>,
}

impl FacultyRecord {
  /// Build the output record for `subject` from one qualifying `entry`.
  pub fn from_entry(
    subject: &SubjectId,
    record: &SubjectRecord,
    entry: &EmploymentEntry,
  ) -> Self {
    Self {
      subject:      subject.clone(),
      name:         record.full_name(),
      email:        record.primary_email().to_owned(),
      organization: entry.organization_name.clone(),
      department:   entry.department_name.clone(),
      title:        entry.role_title.clone(),
    }
  }
}
