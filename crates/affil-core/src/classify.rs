//! Faculty classification: fetch each subject's record and keep current
//! appointments at the organization.
//!
//! An entry counts as current when its disambiguated organization id is the
//! requested one and it has no end date. A present end date disqualifies the
//! entry even if it lies in the future; staff and faculty are not told apart.

use tracing::debug;

use crate::{
  Error, Result,
  id::{OrganizationId, SubjectId},
  progress::{Progress, ratio},
  record::{EmploymentEntry, FacultyRecord, SubjectRecord},
  registry::Registry,
};

/// Whether `entry` is a current appointment at `org`.
pub fn is_current_affiliation(entry: &EmploymentEntry, org: &OrganizationId) -> bool {
  entry.end_date.is_none()
    && entry
      .disambiguated_organization_id
      .as_deref()
      .is_some_and(|id| org.matches(id))
}

/// Every faculty record `record` yields for `org`; one per qualifying entry.
pub fn faculty_entries(
  subject: &SubjectId,
  record: &SubjectRecord,
  org: &OrganizationId,
) -> Vec<FacultyRecord> {
  record
    .employments()
    .iter()
    .filter(|entry| is_current_affiliation(entry, org))
    .map(|entry| FacultyRecord::from_entry(subject, record, entry))
    .collect()
}

/// Fetch and classify each of `subjects` in turn.
///
/// `progress` is told the completion ratio after every subject. The first
/// failed fetch aborts the run and discards everything matched so far.
pub async fn classify_faculty<R, P>(
  registry: &R,
  org: &OrganizationId,
  subjects: Vec<SubjectId>,
  progress: &mut P,
) -> Result<Vec<FacultyRecord>>
where
  R: Registry,
  P: Progress + ?Sized,
{
  let total = subjects.len();
  let mut faculty = Vec::new();

  for (index, subject) in subjects.into_iter().enumerate() {
    let record = match registry.record(&subject).await {
      Ok(record) => record,
      Err(source) => return Err(Error::Classify { subject, source }),
    };

    let matches = faculty_entries(&subject, &record, org);
    debug!(
      subject = %subject,
      employments = record.employments().len(),
      matches = matches.len(),
      "classified subject"
    );
    faculty.extend(matches);

    let processed = index + 1;
    progress.advance(ratio(processed, total - processed));
  }

  Ok(faculty)
}
