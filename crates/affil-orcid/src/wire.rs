//! JSON shapes of the ORCID v2.0 public API (`application/vnd.orcid+json`).
//!
//! Only the fields `affil` reads are modelled. Every container is optional:
//! the registry sends `null` for hidden or empty sections, and a record
//! without an employment summary is valid.

use affil_core::{EmploymentEntry, SearchPage, SubjectId, SubjectRecord};
use serde::Deserialize;

// ─── Search ──────────────────────────────────────────────────────────────────

/// Body of `GET /search/`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
  /// `null` when nothing matched.
  #[serde(default)]
  pub result:    Option<Vec<SearchResult>>,
  #[serde(rename = "num-found", default)]
  pub num_found: u64,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
  #[serde(rename = "orcid-identifier")]
  pub orcid_identifier: OrcidIdentifier,
}

#[derive(Debug, Deserialize)]
pub struct OrcidIdentifier {
  pub path: String,
}

impl From<SearchResponse> for SearchPage {
  fn from(response: SearchResponse) -> Self {
    SearchPage {
      subjects:  response
        .result
        .unwrap_or_default()
        .into_iter()
        .map(|r| SubjectId::new(r.orcid_identifier.path))
        .collect(),
      num_found: response.num_found,
    }
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// Body of `GET /{orcid}/record`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RecordResponse {
  pub person:             Option<Person>,
  pub activities_summary: Option<ActivitiesSummary>,
}

#[derive(Debug, Deserialize)]
pub struct Person {
  pub name:   Option<PersonName>,
  pub emails: Option<Emails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PersonName {
  pub given_names: Option<StringValue>,
  pub family_name: Option<StringValue>,
}

/// ORCID wraps most scalars as `{"value": ...}`.
#[derive(Debug, Deserialize)]
pub struct StringValue {
  pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Emails {
  pub email: Option<Vec<Email>>,
}

#[derive(Debug, Deserialize)]
pub struct Email {
  pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActivitiesSummary {
  pub employments: Option<Employments>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Employments {
  pub employment_summary: Option<Vec<EmploymentSummary>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmploymentSummary {
  pub department_name: Option<String>,
  pub role_title:      Option<String>,
  pub end_date:        Option<EndDate>,
  pub organization:    Option<Organization>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Organization {
  pub name:                       Option<String>,
  pub disambiguated_organization: Option<DisambiguatedOrganization>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisambiguatedOrganization {
  /// Usually a string; some records carry a bare number.
  pub disambiguated_organization_identifier: Option<serde_json::Value>,
}

/// An end date as sent by the registry.
///
/// Only its presence matters for classification, so any non-null shape is
/// accepted. The usual shape is a fuzzy date,
/// `{"year": {"value": "2020"}, "month": {"value": "01"}, "day": null}`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct EndDate(pub serde_json::Value);

impl EndDate {
  /// Render as `YYYY[-MM[-DD]]` when the value is a fuzzy date, the text
  /// itself when it is a string, and the JSON text otherwise. A fuzzy date
  /// with no parts renders empty but is still a date.
  pub fn render(&self) -> String {
    match &self.0 {
      serde_json::Value::String(text) => text.clone(),
      serde_json::Value::Object(date) => ["year", "month", "day"]
        .into_iter()
        .map_while(|key| date.get(key).and_then(date_part))
        .collect::<Vec<_>>()
        .join("-"),
      other => other.to_string(),
    }
  }
}

/// One fuzzy-date part: `{"value": "06"}`, `{"value": 6}` or a bare scalar.
fn date_part(part: &serde_json::Value) -> Option<String> {
  match part {
    serde_json::Value::Object(wrapped) => wrapped.get("value").and_then(scalar_text),
    other => scalar_text(other),
  }
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
  match value {
    serde_json::Value::String(s) => Some(s.clone()),
    serde_json::Value::Number(n) => Some(number_text(n)),
    _ => None,
  }
}

/// Whole-valued floats lose their fraction, so `8363.0` reads as `8363`.
fn number_text(n: &serde_json::Number) -> String {
  if n.is_f64()
    && let Some(f) = n.as_f64()
    && f.is_finite()
    && f.fract() == 0.0
    && f.abs() < 1e15
  {
    return format!("{}", f as i64);
  }
  n.to_string()
}

fn string_value(value: Option<StringValue>) -> Option<String> {
  value.and_then(|v| v.value)
}

impl From<EmploymentSummary> for EmploymentEntry {
  fn from(summary: EmploymentSummary) -> Self {
    let (organization_name, disambiguated_organization_id) = match summary.organization {
      Some(org) => (
        org.name.unwrap_or_default(),
        org
          .disambiguated_organization
          .and_then(|d| d.disambiguated_organization_identifier)
          .as_ref()
          .and_then(scalar_text),
      ),
      None => (String::new(), None),
    };

    EmploymentEntry {
      organization_name,
      disambiguated_organization_id,
      department_name: summary.department_name,
      role_title: summary.role_title,
      end_date: summary.end_date.as_ref().map(EndDate::render),
    }
  }
}

impl From<RecordResponse> for SubjectRecord {
  fn from(response: RecordResponse) -> Self {
    let (name, emails) = match response.person {
      Some(person) => (person.name, person.emails),
      None => (None, None),
    };
    let (given_names, family_name) = match name {
      Some(name) => (string_value(name.given_names), string_value(name.family_name)),
      None => (None, None),
    };

    SubjectRecord {
      given_names,
      family_name,
      emails: emails
        .and_then(|e| e.email)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.email)
        .collect(),
      employments: response
        .activities_summary
        .and_then(|a| a.employments)
        .and_then(|e| e.employment_summary)
        .map(|list| list.into_iter().map(EmploymentEntry::from).collect()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(json: &str) -> SubjectRecord {
    serde_json::from_str::<RecordResponse>(json).unwrap().into()
  }

  #[test]
  fn search_page_decodes_paths_and_count() {
    let json = r#"{
      "result": [
        {"orcid-identifier": {"uri": "https://orcid.org/0000-0002-1825-0097", "path": "0000-0002-1825-0097", "host": "orcid.org"}},
        {"orcid-identifier": {"uri": "https://orcid.org/0000-0001-5109-3700", "path": "0000-0001-5109-3700", "host": "orcid.org"}}
      ],
      "num-found": 2
    }"#;
    let page: SearchPage = serde_json::from_str::<SearchResponse>(json).unwrap().into();
    assert_eq!(page.num_found, 2);
    assert_eq!(page.subjects, vec![
      SubjectId::from("0000-0002-1825-0097"),
      SubjectId::from("0000-0001-5109-3700"),
    ]);
  }

  #[test]
  fn empty_search_has_null_result() {
    let page: SearchPage = serde_json::from_str::<SearchResponse>(r#"{"result": null, "num-found": 0}"#)
      .unwrap()
      .into();
    assert!(page.subjects.is_empty());
    assert_eq!(page.num_found, 0);
  }

  #[test]
  fn full_record_decodes() {
    let r = record(
      r#"{
        "orcid-identifier": {"path": "0000-0002-1825-0097"},
        "person": {
          "name": {
            "given-names": {"value": "Josiah"},
            "family-name": {"value": "Carberry"},
            "credit-name": null
          },
          "emails": {"email": [{"email": "j.carberry@example.edu", "primary": true}]}
        },
        "activities-summary": {
          "employments": {
            "employment-summary": [
              {
                "department-name": "Psychoceramics",
                "role-title": "Professor",
                "start-date": {"year": {"value": "1929"}, "month": null, "day": null},
                "end-date": null,
                "organization": {
                  "name": "Brown University",
                  "address": {"city": "Providence", "region": "RI", "country": "US"},
                  "disambiguated-organization": {
                    "disambiguated-organization-identifier": "6752",
                    "disambiguation-source": "RINGGOLD"
                  }
                }
              },
              {
                "department-name": null,
                "role-title": "Lecturer",
                "end-date": {"year": {"value": "1928"}, "month": {"value": "06"}, "day": null},
                "organization": {"name": "Wesleyan University", "disambiguated-organization": null}
              }
            ]
          }
        }
      }"#,
    );

    assert_eq!(r.full_name(), "Josiah Carberry");
    assert_eq!(r.primary_email(), "j.carberry@example.edu");

    let employments = r.employments();
    assert_eq!(employments.len(), 2);
    assert_eq!(employments[0], EmploymentEntry {
      organization_name:             "Brown University".into(),
      disambiguated_organization_id: Some("6752".into()),
      department_name:               Some("Psychoceramics".into()),
      role_title:                    Some("Professor".into()),
      end_date:                      None,
    });
    assert_eq!(employments[1].organization_name, "Wesleyan University");
    assert_eq!(employments[1].disambiguated_organization_id, None);
    assert_eq!(employments[1].end_date.as_deref(), Some("1928-06"));
  }

  #[test]
  fn numeric_identifier_is_rendered_as_text() {
    let r = record(
      r#"{"activities-summary": {"employments": {"employment-summary": [
        {"organization": {"name": "X", "disambiguated-organization": {"disambiguated-organization-identifier": 8363}}}
      ]}}}"#,
    );
    assert_eq!(
      r.employments()[0].disambiguated_organization_id.as_deref(),
      Some("8363")
    );
  }

  #[test]
  fn missing_employments_decode_as_none() {
    assert_eq!(record(r#"{"person": null}"#).employments, None);
    assert_eq!(record(r#"{"activities-summary": null}"#).employments, None);
    assert_eq!(
      record(r#"{"activities-summary": {"employments": null}}"#).employments,
      None
    );
    assert_eq!(
      record(r#"{"activities-summary": {"employments": {"employment-summary": []}}}"#).employments,
      Some(vec![])
    );
  }

  #[test]
  fn hidden_emails_and_names_decode_empty() {
    let r = record(r#"{"person": {"name": null, "emails": {"email": []}}}"#);
    assert_eq!(r.full_name(), "");
    assert_eq!(r.primary_email(), "private");
  }

  #[test]
  fn end_date_rendering() {
    let full: EndDate = serde_json::from_str(
      r#"{"year": {"value": "2020"}, "month": {"value": "01"}, "day": {"value": "01"}}"#,
    )
    .unwrap();
    assert_eq!(full.render(), "2020-01-01");

    let text: EndDate = serde_json::from_str(r#""2020-01-01""#).unwrap();
    assert_eq!(text.render(), "2020-01-01");

    let blank: EndDate =
      serde_json::from_str(r#"{"year": null, "month": null, "day": null}"#).unwrap();
    assert_eq!(blank.render(), "");

    let numeric: EndDate =
      serde_json::from_str(r#"{"year": {"value": 2020}, "month": {"value": 6}}"#).unwrap();
    assert_eq!(numeric.render(), "2020-6");
  }

  #[test]
  fn unusual_end_date_shapes_still_decode_as_present() {
    let r = record(
      r#"{"activities-summary": {"employments": {"employment-summary": [
        {"end-date": null, "organization": {"name": "X", "disambiguated-organization": {"disambiguated-organization-identifier": "8363"}}},
        {"end-date": {"year": {"value": 2020}}, "organization": {"name": "X", "disambiguated-organization": {"disambiguated-organization-identifier": "8363"}}},
        {"end-date": 2021, "organization": {"name": "X"}},
        {"end-date": [2022], "organization": {"name": "X"}}
      ]}}}"#,
    );

    let end_dates: Vec<Option<&str>> =
      r.employments().iter().map(|e| e.end_date.as_deref()).collect();
    assert_eq!(end_dates, vec![None, Some("2020"), Some("2021"), Some("[2022]")]);
  }

  #[test]
  fn whole_float_identifier_matches_integer_form() {
    let r = record(
      r#"{"activities-summary": {"employments": {"employment-summary": [
        {"organization": {"name": "X", "disambiguated-organization": {"disambiguated-organization-identifier": 8363.0}}},
        {"organization": {"name": "Y", "disambiguated-organization": {"disambiguated-organization-identifier": 8363.5}}}
      ]}}}"#,
    );
    let ids: Vec<Option<&str>> = r
      .employments()
      .iter()
      .map(|e| e.disambiguated_organization_id.as_deref())
      .collect();
    assert_eq!(ids, vec![Some("8363"), Some("8363.5")]);
  }
}
