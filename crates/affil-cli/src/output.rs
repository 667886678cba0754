//! Rendering of faculty records to stdout.

use std::io::Write;

use affil_core::{FacultyRecord, OrganizationId};
use anyhow::{Context, Result};
use clap::ValueEnum;

/// CSV header, in field order of [`FacultyRecord`].
const COLUMNS: [&str; 6] = ["orcid", "name", "email", "orgname", "depname", "title"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
  /// Pretty-printed JSON array.
  #[default]
  Json,
  /// Comma-separated values with a header row.
  Csv,
}

/// Render a finished run. A failed run writes nothing and becomes the
/// process error.
pub fn emit<W: Write>(
  result: affil_core::Result<Vec<FacultyRecord>>,
  org: &OrganizationId,
  format: Format,
  out: W,
) -> Result<()> {
  let faculty =
    result.with_context(|| format!("failed to list faculty for organization {org}"))?;
  render(&faculty, format, out)
}

pub fn render<W: Write>(records: &[FacultyRecord], format: Format, mut out: W) -> Result<()> {
  match format {
    Format::Json => {
      serde_json::to_writer_pretty(&mut out, records).context("writing JSON")?;
      writeln!(out)?;
    }
    Format::Csv => {
      // Header written by hand so an empty result still has one.
      let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(&mut out);
      writer.write_record(COLUMNS).context("writing CSV header")?;
      for record in records {
        writer.serialize(record).context("writing CSV row")?;
      }
      writer.flush()?;
    }
  }
  out.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use affil_core::{Error, RegistryError, SubjectId};

  use super::*;

  fn records() -> Vec<FacultyRecord> {
    vec![
      FacultyRecord {
        subject:      SubjectId::from("0000-0002-1825-0097"),
        name:         "Josiah Carberry".into(),
        email:        "private".into(),
        organization: "Brown University".into(),
        department:   Some("Psychoceramics".into()),
        title:        Some("Professor".into()),
      },
      FacultyRecord {
        subject:      SubjectId::from("0000-0001-5109-3700"),
        name:         "Laure Haak".into(),
        email:        "lhaak@example.org".into(),
        organization: "Brown University, Providence".into(),
        department:   None,
        title:        None,
      },
    ]
  }

  fn rendered(records: &[FacultyRecord], format: Format) -> String {
    let mut buf = Vec::new();
    render(records, format, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn json_is_indented_array() {
    let out = rendered(&records(), Format::Json);
    assert!(out.starts_with("[\n  {\n    \"orcid\": \"0000-0002-1825-0097\","));
    assert!(out.ends_with("]\n"));

    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[1]["depname"], serde_json::Value::Null);
    assert_eq!(parsed[1]["email"], "lhaak@example.org");
  }

  #[test]
  fn empty_json_is_empty_array() {
    assert_eq!(rendered(&[], Format::Json), "[]\n");
  }

  #[test]
  fn csv_has_fixed_columns() {
    let out = rendered(&records(), Format::Csv);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![
      "orcid,name,email,orgname,depname,title",
      "0000-0002-1825-0097,Josiah Carberry,private,Brown University,Psychoceramics,Professor",
      "0000-0001-5109-3700,Laure Haak,lhaak@example.org,\"Brown University, Providence\",,",
    ]);
  }

  #[test]
  fn empty_csv_still_has_header() {
    assert_eq!(rendered(&[], Format::Csv), "orcid,name,email,orgname,depname,title\n");
  }

  fn failed_run() -> affil_core::Result<Vec<FacultyRecord>> {
    Err(Error::Classify {
      subject: SubjectId::from("0000-0002-1825-0097"),
      source:  RegistryError::HttpStatus {
        status: 503,
        url:    "https://pub.orcid.org/v2.0/0000-0002-1825-0097/record".into(),
      },
    })
  }

  #[test]
  fn failed_run_writes_nothing() {
    let org = OrganizationId::new("8363").unwrap();

    for format in [Format::Json, Format::Csv] {
      let mut buf = Vec::new();
      let err = emit(failed_run(), &org, format, &mut buf).unwrap_err();

      assert!(buf.is_empty());
      assert!(err.to_string().contains("organization 8363"));
      assert!(format!("{err:#}").contains("503"));
    }
  }

  #[test]
  fn successful_run_is_rendered() {
    let org = OrganizationId::new("8363").unwrap();
    let mut buf = Vec::new();
    emit(Ok(records()), &org, Format::Csv, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 3);
  }
}
