//! `affil`: list the current faculty of an organization from the ORCID
//! public registry.
//!
//! # Usage
//!
//! ```text
//! affil --orgid 6752
//! affil --orgid 6752 --format csv --quiet > faculty.csv
//! affil --orgid 6752 --config ~/.config/affil.toml
//! ```
//!
//! Every ORCID record affiliated with the Ringgold ID is fetched in turn, so
//! a large organization takes minutes. Anyone with an employment entry at
//! the organization and no end date is reported.

mod output;
mod progress;
mod settings;

use std::{io, path::PathBuf};

use affil_core::{OrganizationId, Pipeline};
use affil_orcid::OrcidClient;
use anyhow::{Context, Result};
use clap::Parser;
use output::Format;
use progress::BarProgress;
use settings::{Overrides, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "affil",
  version,
  about = "List current faculty of an organization from the ORCID registry"
)]
struct Args {
  /// Ringgold ID of the organization to search for.
  #[arg(short, long, env = "AFFIL_ORGID")]
  orgid: OrganizationId,

  /// Output format.
  #[arg(short, long, value_enum, ignore_case = true, default_value_t = Format::Json)]
  format: Format,

  /// Do not display the progress bar (e.g. for cron or background jobs).
  #[arg(short, long)]
  quiet: bool,

  /// Path to a TOML settings file (base_url, page_size, timeout_secs,
  /// user_agent).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Registry API base URL (default: https://pub.orcid.org/v2.0/).
  #[arg(long)]
  base_url: Option<String>,

  /// Search results requested per page.
  #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
  page_size: Option<u32>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // Diagnostics go to stderr; stdout carries only the result.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let settings = Settings::load(args.config.as_deref(), &Overrides {
    base_url:  args.base_url.clone(),
    page_size: args.page_size,
  })
  .context("failed to load settings")?;

  let client = OrcidClient::new(settings.client_config())?;
  tracing::info!(
    org = %args.orgid,
    base_url = %client.base_url(),
    page_size = settings.page_size,
    "searching registry"
  );

  let pipeline = Pipeline::new(client, args.orgid.clone()).page_size(settings.page_size);
  let result = if args.quiet {
    pipeline.run().await
  } else {
    pipeline.with_progress(BarProgress::new()?).run().await
  };

  output::emit(result, &args.orgid, args.format, io::stdout().lock())
}
