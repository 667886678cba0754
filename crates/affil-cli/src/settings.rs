//! Layered runtime settings.
//!
//! Precedence, lowest first: built-in defaults, the optional TOML file given
//! with `--config`, `AFFIL_*` environment variables, command-line flags.

use std::{path::Path, time::Duration};

use affil_core::enumerate::DEFAULT_PAGE_SIZE;
use affil_orcid::{ClientConfig, DEFAULT_BASE_URL};
use config::{
  Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState,
};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  pub base_url:     String,
  pub page_size:    u32,
  /// Per-request timeout in seconds; `0` disables it.
  pub timeout_secs: u64,
  pub user_agent:   String,
}

/// Values given on the command line. They win over every other source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub base_url:  Option<String>,
  pub page_size: Option<u32>,
}

impl Settings {
  pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
    let mut builder = defaults()?;
    if let Some(path) = file {
      builder = builder.add_source(File::from(path));
    }
    finish(builder.add_source(environment()), overrides)
  }

  pub fn client_config(&self) -> ClientConfig {
    ClientConfig {
      base_url:   self.base_url.clone(),
      timeout:    (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
      user_agent: self.user_agent.clone(),
    }
  }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
  Config::builder()
    .set_default("base_url", DEFAULT_BASE_URL)?
    .set_default("page_size", i64::from(DEFAULT_PAGE_SIZE))?
    .set_default("timeout_secs", 30_i64)?
    .set_default("user_agent", concat!("affil/", env!("CARGO_PKG_VERSION")))
}

/// `AFFIL_*` variables, e.g. `AFFIL_BASE_URL`, `AFFIL_PAGE_SIZE`.
fn environment() -> Environment {
  Environment::with_prefix("AFFIL").try_parsing(true)
}

fn finish(
  builder: ConfigBuilder<DefaultState>,
  overrides: &Overrides,
) -> Result<Settings, ConfigError> {
  builder
    .set_override_option("base_url", overrides.base_url.clone())?
    .set_override_option("page_size", overrides.page_size.map(i64::from))?
    .build()?
    .try_deserialize()
}
