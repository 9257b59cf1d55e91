use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::util::Tz;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Emit {
  Html,
  Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "pr-review-report",
    version,
    about = "Render open pull-request review status into a static HTML dashboard",
    long_about = None
)]
pub struct Cli {
  /// Snapshot of open pull requests (JSON); "-" reads stdin
  #[arg(long, default_value = "-")]
  pub input: String,

  /// Output location (default stdout "-")
  #[arg(long, default_value = "-")]
  pub out: String,

  /// Output flavor: the HTML dashboard or the raw aggregate JSON
  #[arg(long, value_enum, default_value_t = Emit::Html)]
  pub emit: Emit,

  /// Repository label shown in the dashboard header
  #[arg(long, default_value = "")]
  pub repo: String,

  /// Approvals required before a PR counts as ready to merge
  #[arg(long, default_value_t = 3)]
  pub required_approvals: u32,

  /// Timezone for the generated-at stamp (label only)
  #[arg(long, value_enum, default_value_t = Tz::Local)]
  pub tz: Tz,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant for age computation (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub input: String,
  pub out: String,
  pub emit: Emit,
  pub repo: String,
  pub required_approvals: u32,
  pub tz: Tz,
  pub now_override: Option<String>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  if cli.required_approvals == 0 {
    bail!("--required-approvals must be at least 1");
  }

  Ok(EffectiveConfig {
    input: cli.input,
    out: cli.out,
    emit: cli.emit,
    repo: cli.repo,
    required_approvals: cli.required_approvals,
    tz: cli.tz,
    now_override: cli.now_override,
  })
}
