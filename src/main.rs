use anyhow::Result;
use clap::Parser;

mod adapter;
mod aggregate;
mod classify;
mod cli;
mod derived;
mod ext;
mod model;
mod names;
mod params;
mod render;
mod resolve;
mod snapshot;
mod util;

use crate::cli::{Cli, Emit, normalize};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: load and adapt the snapshot
  let text = snapshot::read_snapshot(&cfg.input)?;
  let pull_requests = snapshot::parse_pull_requests(&text)?;

  // Phase 3: aggregate into the report
  let now = util::effective_now(util::parse_now_override(cfg.now_override.as_deref()));
  let report_params = params::build_report_params(&cfg, now);
  let report = aggregate::build_report(&pull_requests, &report_params);

  // Phase 4: emit
  let rendered = match cfg.emit {
    Emit::Html => render::render_dashboard(&report)?,
    Emit::Json => render::render_json(&report)?,
  };
  util::write_output(&cfg.out, &rendered)
}
