use chrono::{DateTime, Utc};

use crate::aggregate::ReportParams;
use crate::cli::EffectiveConfig;
use crate::util;

pub fn build_report_params(cfg: &EffectiveConfig, now: DateTime<Utc>) -> ReportParams {
  ReportParams {
    repo: cfg.repo.clone(),
    required_approvals: cfg.required_approvals,
    now,
    generated_at: util::format_generated_at(now, cfg.tz),
  }
}
