// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for time parsing/formatting, the injectable "now" reference, output writing, and man page rendering
// role: utilities/helpers
// inputs: RFC3339 strings; DateTime<Utc>; output path or "-"; clap CommandFactory
// outputs: Parsed UTC instants, formatted generated-at stamps, written report files, man page text
// side_effects: write_output writes files and creates parent directories
// invariants:
// - effective_now is the single source of "now"; age math never reads the wall clock directly
// - parse_timestamp accepts RFC3339 only; anything else yields None
// errors: render_man_page surfaces IO errors; parsing helpers degrade to None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Context;
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use clap::{CommandFactory, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Tz {
  Local,
  Utc,
}

/// Returns the effective "now" given an optional override.
///
/// When `override_now` is `Some`, that instant is returned; otherwise
/// the current time is used. Centralizes our handling of test
/// determinism without sprinkling `Utc::now()` throughout the code.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Parse a `--now-override` string into a UTC instant.
/// Accepts RFC3339 (e.g. 2025-08-15T12:00:00Z) or a naive timestamp
/// formatted as `%Y-%m-%dT%H:%M:%S`, interpreted as UTC.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Utc>> {
  s.and_then(|raw| {
    DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Utc))
      .or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .map(|ndt| ndt.and_utc())
      })
  })
}

/// Parse an ISO-8601/RFC3339 timestamp from a snapshot record.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Utc))
}

/// Format the generated-at stamp shown in the report, in the requested zone (label only).
pub fn format_generated_at(now: DateTime<Utc>, tz: Tz) -> String {
  match tz {
    Tz::Local => now.with_timezone(&Local).format("%Y-%m-%dT%H:%M:%S").to_string(),
    Tz::Utc => now.format("%Y-%m-%dT%H:%M:%S").to_string(),
  }
}

/// Write rendered output to a file, or stdout when `out` is "-".
/// Parent directories are created as needed.
pub fn write_output(out: &str, text: &str) -> anyhow::Result<()> {
  if out == "-" {
    print!("{}", text);
    return Ok(());
  }

  let path = std::path::Path::new(out);
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent).with_context(|| format!("creating output directory for {}", out))?;
    }
  }

  std::fs::write(path, text).with_context(|| format!("writing report to {}", out))
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
