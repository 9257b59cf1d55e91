// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Read the PR snapshot (file or stdin), locate the PR collection, and adapt records to canonical form
// role: input/loader
// inputs: --input path or "-"; snapshot JSON text
// outputs: Vec<PullRequest> in snapshot order
// side_effects: Reads the filesystem or stdin
// invariants:
// - Input-shape problems (unreadable, unparseable, no PR collection) abort before any aggregation
// - Per-record field problems never abort; the adapter degrades them
// errors: Surfaced via anyhow with the offending path/shape named
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Read;

use anyhow::{Context, Result, bail};

use crate::adapter;
use crate::ext::serde_json::JsonFetch;
use crate::model::PullRequest;

// Shapes the fetch step is known to hand us, most specific envelope last.
const COLLECTION_PATHS: [&str; 3] = [
  "pullRequests",
  "pullRequests.nodes",
  "data.repository.pullRequests.nodes",
];

/// Read the snapshot text from a file path, or stdin when `input` is "-".
pub fn read_snapshot(input: &str) -> Result<String> {
  if input == "-" {
    let mut buf = String::new();
    std::io::stdin()
      .read_to_string(&mut buf)
      .context("reading snapshot from stdin")?;
    return Ok(buf);
  }

  std::fs::read_to_string(input).with_context(|| format!("reading snapshot file {}", input))
}

/// Parse the snapshot and adapt every record.
/// Anything that is not a recognizable PR collection is fatal; nothing partial
/// is produced past this point.
pub fn parse_pull_requests(text: &str) -> Result<Vec<PullRequest>> {
  let value: serde_json::Value = serde_json::from_str(text).context("parsing snapshot JSON")?;
  let records = locate_records(&value)?;
  Ok(records.iter().map(adapter::pull_request_from_value).collect())
}

fn locate_records(value: &serde_json::Value) -> Result<&Vec<serde_json::Value>> {
  if let Some(list) = value.as_array() {
    return Ok(list);
  }

  for path in COLLECTION_PATHS {
    if let Some(list) = value.fetch(path).as_array() {
      return Ok(list);
    }
  }

  bail!(
    "snapshot has no pull-request collection; expected a top-level array or one of: {}",
    COLLECTION_PATHS.join(", ")
  )
}
