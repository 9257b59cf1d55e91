use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

// Project ticket tokens like OCMUI-42: uppercase project code, dash, digits.
static TICKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][A-Z0-9]+-\d+\b").unwrap());

/// Whole days elapsed since `created_at`, floored over calendar milliseconds.
/// Missing timestamps and future timestamps both degrade to 0.
pub fn age_in_days(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
  match created_at {
    Some(created) => {
      let elapsed_ms = now.signed_duration_since(created).num_milliseconds();
      if elapsed_ms <= 0 {
        0
      } else {
        elapsed_ms / 86_400_000
      }
    }
    None => 0,
  }
}

/// All ticket references embedded in a title, deduplicated in first-occurrence order.
pub fn ticket_refs(title: &str) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();
  for found in TICKET_RE.find_iter(title) {
    let token = found.as_str().to_string();
    if !out.contains(&token) {
      out.push(token);
    }
  }
  out
}
