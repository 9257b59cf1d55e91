// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Normalize one raw PR record (GraphQL-ish JSON) into the canonical PullRequest shape
// role: adapter/input
// inputs: &serde_json::Value for one PR record
// outputs: Canonical PullRequest with all defaulting applied
// invariants:
// - Missing author becomes the "Unknown" sentinel identity; aggregation never sees an absent author
// - Absent review/request collections degrade to empty vectors, never to errors
// - Review entries without an author login and team requests without a login are dropped
// errors: None; adaptation is a total function over any JSON value
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::ext::serde_json::JsonFetch;
use crate::model::{Identity, PullRequest, ReviewState, ReviewSubmission};
use crate::util;

/// Login substituted when a record carries no author identity.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Build one canonical record from a raw snapshot entry.
pub fn pull_request_from_value(raw: &serde_json::Value) -> PullRequest {
  let number = raw.fetch("number").to::<i64>().unwrap_or(0);
  let title = raw.fetch("title").to_or_default::<String>();
  let is_draft = raw.fetch("isDraft").to_or_default::<bool>();

  let created_at = raw
    .fetch("createdAt")
    .to::<String>()
    .and_then(|s| util::parse_timestamp(&s));

  let author = match raw.fetch("author.login").to::<String>() {
    Some(login) => Identity {
      login,
      display_name: raw.fetch("author.name").to::<String>(),
    },
    None => Identity::from_login(UNKNOWN_AUTHOR),
  };

  PullRequest {
    number,
    title,
    author,
    created_at,
    is_draft,
    requested_reviewers: requested_reviewers_from(raw),
    review_submissions: review_submissions_from(raw),
  }
}

/// Individual identities currently requested; team entries carry a name but no
/// login and are dropped here.
fn requested_reviewers_from(raw: &serde_json::Value) -> Vec<Identity> {
  let Some(nodes) = raw.fetch("reviewRequests.nodes").as_array() else {
    return Vec::new();
  };

  let mut out: Vec<Identity> = Vec::with_capacity(nodes.len());
  for node in nodes {
    let Some(login) = node.fetch("requestedReviewer.login").to::<String>() else {
      continue;
    };
    out.push(Identity {
      login,
      display_name: node.fetch("requestedReviewer.name").to::<String>(),
    });
  }

  out
}

/// Every review event ever submitted, in input order; entries with no reviewer
/// identity are dropped.
fn review_submissions_from(raw: &serde_json::Value) -> Vec<ReviewSubmission> {
  let Some(nodes) = raw.fetch("reviews.nodes").as_array() else {
    return Vec::new();
  };

  let mut out: Vec<ReviewSubmission> = Vec::with_capacity(nodes.len());
  for node in nodes {
    let Some(login) = node.fetch("author.login").to::<String>() else {
      continue;
    };
    let state = ReviewState::parse(&node.fetch("state").to_or_default::<String>());
    out.push(ReviewSubmission {
      reviewer: Identity {
        login,
        display_name: node.fetch("author.name").to::<String>(),
      },
      state,
    });
  }

  out
}
