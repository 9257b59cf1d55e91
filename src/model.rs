// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the canonical PR/review model and the serializable report aggregates shared by aggregation and rendering
// role: model/types
// outputs: Canonical PullRequest records; ReviewState/PrStatus/AgeTier enums; Report with stable field names
// invariants: ReviewState precedence is a total order; report maps are keyed by login; JSON field shapes are additive only
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::names::NameRegistry;

/// A GitHub-style identity: login is the stable key, display name is best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
  pub login: String,
  pub display_name: Option<String>,
}

impl Identity {
  pub fn from_login<S: Into<String>>(login: S) -> Self {
    Identity {
      login: login.into(),
      display_name: None,
    }
  }
}

/// One review event as submitted; a reviewer may appear many times per PR.
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
  pub reviewer: Identity,
  pub state: ReviewState,
}

/// Canonical shape of one open pull request, as produced by the input adapter.
/// All defaulting for absent raw fields happens in the adapter, never here.
#[derive(Debug, Clone)]
pub struct PullRequest {
  pub number: i64,
  pub title: String,
  pub author: Identity,
  pub created_at: Option<DateTime<Utc>>,
  pub is_draft: bool,
  pub requested_reviewers: Vec<Identity>,
  pub review_submissions: Vec<ReviewSubmission>,
}

/// Review states in strictly decreasing precedence:
/// `ChangesRequested > Approved > Commented > Dismissed > Pending > Other`.
///
/// Precedence decides which state wins when a reviewer has submitted more than
/// one review on the same PR. Unrecognized states are kept verbatim in `Other`
/// and sit at the bottom of the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewState {
  ChangesRequested,
  Approved,
  Commented,
  Dismissed,
  Pending,
  Other(String),
}

impl ReviewState {
  pub fn parse(raw: &str) -> Self {
    match raw {
      "CHANGES_REQUESTED" => ReviewState::ChangesRequested,
      "APPROVED" => ReviewState::Approved,
      "COMMENTED" => ReviewState::Commented,
      "DISMISSED" => ReviewState::Dismissed,
      "PENDING" => ReviewState::Pending,
      other => ReviewState::Other(other.to_string()),
    }
  }

  fn precedence(&self) -> u8 {
    match self {
      ReviewState::ChangesRequested => 5,
      ReviewState::Approved => 4,
      ReviewState::Commented => 3,
      ReviewState::Dismissed => 2,
      ReviewState::Pending => 1,
      ReviewState::Other(_) => 0,
    }
  }

  /// Human-readable label used in reviewer-status annotations.
  pub fn label(&self) -> String {
    match self {
      ReviewState::ChangesRequested => "requested changes".to_string(),
      ReviewState::Approved => "approved".to_string(),
      ReviewState::Commented => "commented".to_string(),
      ReviewState::Dismissed => "dismissed".to_string(),
      ReviewState::Pending => "pending".to_string(),
      ReviewState::Other(raw) => raw.to_lowercase(),
    }
  }
}

impl Ord for ReviewState {
  fn cmp(&self, other: &Self) -> Ordering {
    match self.precedence().cmp(&other.precedence()) {
      // Two unrecognized states tie on precedence; order them by raw text so
      // the comparison stays consistent with Eq.
      Ordering::Equal => match (self, other) {
        (ReviewState::Other(a), ReviewState::Other(b)) => a.cmp(b),
        _ => Ordering::Equal,
      },
      unequal => unequal,
    }
  }
}

impl PartialOrd for ReviewState {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// A reviewer's current stance on one PR: the precedence-highest submitted state.
#[derive(Debug, Clone)]
pub struct ResolvedReviewer {
  pub login: String,
  pub state: ReviewState,
}

/// Overall status of one PR, derived from resolved states and the approval threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrStatus {
  NeedsReview,
  ChangesRequested,
  ReadyToMerge,
}

/// Display-severity tier for a PR's age. Boundary ages (2, 4, 6) fall low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeTier {
  Normal,
  Medium,
  High,
  Severe,
}

impl AgeTier {
  pub fn for_age(age_days: i64) -> Self {
    if age_days > 6 {
      AgeTier::Severe
    } else if age_days > 4 {
      AgeTier::High
    } else if age_days > 2 {
      AgeTier::Medium
    } else {
      AgeTier::Normal
    }
  }
}

/// One PR as seen from a reviewer's worklist.
#[derive(Debug, Serialize)]
pub struct ReviewerPrEntry {
  pub number: i64,
  pub title: String,
  pub author: String,
  pub age_days: i64,
  pub age_tier: AgeTier,
  pub tickets: Vec<String>,
  pub status: PrStatus,
  pub is_draft: bool,
  pub is_pending: bool,
}

/// Per-reviewer rollup across the whole PR set.
/// `pr_details` holds at most one entry per PR number (first write wins).
#[derive(Debug, Default, Serialize)]
pub struct ReviewerAggregate {
  pub pending_count: u64,
  pub pr_details: Vec<ReviewerPrEntry>,
}

/// One PR as seen from its author's list, with the joined reviewer-status annotation.
#[derive(Debug, Serialize)]
pub struct AuthorPrEntry {
  pub number: i64,
  pub title: String,
  pub age_days: i64,
  pub age_tier: AgeTier,
  pub tickets: Vec<String>,
  pub status: PrStatus,
  pub is_draft: bool,
  pub reviewer_status: String,
}

#[derive(Debug, Default, Serialize)]
pub struct AuthorAggregate {
  pub count: u64,
  pub pr_details: Vec<AuthorPrEntry>,
}

/// A PR whose approval count reached the threshold, plus who approved it.
#[derive(Debug, Serialize)]
pub struct ReadyToMergeEntry {
  pub number: i64,
  pub title: String,
  pub author: String,
  pub age_days: i64,
  pub age_tier: AgeTier,
  pub tickets: Vec<String>,
  pub approved_by: Vec<String>,
}

/// The complete output contract handed to rendering: plain data, no behavior.
#[derive(Debug, Serialize)]
pub struct Report {
  pub repo: String,
  pub generated_at: String,
  pub required_approvals: u32,
  pub total_prs: usize,
  pub reviewers: BTreeMap<String, ReviewerAggregate>,
  pub authors: BTreeMap<String, AuthorAggregate>,
  pub ready_to_merge: Vec<ReadyToMergeEntry>,
  pub names: NameRegistry,
}
