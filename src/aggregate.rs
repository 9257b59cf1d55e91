// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fold all PRs into the three report views (by-reviewer, by-author, ready-to-merge) plus the name registry
// role: aggregation/core
// inputs: Canonical PullRequest slice in snapshot order; ReportParams (threshold, now, labels)
// outputs: Complete Report as plain serializable data
// invariants:
// - Reviewer pr_details hold at most one entry per PR number; first write wins and pending_count follows it
// - pending_count equals the number of that reviewer's entries with is_pending = true
// - Post-pass sorts: pending-first (stable) per reviewer; descending age per author and for ready_to_merge
// errors: None; aggregation is a total function over canonical records
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::classify::classify;
use crate::derived::{age_in_days, ticket_refs};
use crate::model::{
  AuthorAggregate, AuthorPrEntry, PrStatus, PullRequest, ReadyToMergeEntry, Report, ReviewState,
  ReviewerAggregate, ReviewerPrEntry,
};
use crate::names::NameRegistry;
use crate::resolve::{requested_reviewers, resolve_review_states};

#[derive(Debug)]
pub struct ReportParams {
  pub repo: String,
  pub required_approvals: u32,
  pub now: DateTime<Utc>,
  pub generated_at: String,
}

/// Accumulator state threaded through the per-PR fold. Everything global that
/// the loop builds up lives here, not in captured outer variables.
#[derive(Default)]
struct Accumulator {
  reviewers: BTreeMap<String, ReviewerAggregate>,
  authors: BTreeMap<String, AuthorAggregate>,
  ready_to_merge: Vec<ReadyToMergeEntry>,
  names: NameRegistry,
}

/// Fold the snapshot into the report. Input order is processing order; the
/// post-pass sorts below are the only reordering applied.
pub fn build_report(pull_requests: &[PullRequest], params: &ReportParams) -> Report {
  let mut acc = pull_requests.iter().fold(Accumulator::default(), |mut acc, pr| {
    fold_pull_request(&mut acc, pr, params);
    acc
  });

  for aggregate in acc.reviewers.values_mut() {
    // Stable: pending entries first, insertion order preserved within each half.
    aggregate.pr_details.sort_by_key(|entry| !entry.is_pending);
  }
  for aggregate in acc.authors.values_mut() {
    aggregate.pr_details.sort_by(|a, b| b.age_days.cmp(&a.age_days));
  }
  acc.ready_to_merge.sort_by(|a, b| b.age_days.cmp(&a.age_days));

  Report {
    repo: params.repo.clone(),
    generated_at: params.generated_at.clone(),
    required_approvals: params.required_approvals,
    total_prs: pull_requests.len(),
    reviewers: acc.reviewers,
    authors: acc.authors,
    ready_to_merge: acc.ready_to_merge,
    names: acc.names,
  }
}

fn fold_pull_request(acc: &mut Accumulator, pr: &PullRequest, params: &ReportParams) {
  acc.names.record(&pr.author);

  let resolved = resolve_review_states(pr, &mut acc.names);
  let requested = requested_reviewers(pr, &mut acc.names);
  let status = classify(&resolved, params.required_approvals);
  let age_days = age_in_days(pr.created_at, params.now);
  let age_tier = crate::model::AgeTier::for_age(age_days);
  let tickets = ticket_refs(&pr.title);

  // Reviewer-status annotations: requested-but-unreviewed first, then every
  // resolved state in first-submission order.
  let mut annotations: Vec<String> = Vec::new();
  for login in &requested {
    if !resolved.iter().any(|r| r.login == *login) {
      annotations.push(format!("{} (requested)", login));
    }
  }
  for reviewer in &resolved {
    annotations.push(format!("{} ({})", reviewer.login, reviewer.state.label()));
  }

  // Union of requested and resolved logins; requested order first, then the
  // resolved-only stragglers.
  let mut involved: Vec<String> = requested.clone();
  for reviewer in &resolved {
    if !involved.contains(&reviewer.login) {
      involved.push(reviewer.login.clone());
    }
  }

  for login in &involved {
    let resolved_state = resolved.iter().find(|r| r.login == *login).map(|r| &r.state);
    let is_pending = match resolved_state {
      None => true, // requested and not yet reviewed
      Some(state) => matches!(
        state,
        ReviewState::Commented | ReviewState::ChangesRequested | ReviewState::Pending
      ),
    };

    let aggregate = acc.reviewers.entry(login.clone()).or_default();
    // First write wins for a given reviewer+PR; a duplicate record for the
    // same PR number neither appends nor counts again.
    if aggregate.pr_details.iter().any(|entry| entry.number == pr.number) {
      continue;
    }
    if is_pending {
      aggregate.pending_count += 1;
    }
    aggregate.pr_details.push(ReviewerPrEntry {
      number: pr.number,
      title: pr.title.clone(),
      author: pr.author.login.clone(),
      age_days,
      age_tier,
      tickets: tickets.clone(),
      status,
      is_draft: pr.is_draft,
      is_pending,
    });
  }

  let author_aggregate = acc.authors.entry(pr.author.login.clone()).or_default();
  author_aggregate.count += 1;
  author_aggregate.pr_details.push(AuthorPrEntry {
    number: pr.number,
    title: pr.title.clone(),
    age_days,
    age_tier,
    tickets,
    status,
    is_draft: pr.is_draft,
    reviewer_status: annotations.join(", "),
  });

  if status == PrStatus::ReadyToMerge {
    let approved_by: Vec<String> = resolved
      .iter()
      .filter(|r| r.state == ReviewState::Approved)
      .map(|r| r.login.clone())
      .collect();
    acc.ready_to_merge.push(ReadyToMergeEntry {
      number: pr.number,
      title: pr.title.clone(),
      author: pr.author.login.clone(),
      age_days,
      age_tier,
      tickets: ticket_refs(&pr.title),
      approved_by,
    });
  }
}
