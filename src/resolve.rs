// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Collapse per-reviewer review submissions into one current state and extract requested reviewers
// role: resolution/core
// inputs: One canonical PullRequest; mutable NameRegistry
// outputs: ResolvedReviewer list in first-submission order; requested login list in request order
// side_effects: Records display names into the NameRegistry
// invariants:
// - Exactly one resolved state per reviewer per PR; the author's own submissions are excluded
// - A later lower-precedence submission never downgrades an already-resolved higher state
// - Requested logins are distinct and keep input order
// errors: None; resolution is a total function over the record
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::model::{PullRequest, ResolvedReviewer};
use crate::names::NameRegistry;

/// Resolve every reviewer's current stance on one PR.
///
/// The precedence order on `ReviewState` decides which submission wins when a
/// reviewer shows up more than once; insertion order only decides where the
/// reviewer sits in the output list.
pub fn resolve_review_states(pr: &PullRequest, names: &mut NameRegistry) -> Vec<ResolvedReviewer> {
  let mut resolved: Vec<ResolvedReviewer> = Vec::new();

  for submission in &pr.review_submissions {
    if submission.reviewer.login == pr.author.login {
      continue;
    }

    names.record(&submission.reviewer);

    match resolved.iter_mut().find(|r| r.login == submission.reviewer.login) {
      Some(existing) => {
        if submission.state > existing.state {
          existing.state = submission.state.clone();
        }
      }
      None => resolved.push(ResolvedReviewer {
        login: submission.reviewer.login.clone(),
        state: submission.state.clone(),
      }),
    }
  }

  resolved
}

/// Ordered, distinct logins currently requested on a PR.
/// Team requests were already dropped by the adapter; only individuals remain.
pub fn requested_reviewers(pr: &PullRequest, names: &mut NameRegistry) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();

  for identity in &pr.requested_reviewers {
    names.record(identity);
    if !out.contains(&identity.login) {
      out.push(identity.login.clone());
    }
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{Identity, ReviewState, ReviewSubmission};

  fn submission(login: &str, state: ReviewState) -> ReviewSubmission {
    ReviewSubmission {
      reviewer: Identity::from_login(login),
      state,
    }
  }

  fn pr_with_submissions(author: &str, submissions: Vec<ReviewSubmission>) -> PullRequest {
    PullRequest {
      number: 1,
      title: "t".into(),
      author: Identity::from_login(author),
      created_at: None,
      is_draft: false,
      requested_reviewers: vec![],
      review_submissions: submissions,
    }
  }

  #[test]
  fn highest_precedence_wins_not_last_write() {
    let pr = pr_with_submissions(
      "author",
      vec![
        submission("alice", ReviewState::Commented),
        submission("alice", ReviewState::Approved),
        submission("alice", ReviewState::Commented),
      ],
    );
    let mut names = NameRegistry::default();
    let resolved = resolve_review_states(&pr, &mut names);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].login, "alice");
    assert_eq!(resolved[0].state, ReviewState::Approved);
  }

  #[test]
  fn author_self_reviews_are_excluded() {
    let pr = pr_with_submissions(
      "alice",
      vec![
        submission("alice", ReviewState::Approved),
        submission("bob", ReviewState::Commented),
      ],
    );
    let mut names = NameRegistry::default();
    let resolved = resolve_review_states(&pr, &mut names);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].login, "bob");
  }

  #[test]
  fn output_keeps_first_submission_order() {
    let pr = pr_with_submissions(
      "author",
      vec![
        submission("carol", ReviewState::Commented),
        submission("bob", ReviewState::Approved),
        submission("carol", ReviewState::Approved),
      ],
    );
    let mut names = NameRegistry::default();
    let resolved = resolve_review_states(&pr, &mut names);
    let logins: Vec<&str> = resolved.iter().map(|r| r.login.as_str()).collect();
    assert_eq!(logins, vec!["carol", "bob"]);
  }

  #[test]
  fn resolver_records_display_names() {
    let mut pr = pr_with_submissions("author", vec![]);
    pr.review_submissions.push(ReviewSubmission {
      reviewer: Identity {
        login: "bob".into(),
        display_name: Some("Bob B".into()),
      },
      state: ReviewState::Commented,
    });
    let mut names = NameRegistry::default();
    resolve_review_states(&pr, &mut names);
    assert_eq!(names.display_name("bob"), Some("Bob B"));
  }

  #[test]
  fn requested_logins_are_distinct_in_request_order() {
    let mut pr = pr_with_submissions("author", vec![]);
    pr.requested_reviewers = vec![
      Identity::from_login("erin"),
      Identity {
        login: "frank".into(),
        display_name: Some("Frank F".into()),
      },
      Identity::from_login("erin"),
    ];
    let mut names = NameRegistry::default();
    let requested = requested_reviewers(&pr, &mut names);
    assert_eq!(requested, vec!["erin", "frank"]);
    assert_eq!(names.display_name("frank"), Some("Frank F"));
  }

  mod properties {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    const LOGINS: [&str; 3] = ["alice", "bob", "carol"];

    fn state_for(index: usize) -> ReviewState {
      match index {
        0 => ReviewState::ChangesRequested,
        1 => ReviewState::Approved,
        2 => ReviewState::Commented,
        3 => ReviewState::Dismissed,
        4 => ReviewState::Pending,
        _ => ReviewState::Other("UNKNOWN".into()),
      }
    }

    fn resolve_to_map(pairs: &[(usize, usize)]) -> BTreeMap<String, ReviewState> {
      let submissions = pairs
        .iter()
        .map(|(login, state)| submission(LOGINS[*login], state_for(*state)))
        .collect();
      let pr = pr_with_submissions("author", submissions);
      let mut names = NameRegistry::default();
      resolve_review_states(&pr, &mut names)
        .into_iter()
        .map(|r| (r.login, r.state))
        .collect()
    }

    proptest! {
      #[test]
      fn resolution_is_invariant_under_submission_reordering(
        (original, shuffled) in proptest::collection::vec((0usize..3, 0usize..6), 0..12)
          .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
      ) {
        prop_assert_eq!(resolve_to_map(&original), resolve_to_map(&shuffled));
      }
    }
  }
}
