use crate::model::{PrStatus, ResolvedReviewer, ReviewState};

/// Number of reviewers whose resolved state is an approval.
pub fn approval_count(resolved: &[ResolvedReviewer]) -> usize {
  resolved.iter().filter(|r| r.state == ReviewState::Approved).count()
}

/// Derive the overall status of a PR from resolved states and the threshold.
///
/// The threshold check runs first on purpose: once enough approvals have
/// accumulated, a changes-requested state left behind by some other reviewer
/// does not pull the PR back out of the ready set.
pub fn classify(resolved: &[ResolvedReviewer], required_approvals: u32) -> PrStatus {
  if approval_count(resolved) >= required_approvals as usize {
    return PrStatus::ReadyToMerge;
  }

  if resolved.iter().any(|r| r.state == ReviewState::ChangesRequested) {
    return PrStatus::ChangesRequested;
  }

  PrStatus::NeedsReview
}
