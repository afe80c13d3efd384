//! Candidate selection policy
//!
//! The storage layer supplies the eligible set (team membership, activity
//! flag, exclusion set already applied); the policy here only decides which
//! of those candidates to take. Keeping the policy out of SQL makes it
//! substitutable and deterministic in tests.

mod random;

pub use random::RandomSelector;

/// Uniform-random sampling policy over a precomputed eligible set.
///
/// The two entry points carry deliberately different shortfall semantics:
/// `pick` is soft (returns fewer than `count` when the eligible set is
/// small, down to an empty result), while `pick_one` is hard (the caller
/// treats `None` as a NoCandidate failure). They must not be unified.
pub trait CandidateSelector: Send + Sync {
    /// Sample up to `count` distinct candidates uniformly at random,
    /// without replacement.
    fn pick(&self, eligible: &[String], count: usize) -> Vec<String>;

    /// Sample exactly one candidate, or `None` if the eligible set is empty.
    fn pick_one(&self, eligible: &[String]) -> Option<String> {
        self.pick(eligible, 1).into_iter().next()
    }
}
