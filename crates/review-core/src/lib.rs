//! # review-core
//!
//! Domain layer containing entities, the candidate-selection policy,
//! repository traits, and the pure assignment state-transition rules.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod assignment;
pub mod entities;
pub mod error;
pub mod selection;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{NewPullRequest, PullRequest, PullRequestStatus, Team, TeamMember, User};
pub use error::DomainError;
pub use selection::{CandidateSelector, RandomSelector};
pub use traits::{PullRequestRepository, RepoResult, TeamRepository, UserRepository};
