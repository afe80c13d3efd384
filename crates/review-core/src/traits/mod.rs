//! Repository traits (ports)

mod repositories;

pub use repositories::{PullRequestRepository, RepoResult, TeamRepository, UserRepository};
