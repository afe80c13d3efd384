//! Domain entities - core business objects

mod pull_request;
mod team;
mod user;

pub use pull_request::{NewPullRequest, PullRequest, PullRequestStatus};
pub use team::{Team, TeamMember};
pub use user::User;
