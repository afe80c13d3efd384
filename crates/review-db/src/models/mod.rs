//! Database models - SQLx-compatible structs for PostgreSQL tables

mod pull_request;
mod team;
mod user;

pub use pull_request::{PullRequestModel, PullRequestLockRow};
pub use team::TeamMemberModel;
pub use user::UserModel;
