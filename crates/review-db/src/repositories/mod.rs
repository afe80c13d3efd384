//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in review-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod pull_request;
mod team;
mod user;

pub use pull_request::PgPullRequestRepository;
pub use team::PgTeamRepository;
pub use user::PgUserRepository;
