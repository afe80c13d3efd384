//! Model to entity mappers
//!
//! Conversions from database rows to domain objects. Unknown status values
//! are surfaced as errors rather than silently defaulted.

mod pull_request;
mod team;
mod user;

pub use pull_request::pull_request_with_reviewers;
pub use team::team_member_from_model;
pub use user::user_from_model;
