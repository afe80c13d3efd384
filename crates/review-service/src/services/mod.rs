//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod assignment;
pub mod context;
pub mod error;
pub mod member;
pub mod team;

// Re-export all services for convenience
pub use assignment::AssignmentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use team::TeamService;
