//! # review-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreatePullRequestRequest, CreateTeamRequest, HealthResponse, PullRequestResponse,
    ReadinessResponse, ReassignReviewerRequest, ReassignmentResponse, TeamMemberRequest,
    TeamMemberResponse, TeamResponse, UpdateMemberActivityRequest, UserResponse,
};
pub use services::{
    AssignmentService, MemberService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, TeamService,
};
