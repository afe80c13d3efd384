//! # review-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `review-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations, including the row-locked reassignment
//!   transaction
//! - Embedded schema migrations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use review_db::pool::{create_pool, DatabaseConfig};
//! use review_db::repositories::PgTeamRepository;
//! use review_core::traits::TeamRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let team_repo = PgTeamRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgPullRequestRepository, PgTeamRepository, PgUserRepository};
