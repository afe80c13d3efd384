//! Request extractors
//!
//! Custom Axum extractors for validated request handling.

pub mod validated;

pub use validated::ValidatedJson;
