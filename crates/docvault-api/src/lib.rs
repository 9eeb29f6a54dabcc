//! # docvault-api
//!
//! HTTP API layer for DocVault built on Axum.
//!
//! Provides the REST endpoints for uploading, listing, downloading, and
//! analyzing document versions, plus health checks, request logging, CORS,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_state;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
