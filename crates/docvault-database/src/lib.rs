//! # docvault-database
//!
//! SQLite connection management, embedded migrations, and the concrete
//! repositories for document versions and annotations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
