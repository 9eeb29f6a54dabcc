//! # docvault-storage
//!
//! Storage provider implementations for DocVault. Documents live on the
//! local filesystem under a configurable root directory.

pub mod providers;

pub use providers::LocalStorageProvider;
