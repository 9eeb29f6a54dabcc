//! # docvault-entity
//!
//! Domain entity models for DocVault. Every struct here is either a
//! database row (deriving `sqlx::FromRow`) or the data needed to insert one.

pub mod document;

pub use document::{Annotation, CreateAnnotation, CreateVersion, DocumentVersion};
