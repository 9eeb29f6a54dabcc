//! HTTP request handlers, one module per domain.

pub mod analysis;
pub mod document;
pub mod health;
pub mod root;
