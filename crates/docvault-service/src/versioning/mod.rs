//! Version number and storage name resolution.

pub mod resolver;

pub use resolver::{ResolvedVersion, resolve, storage_name};
