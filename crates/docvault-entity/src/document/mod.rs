//! Document domain entities.

pub mod annotation;
pub mod version;

pub use annotation::{Annotation, CreateAnnotation};
pub use version::{CreateVersion, DocumentVersion};
