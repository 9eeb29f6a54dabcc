//! Heuristic annotation of stored versions.

pub mod annotator;
pub mod service;

pub use annotator::{SizeClass, annotate};
pub use service::AnalysisService;
