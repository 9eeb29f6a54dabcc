//! # docvault-service
//!
//! Business logic for DocVault. The pure pieces (version resolution and
//! annotation text) live in [`versioning`] and [`analysis::annotator`];
//! the services wire them to the repositories and the storage provider.
//!
//! Services take their dependencies at construction time as `Arc`s.

pub mod analysis;
pub mod context;
pub mod document;
pub mod versioning;

pub use analysis::AnalysisService;
pub use context::RequestContext;
pub use document::{DocumentService, DownloadResult, UploadService};
