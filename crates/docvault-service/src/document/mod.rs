//! Document version upload, listing, and download.

pub mod service;
pub mod upload;

pub use service::{DocumentService, DownloadResult};
pub use upload::UploadService;
