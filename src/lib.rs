//! # vk-album-backup
//!
//! Mirrors a VK photo album to Yandex Disk and records a JSON manifest of
//! the transferred files.
//!
//! The core is a thin sequential pipeline: fetch the album listing, keep the
//! highest-resolution rendition of every photo, ask the storage backend to
//! fetch each rendition by URL into a destination folder, and write a
//! manifest of `{file_name, size}` records. There is no concurrency, no
//! retrying, no pagination and no persistent state — one album page, one
//! pass, one manifest.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use vk_album_backup::{Config, ConsoleReporter, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Tokens come from VK_ACCESS_TOKEN / DISK_ACCESS_TOKEN.
//!     let mut config = Config::from_env();
//!     config.vk.owner_id = "123".to_string();
//!
//!     let reporter = Arc::new(ConsoleReporter::new(true));
//!     let report = pipeline::run(&config, reporter).await?;
//!     println!(
//!         "accepted {} of {} uploads",
//!         report.accepted_count(),
//!         report.photo_count
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Yandex Disk client
pub mod disk;
/// Error types
pub mod error;
/// Transfer manifest records
pub mod manifest;
/// Sequential transfer pipeline
pub mod pipeline;
/// Console reporting
pub mod report;
/// Core types
pub mod types;
/// VK photos API client
pub mod vk;

// Re-export commonly used types
pub use config::{Config, DiskConfig, OutputConfig, VkConfig};
pub use disk::DiskClient;
pub use error::{Error, Result};
pub use manifest::ManifestEntry;
pub use pipeline::PipelineReport;
pub use report::{ConsoleReporter, RecordingReporter, Reporter, Severity};
pub use types::{Dimension, FolderStatus, Photo, UploadOutcome};
pub use vk::{AlbumFetch, AlbumPage, PhotosClient, VkError};
