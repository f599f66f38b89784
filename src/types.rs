//! Core types for vk-album-backup

use std::fmt;

use serde::{Deserialize, Serialize};

/// A photo dimension as returned by the listing API
///
/// The API documents `height`/`width` as either an integer or a string; both
/// forms are preserved verbatim so the manifest's size label matches whatever
/// the API sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Numeric pixel dimension
    Number(u64),
    /// Dimension delivered as a string
    Text(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Number(n) => write!(f, "{n}"),
            Dimension::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for Dimension {
    fn from(n: u64) -> Self {
        Dimension::Number(n)
    }
}

/// One album photo reduced to its highest-resolution size variant
///
/// Created once per album item during retrieval and never mutated. The like
/// count doubles as the output filename stem; two photos with the same like
/// count therefore collide on the storage backend, and the upload's overwrite
/// flag makes the later one win. That is the original tool's behavior, kept
/// on purpose.
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    /// Source URL of the highest-resolution rendition
    pub url: String,
    /// Like count of the photo; doubles as the output filename stem
    pub likes_count: u64,
    /// Album the photo was listed from
    pub album_id: i64,
    /// Height of the chosen rendition
    pub height: Dimension,
    /// Width of the chosen rendition
    pub width: Dimension,
}

impl Photo {
    /// Filename stem on the storage backend (the like count)
    pub fn file_stem(&self) -> String {
        self.likes_count.to_string()
    }

    /// Full output filename, `"{likes_count}.jpg"`
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.likes_count)
    }
}

/// Result of ensuring the destination folder exists
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FolderStatus {
    /// The folder exists or the backend reported anything other than an
    /// authorization rejection (unrecognized errors count as ready; see
    /// DESIGN.md)
    Ready,
    /// The backend rejected the request with `UnauthorizedError`
    Unauthorized,
}

/// Result of one upload-by-URL request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The backend accepted the fetch-by-URL request (or returned an
    /// unrecognized error value, which is treated as acceptance)
    Accepted,
    /// The upload request was rejected with `UnauthorizedError`
    Unauthorized,
    /// Folder creation was rejected; the upload was never attempted
    FolderUnauthorized,
}

impl UploadOutcome {
    /// Whether the backend accepted the transfer request
    pub fn is_accepted(&self) -> bool {
        matches!(self, UploadOutcome::Accepted)
    }
}
