//! Transfer manifest records
//!
//! The manifest is an ordered JSON array of `{file_name, size}` objects, one
//! per retrieved photo, written once at the end of a run. The size label
//! keeps the original `"H:{height}*W:{width}"` format.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Dimension, Photo};

/// One manifest record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Destination filename on the storage backend
    pub file_name: String,
    /// Original dimensions, formatted as `"H:{height}*W:{width}"`
    pub size: String,
}

impl ManifestEntry {
    /// Build the manifest record for one photo
    pub fn for_photo(photo: &Photo) -> Self {
        Self {
            file_name: photo.file_name(),
            size: size_label(&photo.height, &photo.width),
        }
    }
}

/// Format a dimension pair the way the manifest records it
pub fn size_label(height: &Dimension, width: &Dimension) -> String {
    format!("H:{height}*W:{width}")
}

/// Write the manifest to `path`, overwriting any existing file
pub async fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<()> {
    let json = serde_json::to_string(entries)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Read a manifest back from `path`
pub async fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn photo(likes: u64, height: u64, width: u64) -> Photo {
        Photo {
            url: format!("https://cdn.example.com/{likes}.jpg"),
            likes_count: likes,
            album_id: -6,
            height: Dimension::Number(height),
            width: Dimension::Number(width),
        }
    }

    #[test]
    fn size_label_formats_numbers_and_strings() {
        assert_eq!(
            size_label(&Dimension::Number(604), &Dimension::Number(807)),
            "H:604*W:807"
        );
        assert_eq!(
            size_label(
                &Dimension::Text("604".to_string()),
                &Dimension::Text("807".to_string())
            ),
            "H:604*W:807"
        );
    }

    #[test]
    fn entry_for_photo_uses_like_count_and_dimensions() {
        let entry = ManifestEntry::for_photo(&photo(5, 604, 807));
        assert_eq!(entry.file_name, "5.jpg");
        assert_eq!(entry.size, "H:604*W:807");
    }

    #[tokio::test]
    async fn manifest_round_trips_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        let entries = vec![
            ManifestEntry::for_photo(&photo(5, 604, 807)),
            ManifestEntry::for_photo(&photo(10, 605, 807)),
            ManifestEntry::for_photo(&photo(3, 100, 200)),
        ];
        write_manifest(&path, &entries).await.unwrap();

        let read_back = read_manifest(&path).await.unwrap();
        assert_eq!(read_back, entries);
    }

    #[tokio::test]
    async fn write_manifest_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        write_manifest(&path, &[ManifestEntry::for_photo(&photo(1, 10, 20))])
            .await
            .unwrap();
        write_manifest(&path, &[ManifestEntry::for_photo(&photo(2, 30, 40))])
            .await
            .unwrap();

        let read_back = read_manifest(&path).await.unwrap();
        assert_eq!(read_back.len(), 1);
        assert_eq!(read_back[0].file_name, "2.jpg");
    }

    #[tokio::test]
    async fn empty_manifest_serializes_as_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        write_manifest(&path, &[]).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "[]");
    }
}
