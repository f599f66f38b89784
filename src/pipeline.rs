//! Sequential transfer pipeline
//!
//! One control flow, in order: fetch the album listing, reduce to the best
//! rendition per photo, push each photo to the storage backend by URL, and
//! write the manifest. Every HTTP call completes before the next begins;
//! there is no spawning, no retrying, and no shared mutable state beyond the
//! manifest vector this loop appends to.
//!
//! A manifest entry is appended for every retrieved photo regardless of its
//! upload outcome: the manifest records intended transfers, not confirmed
//! ones. Callers that care about the difference read the per-photo outcomes
//! in [`PipelineReport`].

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::disk::DiskClient;
use crate::error::Result;
use crate::manifest::{self, ManifestEntry};
use crate::report::Reporter;
use crate::types::UploadOutcome;
use crate::vk::PhotosClient;

/// Summary of one pipeline run
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// Number of photos retrieved from the album (== manifest length)
    pub photo_count: usize,
    /// Per-photo upload outcomes, keyed by destination filename, in
    /// retrieval order
    pub uploads: Vec<(String, UploadOutcome)>,
    /// Where the manifest was written
    pub manifest_path: PathBuf,
}

impl PipelineReport {
    /// Number of uploads the backend accepted
    pub fn accepted_count(&self) -> usize {
        self.uploads
            .iter()
            .filter(|(_, outcome)| outcome.is_accepted())
            .count()
    }
}

/// Run the transfer pipeline with the given configuration
pub async fn run(config: &Config, reporter: Arc<dyn Reporter>) -> Result<PipelineReport> {
    config.validate()?;

    let photos_client = PhotosClient::new(&config.vk, config.timeout(), Arc::clone(&reporter))?;
    let disk_client = DiskClient::new(&config.disk, config.timeout(), Arc::clone(&reporter))?;

    let owner_id = &config.vk.owner_id;
    let album_id = config.vk.album_id;
    let folder = &config.disk.folder_name;

    let photos = photos_client
        .highest_resolution_album_photos(owner_id, album_id)
        .await?;

    reporter.info(&format!(
        "user {owner_id} has {} photos in album {album_id}",
        photos.len()
    ));

    let mut entries = Vec::with_capacity(photos.len());
    let mut uploads = Vec::with_capacity(photos.len());
    for photo in &photos {
        let file_name = photo.file_name();
        reporter.info(&format!("uploading photo to {folder}/{file_name}"));

        let outcome = disk_client
            .upload_by_url(&photo.url, &photo.file_stem(), folder)
            .await?;
        uploads.push((file_name, outcome));

        // Appended unconditionally: the manifest mirrors the retrieved
        // photos, not the upload outcomes.
        entries.push(ManifestEntry::for_photo(photo));
    }

    reporter.success(&format!(
        "{} photos of user {owner_id} uploaded to folder {folder}",
        photos.len()
    ));

    let manifest_path = &config.output.manifest_path;
    manifest::write_manifest(manifest_path, &entries).await?;
    reporter.success(&format!("manifest saved to {}", manifest_path.display()));

    Ok(PipelineReport {
        photo_count: photos.len(),
        uploads,
        manifest_path: manifest_path.clone(),
    })
}
