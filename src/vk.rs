//! VK photos API client
//!
//! Wraps the single `photos.get` call this tool needs and reduces each album
//! item to its highest-resolution size variant. The API reports failures as a
//! structured `error` object in an otherwise 200 response; that shape is
//! decoded into [`VkError`] and surfaced as [`AlbumFetch::Rejected`] so the
//! caller can degrade instead of aborting. Transport failures and bodies that
//! match neither envelope arm are fatal.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::VkConfig;
use crate::error::Result;
use crate::report::Reporter;
use crate::types::{Dimension, Photo};

/// Structured error returned by the photos API
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VkError {
    /// Numeric API error code
    #[serde(rename = "error_code")]
    pub code: i64,
    /// Human-readable API error message
    #[serde(rename = "error_msg")]
    pub message: String,
}

/// One page of an album listing
#[derive(Clone, Debug, Deserialize)]
pub struct AlbumPage {
    /// Total number of photos in the album
    pub count: u64,
    /// The listed photos, in API order
    pub items: Vec<AlbumItem>,
}

/// One album item as returned with `extended=1` and `photo_sizes=1`
#[derive(Clone, Debug, Deserialize)]
pub struct AlbumItem {
    /// Photo id
    pub id: i64,
    /// Like information
    pub likes: LikesInfo,
    /// Size variants, ascending by resolution per the API convention
    pub sizes: Vec<SizeVariant>,
}

/// Like counter attached to an album item
#[derive(Clone, Debug, Deserialize)]
pub struct LikesInfo {
    /// Number of likes
    pub count: u64,
}

/// One resolution/crop rendition of a photo
#[derive(Clone, Debug, Deserialize)]
pub struct SizeVariant {
    /// Source URL of this rendition
    pub url: String,
    /// Rendition height
    pub height: Dimension,
    /// Rendition width
    pub width: Dimension,
}

/// Outcome of an album listing call
#[derive(Clone, Debug)]
pub enum AlbumFetch {
    /// The API returned the album listing
    Album(AlbumPage),
    /// The API rejected the call with a structured error (already logged)
    Rejected(VkError),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    Failure { error: VkError },
    Success { response: AlbumPage },
}

/// Client for the VK method API
pub struct PhotosClient {
    http: reqwest::Client,
    endpoint: Url,
    access_token: String,
    api_version: String,
    reporter: Arc<dyn Reporter>,
}

impl PhotosClient {
    /// Build a client from the VK section of the configuration
    pub fn new(config: &VkConfig, timeout: Duration, reporter: Arc<dyn Reporter>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let endpoint = Url::parse(&format!(
            "{}/photos.get",
            config.api_base.trim_end_matches('/')
        ))?;
        Ok(Self {
            http,
            endpoint,
            access_token: config.access_token.clone(),
            api_version: config.api_version.clone(),
            reporter,
        })
    }

    /// Fetch the raw album listing for `owner_id`/`album_id`
    ///
    /// A structured API error is logged with the identifying context and
    /// returned as [`AlbumFetch::Rejected`]; the caller decides how to
    /// proceed.
    pub async fn album_photos(&self, owner_id: &str, album_id: i64) -> Result<AlbumFetch> {
        let album_id_param = album_id.to_string();
        let envelope: Envelope = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("owner_id", owner_id),
                ("access_token", self.access_token.as_str()),
                ("v", self.api_version.as_str()),
                ("album_id", album_id_param.as_str()),
                ("photo_sizes", "1"),
                ("extended", "1"),
            ])
            .send()
            .await?
            .json()
            .await?;

        match envelope {
            Envelope::Failure { error } => {
                self.reporter.error(&format!(
                    "failed to fetch photos of user {owner_id} from album {album_id}: \
                     error code {}, message: {}",
                    error.code, error.message
                ));
                Ok(AlbumFetch::Rejected(error))
            }
            Envelope::Success { response } => Ok(AlbumFetch::Album(response)),
        }
    }

    /// Fetch the album and reduce every item to its highest-resolution
    /// rendition
    ///
    /// The API returns size variants in ascending resolution order, so the
    /// last entry is the best one; that ordering is an external contract and
    /// is not validated here. An item with no size variants is logged and
    /// skipped. On a rejected listing the result is an empty vector.
    pub async fn highest_resolution_album_photos(
        &self,
        owner_id: &str,
        album_id: i64,
    ) -> Result<Vec<Photo>> {
        let page = match self.album_photos(owner_id, album_id).await? {
            AlbumFetch::Rejected(_) => return Ok(Vec::new()),
            AlbumFetch::Album(page) => page,
        };

        self.reporter.success(&format!(
            "fetched photos of user {owner_id} from album {album_id}"
        ));

        let mut photos = Vec::with_capacity(page.items.len());
        for item in page.items {
            let AlbumItem {
                id,
                likes,
                mut sizes,
            } = item;
            let Some(best) = sizes.pop() else {
                self.reporter.error(&format!(
                    "photo {id} in album {album_id} has no size variants, skipping"
                ));
                continue;
            };
            photos.push(Photo {
                url: best.url,
                likes_count: likes.count,
                album_id,
                height: best.height,
                width: best.width,
            });
        }
        Ok(photos)
    }
}
