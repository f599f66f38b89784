//! Yandex Disk client
//!
//! Two calls against the storage REST API: ensure the destination folder
//! exists (PUT) and ask the backend to fetch a file by URL into that folder
//! (POST). Errors surface in the response body as a string-valued `error`
//! field; the only value this tool recognizes is `"UnauthorizedError"`.
//! Every other error value is treated as success — that is the original
//! tool's (almost certainly buggy) contract, reproduced on purpose and
//! flagged in DESIGN.md. The HTTP status is deliberately not consulted: the
//! backend pairs its error bodies with 4xx statuses, and the body is the
//! contract here.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use url::Url;

use crate::config::DiskConfig;
use crate::error::Result;
use crate::report::Reporter;
use crate::types::{FolderStatus, UploadOutcome};

const UNAUTHORIZED_ERROR: &str = "UnauthorizedError";

#[derive(Debug, Deserialize)]
struct DiskReply {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the storage REST API
pub struct DiskClient {
    http: reqwest::Client,
    resources_url: Url,
    upload_url: Url,
    auth_header: String,
    reporter: Arc<dyn Reporter>,
}

impl DiskClient {
    /// Build a client from the storage section of the configuration
    pub fn new(config: &DiskConfig, timeout: Duration, reporter: Arc<dyn Reporter>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base = config.api_base.trim_end_matches('/');
        let resources_url = Url::parse(&format!("{base}/v1/disk/resources"))?;
        let upload_url = Url::parse(&format!("{base}/v1/disk/resources/upload"))?;
        Ok(Self {
            http,
            resources_url,
            upload_url,
            auth_header: format!("OAuth {}", config.access_token),
            reporter,
        })
    }

    /// Ensure `folder_name` exists on the backend
    ///
    /// Returns [`FolderStatus::Unauthorized`] only for the exact
    /// `"UnauthorizedError"` value; anything else — including the error the
    /// backend reports when the folder already exists — counts as ready.
    pub async fn create_folder(&self, folder_name: &str) -> Result<FolderStatus> {
        let reply: DiskReply = self
            .http
            .put(self.resources_url.clone())
            .query(&[("path", folder_name)])
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.auth_header)
            .send()
            .await?
            .json()
            .await?;

        if reply.error.as_deref() == Some(UNAUTHORIZED_ERROR) {
            self.reporter.error(&format!(
                "failed to create folder {folder_name}: authorization rejected, check the storage token"
            ));
            return Ok(FolderStatus::Unauthorized);
        }
        Ok(FolderStatus::Ready)
    }

    /// Ask the backend to fetch `source_url` into
    /// `{folder_name}/{output_name}.jpg`, overwriting any existing file
    ///
    /// The destination folder is ensured first; if that is rejected the
    /// upload is not attempted and the outcome is
    /// [`UploadOutcome::FolderUnauthorized`].
    pub async fn upload_by_url(
        &self,
        source_url: &str,
        output_name: &str,
        folder_name: &str,
    ) -> Result<UploadOutcome> {
        if self.create_folder(folder_name).await? == FolderStatus::Unauthorized {
            return Ok(UploadOutcome::FolderUnauthorized);
        }

        let target = format!("{folder_name}/{output_name}.jpg");
        let reply: DiskReply = self
            .http
            .post(self.upload_url.clone())
            .query(&[
                ("path", target.as_str()),
                ("url", source_url),
                ("overwrite", "true"),
            ])
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.auth_header)
            .send()
            .await?
            .json()
            .await?;

        if reply.error.as_deref() == Some(UNAUTHORIZED_ERROR) {
            self.reporter.error(&format!(
                "failed to upload {output_name} to folder {folder_name} from url {source_url}: \
                 authorization rejected, check the storage token"
            ));
            return Ok(UploadOutcome::Unauthorized);
        }
        Ok(UploadOutcome::Accepted)
    }
}
