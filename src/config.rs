//! Configuration types for vk-album-backup
//!
//! The original behavior of this tool is driven by a handful of fixed
//! settings (API bases, API version, destination folder, manifest path) plus
//! two secrets. Secrets are never defaulted: they come from the environment,
//! CLI flags, or interactive prompts in the binary.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// VK photos API settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VkConfig {
    /// OAuth access token for the photos API (env: `VK_ACCESS_TOKEN`)
    #[serde(default)]
    pub access_token: String,

    /// Owner of the album to mirror (the VK user id)
    #[serde(default)]
    pub owner_id: String,

    /// Album to mirror; negative ids address the service albums
    /// (default: -6, the profile album)
    #[serde(default = "default_album_id")]
    pub album_id: i64,

    /// Base URL of the VK method API (default: "https://api.vk.com/method")
    #[serde(default = "default_vk_api_base")]
    pub api_base: String,

    /// VK API version sent with every request (default: "5.131")
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for VkConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            owner_id: String::new(),
            album_id: default_album_id(),
            api_base: default_vk_api_base(),
            api_version: default_api_version(),
        }
    }
}

/// Yandex Disk settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiskConfig {
    /// OAuth access token for the storage API (env: `DISK_ACCESS_TOKEN`)
    #[serde(default)]
    pub access_token: String,

    /// Destination folder created on the storage backend
    /// (default: "vk_images")
    #[serde(default = "default_folder_name")]
    pub folder_name: String,

    /// Base URL of the storage REST API
    /// (default: "https://cloud-api.yandex.net")
    #[serde(default = "default_disk_api_base")]
    pub api_base: String,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            folder_name: default_folder_name(),
            api_base: default_disk_api_base(),
        }
    }
}

/// Output artifact settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the transfer manifest is written; overwritten on every run
    /// (default: "data.json")
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
        }
    }
}

/// Top-level configuration for a transfer run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Photos API settings
    #[serde(default)]
    pub vk: VkConfig,

    /// Storage API settings
    #[serde(default)]
    pub disk: DiskConfig,

    /// Output artifact settings
    #[serde(default)]
    pub output: OutputConfig,

    /// HTTP timeout in seconds applied to both API clients (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vk: VkConfig::default(),
            disk: DiskConfig::default(),
            output: OutputConfig::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Build a configuration from the environment: tokens are read from
    /// `VK_ACCESS_TOKEN` and `DISK_ACCESS_TOKEN`, everything else defaults.
    pub fn from_env() -> Self {
        Self {
            vk: VkConfig {
                access_token: std::env::var("VK_ACCESS_TOKEN").unwrap_or_default(),
                ..VkConfig::default()
            },
            disk: DiskConfig {
                access_token: std::env::var("DISK_ACCESS_TOKEN").unwrap_or_default(),
                ..DiskConfig::default()
            },
            output: OutputConfig::default(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// HTTP timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the settings a run cannot work without are present
    pub fn validate(&self) -> Result<()> {
        if self.vk.access_token.is_empty() {
            return Err(Error::config(
                "photos API access token must not be empty",
                "vk.access_token",
            ));
        }
        if self.vk.owner_id.is_empty() {
            return Err(Error::config(
                "album owner id must not be empty",
                "vk.owner_id",
            ));
        }
        if self.disk.access_token.is_empty() {
            return Err(Error::config(
                "storage access token must not be empty",
                "disk.access_token",
            ));
        }
        if self.disk.folder_name.is_empty() {
            return Err(Error::config(
                "destination folder name must not be empty",
                "disk.folder_name",
            ));
        }
        Ok(())
    }
}

fn default_album_id() -> i64 {
    -6
}

fn default_vk_api_base() -> String {
    "https://api.vk.com/method".to_string()
}

fn default_api_version() -> String {
    "5.131".to_string()
}

fn default_folder_name() -> String {
    "vk_images".to_string()
}

fn default_disk_api_base() -> String {
    "https://cloud-api.yandex.net".to_string()
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_timeout_secs() -> u64 {
    30
}
